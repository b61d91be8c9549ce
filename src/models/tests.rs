use super::*;
use crate::{Error, Matrix, Number, SquareMatrix, Vector};

fn approx_eq(a: f64, b: f64, tol: f64) {
    assert!(
        (a - b).abs() < tol,
        "expected {} ≈ {} (diff = {}, tol = {})",
        a,
        b,
        (a - b).abs(),
        tol
    );
}

fn system() -> LinearSystem {
    let a: Matrix = "2, 1, 3; 5, 2, 4; 1, 0, 3".parse().unwrap();
    let b: Vector = "1, 2, 3".parse().unwrap();
    LinearSystem::new(a, b).unwrap()
}

// ── LinearSystem ────────────────────────────────────────────────────

#[test]
fn linear_system_rejects_mismatched_knowns() {
    let a: Matrix = "1, 2; 3, 4".parse().unwrap();
    assert_eq!(
        LinearSystem::new(a, Vector::from_slice(&[1, 2, 3])),
        Err(Error::DimensionMismatch {
            expected: (2, 1),
            got: (3, 1)
        })
    );
}

#[test]
fn linear_system_augmented_matrix_requires_augment() {
    let mut s = system();
    assert!(!s.is_augmented());
    assert_eq!(s.augmented_matrix(), Err(Error::NotYetAugmented));
    s.augment().unwrap();
    assert!(s.is_augmented());
    assert_eq!(
        s.augmented_matrix().unwrap(),
        &"2, 1, 3, 1; 5, 2, 4, 2; 1, 0, 3, 3"
            .parse::<crate::AugmentedMatrix>()
            .unwrap()
    );
}

#[test]
fn linear_system_augment_is_idempotent() {
    let mut s = system();
    let first = s.augment().unwrap().clone();
    let second = s.augment().unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.dimensions(), (3, 4));
}

#[test]
fn linear_system_getters() {
    let s = system();
    assert_eq!(s.coefficients().dimensions(), (3, 3));
    assert_eq!(s.knowns(), &Vector::from_slice(&[1, 2, 3]));
}

#[test]
fn linear_system_non_square_coefficients() {
    let a: Matrix = "1, 2, 3; 4, 5, 6".parse().unwrap();
    let mut s = LinearSystem::new(a, Vector::from_slice(&[1, 2])).unwrap();
    assert_eq!(
        s.augment().map(|_| ()),
        Err(Error::InvalidAugmentedShape { rows: 2, cols: 4 })
    );
    assert!(!s.is_augmented());
}

#[test]
fn linear_system_solve() {
    let mut s = system();
    let x = s.solve().unwrap();
    approx_eq(x[0].as_f64(), 6.0 / 5.0, 1e-12);
    approx_eq(x[1].as_f64(), -16.0 / 5.0, 1e-12);
    approx_eq(x[2].as_f64(), 3.0 / 5.0, 1e-12);
    assert!(s.is_augmented());

    // the solution satisfies A x = b
    let ax = s.coefficients().apply_transformation(&x).unwrap();
    for (got, want) in ax.iter().zip(s.knowns().iter()) {
        approx_eq(got.as_f64(), want.as_f64(), 1e-12);
    }
}

#[test]
fn linear_system_solve_zero_pivot() {
    let a: Matrix = "0, 1; 1, 0".parse().unwrap();
    let mut s = LinearSystem::new(a, Vector::from_slice(&[2, 3])).unwrap();
    assert_eq!(s.solve(), Err(Error::ZeroPivot { row: 0 }));
}

// ── MarkovChain ─────────────────────────────────────────────────────

fn chain() -> MarkovChain {
    let p: SquareMatrix = "0.9, 0.5; 0.1, 0.5".parse().unwrap();
    MarkovChain::new(p, Vector::from_slice(&[1, 0])).unwrap()
}

#[test]
fn markov_rejects_mismatched_distribution() {
    let p = SquareMatrix::identity(2);
    assert_eq!(
        MarkovChain::new(p, Vector::from_slice(&[1, 0, 0])),
        Err(Error::DimensionMismatch {
            expected: (2, 1),
            got: (3, 1)
        })
    );
}

#[test]
fn markov_uniform_scenario() {
    let p: SquareMatrix = "0.5, 0.5; 0.5, 0.5".parse().unwrap();
    let mut c = MarkovChain::new(p, Vector::from_slice(&[1, 0])).unwrap();
    c.cycle(1).unwrap();
    assert_eq!(c.probability_vector(), &Vector::from_slice(&[0.5, 0.5]));
    assert_eq!(c.cycles(), 1);
    c.restore();
    assert_eq!(c.probability_vector(), &Vector::from_slice(&[1, 0]));
    assert_eq!(c.cycles(), 0);
}

#[test]
fn markov_cycle_n_matches_repeated_steps() {
    let mut a = chain();
    let mut b = chain();
    a.cycle(3).unwrap();
    for _ in 0..3 {
        b.step().unwrap();
    }
    assert_eq!(a.cycles(), 3);
    assert_eq!(b.cycles(), 3);
    for k in 1..=2 {
        approx_eq(
            a.state_at(k).unwrap().as_f64(),
            b.state_at(k).unwrap().as_f64(),
            1e-12,
        );
    }
    // P^3 [1, 0] for P = [[0.9, 0.5], [0.1, 0.5]]
    approx_eq(a.state_at(1).unwrap().as_f64(), 0.844, 1e-12);
    approx_eq(a.state_at(2).unwrap().as_f64(), 0.156, 1e-12);
}

#[test]
fn markov_cycle_zero_is_rejected() {
    let mut c = chain();
    assert!(matches!(c.cycle(0), Err(Error::InvalidInput(_))));
    assert_eq!(c.cycles(), 0);
    assert_eq!(c.probability_vector(), c.initial_probabilities());
}

#[test]
fn markov_state_at_bounds() {
    let c = chain();
    assert_eq!(c.state_at(1).unwrap(), Number::Int(1));
    assert_eq!(c.state_at(0), Err(Error::IndexOutOfRange { index: 0, len: 2 }));
    assert_eq!(c.state_at(3), Err(Error::IndexOutOfRange { index: 3, len: 2 }));
}

#[test]
fn markov_probability_mass_is_conserved() {
    let mut c = chain();
    c.cycle(7).unwrap();
    let total: Number = c.probability_vector().iter().copied().sum();
    approx_eq(total.as_f64(), 1.0, 1e-12);
}

#[test]
fn markov_snapshots_are_independent() {
    let mut c = chain();
    let before = c.probability_vector().clone();
    c.cycle(2).unwrap();
    assert_eq!(before, Vector::from_slice(&[1, 0]));
    assert_eq!(c.initial_probabilities(), &before);
    assert_eq!(c.transition_matrix(), &"0.9, 0.5; 0.1, 0.5".parse::<SquareMatrix>().unwrap());
}
