use alloc::vec;

use log::debug;

use crate::matrix::vector::Vector;
use crate::{Error, Matrix, Number, SquareMatrix};

/// Discrete-time Markov chain over a finite state space.
///
/// The current distribution `v` advances as `v <- P v` per step, where `P`
/// is the transition matrix. The initial distribution is kept so the chain
/// can be [`restore`](Self::restore)d.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkovChain {
    transition: SquareMatrix,
    probabilities: Vector,
    initial: Vector,
    cycles: usize,
}

impl MarkovChain {
    /// Fails with [`Error::DimensionMismatch`] unless the initial
    /// distribution has one entry per state.
    pub fn new(transition: SquareMatrix, initial: Vector) -> Result<Self, Error> {
        if transition.dim() != initial.dim() {
            return Err(Error::DimensionMismatch {
                expected: (transition.dim(), 1),
                got: (initial.dim(), 1),
            });
        }
        Ok(Self {
            transition,
            probabilities: initial.clone(),
            initial,
            cycles: 0,
        })
    }

    /// Advance `n` steps at once by applying `P^n`.
    ///
    /// `P^n` is the left-to-right composition of `n` copies of `P` (just `P`
    /// when `n == 1`). Fails with [`Error::InvalidInput`] if `n == 0`.
    pub fn cycle(&mut self, n: usize) -> Result<(), Error> {
        if n == 0 {
            return Err(Error::InvalidInput("cycle count must be positive".into()));
        }
        debug!("advancing markov chain by {n} step(s)");
        let next = if n == 1 {
            self.probabilities.apply_transformation(&self.transition)?
        } else {
            let copies = vec![self.transition.as_matrix(); n];
            let power = Matrix::compose(&copies)?;
            self.probabilities.apply_transformation(&power)?
        };
        self.probabilities = next;
        self.cycles += n;
        Ok(())
    }

    /// Advance a single step.
    pub fn step(&mut self) -> Result<(), Error> {
        self.cycle(1)
    }

    /// Probability of state `k`, 1-indexed.
    pub fn state_at(&self, k: usize) -> Result<Number, Error> {
        self.probabilities.get(k)
    }

    /// Reset to the initial distribution.
    pub fn restore(&mut self) {
        self.probabilities = self.initial.clone();
        self.cycles = 0;
    }

    /// The transition matrix.
    pub fn transition_matrix(&self) -> &SquareMatrix {
        &self.transition
    }

    /// The current distribution.
    pub fn probability_vector(&self) -> &Vector {
        &self.probabilities
    }

    /// The distribution restored by [`restore`](Self::restore).
    pub fn initial_probabilities(&self) -> &Vector {
        &self.initial
    }

    /// Steps taken since construction or the last [`restore`](Self::restore).
    pub fn cycles(&self) -> usize {
        self.cycles
    }
}
