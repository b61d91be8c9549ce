//! Small models composed from the matrix types.
//!
//! # Linear systems
//!
//! ```
//! use linalg_kit::{LinearSystem, Matrix, Vector};
//!
//! let a: Matrix = "2, 1, 3; 5, 2, 4; 1, 0, 3".parse().unwrap();
//! let b: Vector = "1, 2, 3".parse().unwrap();
//! let mut system = LinearSystem::new(a, b).unwrap();
//!
//! system.augment().unwrap();
//! let rref = system.augmented_matrix().unwrap().reduced_row_echelon().unwrap();
//! let x = rref.knowns();
//! assert!((x[0].as_f64() - 1.2).abs() < 1e-12);
//! ```
//!
//! # Markov chains
//!
//! ```
//! use linalg_kit::{MarkovChain, SquareMatrix, Vector};
//!
//! let p: SquareMatrix = "0.5, 0.5; 0.5, 0.5".parse().unwrap();
//! let mut chain = MarkovChain::new(p, Vector::from_slice(&[1, 0])).unwrap();
//!
//! chain.cycle(1).unwrap();
//! assert_eq!(chain.probability_vector(), &Vector::from_slice(&[0.5, 0.5]));
//!
//! chain.restore();
//! assert_eq!(chain.probability_vector(), &Vector::from_slice(&[1, 0]));
//! ```

mod linear_system;
mod markov_chain;

#[cfg(test)]
mod tests;

pub use linear_system::LinearSystem;
pub use markov_chain::MarkovChain;
