//! # linalg-kit
//!
//! Small dense linear-algebra toolkit over exact-when-possible numbers,
//! no-std compatible (requires `alloc`).
//!
//! ## Quick start
//!
//! ```
//! use linalg_kit::{AugmentedMatrix, Matrix, Number, Vector};
//!
//! let a: Matrix = "2, 1, 3; 5, 2, 4; 1, 0, 3".parse().unwrap();
//! assert_eq!(a.determinant().unwrap(), Number::Int(-5));
//!
//! let b = Vector::from_slice(&[1, 2, 3]);
//! let x = AugmentedMatrix::from_parts(&a, &b)
//!     .unwrap()
//!     .reduced_row_echelon()
//!     .unwrap()
//!     .knowns(); // x = [1.2, -3.2, 0.6]
//! assert!((x[1].as_f64() + 3.2).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`number`]: [`Number`], an integer-or-real element. Integer arithmetic
//!   stays integral until it would overflow; division is always real;
//!   `intify` folds whole-valued reals back to integers.
//!
//! - [`matrix`]: Heap-allocated [`Matrix`] with runtime dimensions and
//!   row-major storage, plus the shape-checked [`SquareMatrix`] and
//!   [`AugmentedMatrix`] wrappers and the [`Vector`] type. Fallible operations
//!   return [`Error`]; the arithmetic operators panic on shape mismatch.
//!   Matrices and vectors parse from literals like `"1, 2; 3, 4"`.
//!
//! - [`linalg`]: Cofactor-expansion determinants and in-place row
//!   reduction (REF / RREF, no pivoting), as free functions over
//!   [`MatrixRef`] / [`MatrixMut`].
//!
//! - [`models`]: [`LinearSystem`] (coefficients + knowns, augmented and
//!   solved by RREF) and [`MarkovChain`] (a distribution advanced by powers
//!   of a transition matrix).
//!
//! - [`traits`]: [`Scalar`] element bound and the [`MatrixRef`] /
//!   [`MatrixMut`] access traits used by the kernels.
//!
//! ## Logging
//!
//! Emits records through the [`log`](https://docs.rs/log) facade: `debug` when
//! matrices are composed and when models augment or advance, `trace` for every
//! pivot of a row reduction. Nothing is printed unless the application installs
//! a logger.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | `std::error::Error` for [`Error`]; system float routines |
//! | `serde` | no       | `Serialize` / `Deserialize` for numbers, vectors and matrices |
//!
//! Without `std`, float routines come from `libm` through `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod models;
pub mod number;
pub mod traits;

pub use error::Error;
pub use matrix::vector::Vector;
pub use matrix::{AugmentedMatrix, Matrix, SquareMatrix};
pub use models::{LinearSystem, MarkovChain};
pub use number::Number;
pub use traits::{MatrixMut, MatrixRef, Scalar};
