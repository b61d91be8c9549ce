//! Generic kernels behind the matrix types: cofactor-expansion determinants
//! and in-place row reduction.
//!
//! The free functions operate on anything implementing
//! [`MatrixRef`](crate::MatrixRef) / [`MatrixMut`](crate::MatrixMut) with a
//! [`Scalar`](crate::Scalar) element, so they serve [`Matrix`](crate::Matrix),
//! [`SquareMatrix`](crate::SquareMatrix) and
//! [`AugmentedMatrix`](crate::AugmentedMatrix) alike. Most callers want the
//! methods on those types instead (`determinant`, `minor`, `cofactor`,
//! `row_echelon`, `reduced_row_echelon`).
//!
//! Neither kernel pivots or applies tolerances: zero tests are exact.

pub(crate) mod det;
pub(crate) mod reduce;

pub use det::{cofactor, cofactor_det, minor_det};
pub use reduce::{row_reduce_in_place, Elimination};
