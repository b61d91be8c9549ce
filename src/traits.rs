use core::fmt::Debug;
use num_traits::{Num, One, Zero};

/// Trait for types that can be used as elements by the [`linalg`](crate::linalg)
/// kernels.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// [`Number`](crate::Number) as well as the primitive integer and float types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Read-only, 0-indexed access to a matrix-like type.
///
/// Lets the determinant and reduction kernels operate on [`Matrix`](crate::Matrix)
/// and its square / augmented specializations alike.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn entry(&self, row: usize, col: usize) -> &T;

    /// Whether the matrix has as many rows as columns.
    #[inline]
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling the in-place
/// row reduction to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut T;
}
