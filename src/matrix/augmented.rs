use crate::linalg::{row_reduce_in_place, Elimination};
use crate::matrix::vector::Vector;
use crate::Error;

use super::{Matrix, SquareMatrix};

/// An `n x (n + 1)` matrix: square coefficients with a column of knowns
/// appended on the right.
///
/// ```
/// use linalg_kit::{AugmentedMatrix, Vector};
///
/// let a: AugmentedMatrix = "2, 1, 3, 1; 5, 2, 4, 2; 1, 0, 3, 3".parse().unwrap();
/// let solved = a.reduced_row_echelon().unwrap();
/// let x = solved.knowns();
/// assert!((x[0].as_f64() - 1.2).abs() < 1e-12);
/// assert!((x[1].as_f64() + 3.2).abs() < 1e-12);
/// assert!((x[2].as_f64() - 0.6).abs() < 1e-12);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Matrix", into = "Matrix")
)]
pub struct AugmentedMatrix {
    inner: Matrix,
}

impl_matrix_wrapper!(AugmentedMatrix);

impl AugmentedMatrix {
    /// Wrap `m`, failing with [`Error::InvalidAugmentedShape`] unless it has
    /// exactly one more column than rows.
    pub fn new(m: Matrix) -> Result<Self, Error> {
        let (rows, cols) = m.dimensions();
        if cols != rows + 1 {
            return Err(Error::InvalidAugmentedShape { rows, cols });
        }
        Ok(Self { inner: m })
    }

    /// Append `knowns` to `coefficients` as a final column.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `knowns` does not have one
    /// entry per row, and with [`Error::InvalidAugmentedShape`] if the
    /// coefficients are not square.
    pub fn from_parts(coefficients: &Matrix, knowns: &Vector) -> Result<Self, Error> {
        let (rows, cols) = coefficients.dimensions();
        if knowns.dim() != rows {
            return Err(Error::DimensionMismatch {
                expected: (rows, 1),
                got: (knowns.dim(), 1),
            });
        }
        Self::new(Matrix::from_fn(rows, cols + 1, |i, j| {
            if j < cols {
                coefficients[(i, j)]
            } else {
                knowns[i]
            }
        }))
    }

    /// Number of equations.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// The leading square block.
    pub fn coefficients(&self) -> SquareMatrix {
        let n = self.dim();
        let block = Matrix::from_fn(n, n, |i, j| self.inner[(i, j)]);
        // n x n by construction
        SquareMatrix::from_square(block)
    }

    /// The last column.
    pub fn knowns(&self) -> Vector {
        self.inner.col(self.dim())
    }

    fn reduced(&self, mode: Elimination) -> Result<AugmentedMatrix, Error> {
        let mut m = self.inner.clone();
        row_reduce_in_place(&mut m, mode)?;
        Ok(Self { inner: m.intify() })
    }

    /// Row echelon form with unit pivots: each pivot row is divided by its
    /// diagonal entry and subtracted from the rows below it.
    ///
    /// Pivots are taken from the diagonal in order without row swaps, so an
    /// exactly zero pivot fails with [`Error::ZeroPivot`]. `self` is left
    /// unchanged either way.
    ///
    /// ```
    /// use linalg_kit::AugmentedMatrix;
    /// let a: AugmentedMatrix = "2, 4, 2; 1, 3, 4".parse().unwrap();
    /// assert_eq!(a.row_echelon().unwrap(), "1, 2, 1; 0, 1, 3".parse::<AugmentedMatrix>().unwrap());
    /// ```
    #[doc(alias = "ref")]
    pub fn row_echelon(&self) -> Result<AugmentedMatrix, Error> {
        self.reduced(Elimination::Below)
    }

    /// Reduced row echelon form: like [`row_echelon`](Self::row_echelon) but
    /// each pivot also clears the rows above it. For a nonsingular system the
    /// coefficient block becomes the identity and [`knowns`](Self::knowns)
    /// holds the solution.
    #[doc(alias = "rref")]
    pub fn reduced_row_echelon(&self) -> Result<AugmentedMatrix, Error> {
        self.reduced(Elimination::Full)
    }
}
