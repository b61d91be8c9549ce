use crate::linalg::{cofactor, cofactor_det, minor_det};
use crate::matrix::vector::Vector;
use crate::{Error, Number};

use super::Matrix;

impl Matrix {
    /// Sum of the diagonal entries.
    ///
    /// ```
    /// use linalg_kit::{Matrix, Number};
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.trace().unwrap(), Number::Int(5));
    /// ```
    pub fn trace(&self) -> Result<Number, Error> {
        self.require_square()?;
        Ok((0..self.nrows).map(|i| self[(i, i)]).sum())
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// Cost grows factorially with the dimension.
    pub fn determinant(&self) -> Result<Number, Error> {
        self.require_square()?;
        Ok(cofactor_det(self))
    }

    /// Matrix of minors: cell `(i, j)` holds the determinant of `self` with
    /// row `i` and column `j` removed.
    ///
    /// The minor of a 1x1 matrix is `[[1]]`.
    ///
    /// ```
    /// use linalg_kit::Matrix;
    /// let m: Matrix = "1, 2; 3, 4".parse().unwrap();
    /// assert_eq!(m.minor().unwrap(), "4, 3; 2, 1".parse::<Matrix>().unwrap());
    /// assert_eq!(m.cofactor().unwrap(), "4, -3; -2, 1".parse::<Matrix>().unwrap());
    /// ```
    pub fn minor(&self) -> Result<Matrix, Error> {
        self.require_square()?;
        Ok(Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            minor_det(self, i, j)
        }))
    }

    /// Matrix of cofactors: the minor matrix with cell `(i, j)` multiplied by
    /// `(-1)^(i + j)`.
    pub fn cofactor(&self) -> Result<Matrix, Error> {
        self.require_square()?;
        Ok(Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            cofactor(self, i, j)
        }))
    }

    /// `self * v`, treating `v` as a column.
    pub fn apply_transformation(&self, v: &Vector) -> Result<Vector, Error> {
        v.apply_transformation(self)
    }
}
