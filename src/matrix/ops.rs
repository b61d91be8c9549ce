use alloc::vec::Vec;
use core::ops::{Add, Div, Mul, Neg, Sub};

use log::debug;

use crate::matrix::vector::Vector;
use crate::{Error, Number};

use super::Matrix;

// ── Fallible arithmetic ─────────────────────────────────────────────

impl Matrix {
    fn zip_with(
        &self,
        rhs: &Matrix,
        f: impl Fn(Number, Number) -> Number,
    ) -> Result<Matrix, Error> {
        if self.dimensions() != rhs.dimensions() {
            return Err(Error::DimensionMismatch {
                expected: self.dimensions(),
                got: rhs.dimensions(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Elementwise sum. Both operands must have the same dimensions.
    ///
    /// ```
    /// use linalg_kit::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b = Matrix::from_rows(&[[10, 20], [30, 40]]).unwrap();
    /// assert_eq!(a.try_add(&b).unwrap(), Matrix::from_rows(&[[11, 22], [33, 44]]).unwrap());
    /// ```
    pub fn try_add(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Elementwise difference. Both operands must have the same dimensions.
    pub fn try_sub(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiply every element by `scalar`.
    pub fn scalar_mul(&self, scalar: impl Into<Number>) -> Matrix {
        let s = scalar.into();
        self.map(|x| x * s)
    }

    /// Divide every element by `scalar`.
    ///
    /// Division is always real, so the result holds [`Number::Real`]s; use
    /// [`intify`](Matrix::intify) to fold whole values back.
    pub fn scalar_div(&self, scalar: impl Into<Number>) -> Matrix {
        let s = scalar.into();
        self.map(|x| x / s)
    }

    /// Matrix product `self * rhs`.
    ///
    /// Requires `self.ncols() == rhs.nrows()`; otherwise
    /// [`Error::DimensionMismatch`] reports the shape `rhs` should have had.
    ///
    /// ```
    /// use linalg_kit::Matrix;
    /// let a = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let b = Matrix::from_rows(&[[1, 0], [0, 1], [1, 1]]).unwrap();
    /// assert_eq!(a.multiply(&b).unwrap(), Matrix::from_rows(&[[4, 5], [10, 11]]).unwrap());
    /// assert!(b.multiply(&b).is_err());
    /// ```
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, Error> {
        if self.ncols != rhs.nrows {
            return Err(Error::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: rhs.dimensions(),
            });
        }
        let mut data = Vec::with_capacity(self.nrows * rhs.ncols);
        for i in 0..self.nrows {
            for j in 0..rhs.ncols {
                data.push((0..self.ncols).map(|k| self[(i, k)] * rhs[(k, j)]).sum());
            }
        }
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: rhs.ncols,
        })
    }

    /// Left-to-right product of two or more matrices:
    /// `compose(&[a, b, c]) == (a * b) * c`.
    ///
    /// Fails with [`Error::InvalidInput`] for fewer than two operands and
    /// with the first [`Error::DimensionMismatch`] met along the chain.
    ///
    /// ```
    /// use linalg_kit::Matrix;
    /// let r: Matrix = "0, -1; 1, 0".parse().unwrap();
    /// let half_turn = Matrix::compose(&[&r, &r]).unwrap();
    /// assert_eq!(half_turn, "-1, 0; 0, -1".parse::<Matrix>().unwrap());
    /// ```
    pub fn compose(matrices: &[&Matrix]) -> Result<Matrix, Error> {
        let (first, rest) = match matrices {
            [first, rest @ ..] if !rest.is_empty() => (first, rest),
            _ => {
                return Err(Error::InvalidInput(alloc::format!(
                    "compose needs at least two matrices, got {}",
                    matrices.len()
                )))
            }
        };
        debug!("composing {} matrices", matrices.len());
        rest.iter()
            .try_fold((*first).clone(), |acc, m| acc.multiply(m))
    }

    /// The transpose.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── Element-wise addition ───────────────────────────────────────────

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Matrix) -> Matrix {
        &self + &rhs
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Matrix) -> Matrix {
        &self - &rhs
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        -&self
    }
}

// ── Matrix products ─────────────────────────────────────────────────

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl Mul<&Vector> for &Matrix {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs.apply_transformation(self)
            .unwrap_or_else(|e| panic!("{e}"))
    }
}

// ── Scalar ops ──────────────────────────────────────────────────────

impl Mul<Number> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Number) -> Matrix {
        self.scalar_mul(rhs)
    }
}

impl Mul<Number> for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Number) -> Matrix {
        self.scalar_mul(rhs)
    }
}

impl Div<Number> for &Matrix {
    type Output = Matrix;

    fn div(self, rhs: Number) -> Matrix {
        self.scalar_div(rhs)
    }
}

impl Div<Number> for Matrix {
    type Output = Matrix;

    fn div(self, rhs: Number) -> Matrix {
        self.scalar_div(rhs)
    }
}
