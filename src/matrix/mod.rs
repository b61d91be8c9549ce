#[macro_use]
mod wrapper;
mod augmented;
mod linalg;
mod ops;
mod parse;
mod square;
mod util;
pub mod vector;

pub use augmented::AugmentedMatrix;
pub use square::SquareMatrix;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use num_traits::Zero;

use crate::traits::{MatrixMut, MatrixRef};
use crate::{Error, Number};

/// Dense matrix of [`Number`]s with runtime dimensions.
///
/// Row-major `Vec<Number>` storage. Always rectangular and non-empty: every
/// constructor rejects ragged or empty grids. Fallible operations return
/// [`Error`]; the `+`, `-`, `*` operators panic on shape mismatch instead.
///
/// Accessors come in two flavours: [`get`](Matrix::get) / [`set`](Matrix::set)
/// are 1-indexed and checked, [`get_0`](Matrix::get_0) / [`set_0`](Matrix::set_0)
/// and `m[(i, j)]` are 0-indexed.
///
/// # Examples
///
/// ```
/// use linalg_kit::{Matrix, Number};
///
/// let a = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(a[(0, 1)], Number::Int(2));
/// assert_eq!(a.get(2, 1).unwrap(), Number::Int(3));
/// assert_eq!(a.determinant().unwrap(), Number::Int(-2));
///
/// let b: Matrix = "2, 1, 3; 5, 2, 4; 1, 0, 3".parse().unwrap();
/// assert_eq!(b.dimensions(), (3, 3));
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Number>>", into = "Vec<Vec<Number>>")
)]
pub struct Matrix {
    data: Vec<Number>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Matrix {
    /// Create a matrix from a grid of rows.
    ///
    /// Accepts anything row-like (`[[i32; N]; M]`, `&[Vec<f64>]`, ...) whose
    /// elements convert into [`Number`]. Fails with [`Error::NonRectangular`]
    /// for ragged rows and [`Error::InvalidInput`] for an empty grid.
    ///
    /// ```
    /// use linalg_kit::{Error, Matrix};
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.5], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.nrows(), 2);
    ///
    /// let ragged = Matrix::from_rows(&[vec![1, 2], vec![3]]);
    /// assert_eq!(ragged.unwrap_err(), Error::NonRectangular { row: 1, expected: 2, got: 1 });
    /// ```
    pub fn from_rows<R, N>(rows: &[R]) -> Result<Self, Error>
    where
        R: AsRef<[N]>,
        N: Copy + Into<Number>,
    {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(nrows * ncols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != ncols {
                return Err(Error::NonRectangular {
                    row: i,
                    expected: ncols,
                    got: row.len(),
                });
            }
            data.extend(row.iter().map(|&x| x.into()));
        }
        Self::from_vec(nrows, ncols, data)
    }

    /// Create a matrix from row-major data.
    ///
    /// Fails with [`Error::InvalidInput`] if either dimension is zero or the
    /// data length is not `nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<Number>) -> Result<Self, Error> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::InvalidInput(
                "matrix must have at least one row and one column".into(),
            ));
        }
        if data.len() != nrows * ncols {
            return Err(Error::InvalidInput(alloc::format!(
                "{} values do not fill a {}x{} matrix",
                data.len(),
                nrows,
                ncols
            )));
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// Panics if either dimension is zero.
    ///
    /// ```
    /// use linalg_kit::{Matrix, Number};
    /// let m = Matrix::from_fn(2, 3, |i, j| Number::from((i * 3 + j) as i64));
    /// assert_eq!(m[(1, 2)], Number::Int(5));
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> Number) -> Self {
        assert!(
            nrows > 0 && ncols > 0,
            "matrix must have at least one row and one column, got {nrows}x{ncols}"
        );
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Create an `nrows x ncols` matrix of integer zeros.
    ///
    /// Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_fn(nrows, ncols, |_, _| Number::zero())
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Matrix {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// View the elements as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[Number] {
        &self.data
    }

    /// Element `(i, j)`, 1-indexed.
    pub fn get(&self, i: usize, j: usize) -> Result<Number, Error> {
        self.check_index_1(i, j)?;
        Ok(self[(i - 1, j - 1)])
    }

    /// Element `(i, j)`, 0-indexed.
    pub fn get_0(&self, i: usize, j: usize) -> Result<Number, Error> {
        self.check_index_0(i, j)?;
        Ok(self[(i, j)])
    }

    /// Overwrite element `(i, j)`, 1-indexed.
    pub fn set(&mut self, i: usize, j: usize, value: impl Into<Number>) -> Result<(), Error> {
        self.check_index_1(i, j)?;
        self[(i - 1, j - 1)] = value.into();
        Ok(())
    }

    /// Overwrite element `(i, j)`, 0-indexed.
    pub fn set_0(&mut self, i: usize, j: usize, value: impl Into<Number>) -> Result<(), Error> {
        self.check_index_0(i, j)?;
        self[(i, j)] = value.into();
        Ok(())
    }

    fn check_index_1(&self, i: usize, j: usize) -> Result<(), Error> {
        if i == 0 || i > self.nrows {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.nrows,
            });
        }
        if j == 0 || j > self.ncols {
            return Err(Error::IndexOutOfRange {
                index: j,
                len: self.ncols,
            });
        }
        Ok(())
    }

    fn check_index_0(&self, i: usize, j: usize) -> Result<(), Error> {
        if i >= self.nrows {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.nrows,
            });
        }
        if j >= self.ncols {
            return Err(Error::IndexOutOfRange {
                index: j,
                len: self.ncols,
            });
        }
        Ok(())
    }

    pub(crate) fn require_square(&self) -> Result<(), Error> {
        if !self.is_square() {
            return Err(Error::NotSquare {
                rows: self.nrows,
                cols: self.ncols,
            });
        }
        Ok(())
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl MatrixRef<Number> for Matrix {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn entry(&self, row: usize, col: usize) -> &Number {
        &self.data[row * self.ncols + col]
    }
}

impl MatrixMut<Number> for Matrix {
    #[inline]
    fn entry_mut(&mut self, row: usize, col: usize) -> &mut Number {
        &mut self.data[row * self.ncols + col]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl Index<(usize, usize)> for Matrix {
    type Output = Number;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Number {
        assert!(col < self.ncols, "column {col} out of range for {} columns", self.ncols);
        &self.data[row * self.ncols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Number {
        assert!(col < self.ncols, "column {col} out of range for {} columns", self.ncols);
        &mut self.data[row * self.ncols + col]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl TryFrom<Vec<Vec<Number>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<Number>>) -> Result<Self, Error> {
        Matrix::from_rows(&rows)
    }
}

impl From<Matrix> for Vec<Vec<Number>> {
    fn from(m: Matrix) -> Self {
        m.rows()
    }
}
