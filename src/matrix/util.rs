use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use crate::matrix::vector::Vector;
use crate::Number;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl Matrix {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use linalg_kit::{Matrix, Number};
    /// let m = Matrix::from_rows(&[[1, -2], [-3, 4]]).unwrap();
    /// assert_eq!(m.map(Number::abs), Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap());
    /// ```
    pub fn map(&self, f: impl Fn(Number) -> Number) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Copy with every whole-valued real replaced by its integer.
    pub fn intify(&self) -> Matrix {
        self.map(Number::intify)
    }
}

// ── Rows and columns ────────────────────────────────────────────────

impl Matrix {
    /// Owned copy of the grid, one `Vec` per row.
    pub fn rows(&self) -> Vec<Vec<Number>> {
        self.data.chunks(self.ncols).map(<[Number]>::to_vec).collect()
    }

    /// Row `i` (0-indexed) as a vector.
    ///
    /// Panics if `i` is out of range.
    pub fn row(&self, i: usize) -> Vector {
        assert!(i < self.nrows, "row {i} out of range for {} rows", self.nrows);
        Vector::from_vec(self.data[i * self.ncols..(i + 1) * self.ncols].to_vec())
    }

    /// Column `j` (0-indexed) as a vector.
    ///
    /// Panics if `j` is out of range.
    pub fn col(&self, j: usize) -> Vector {
        assert!(j < self.ncols, "column {j} out of range for {} columns", self.ncols);
        Vector::from_vec((0..self.nrows).map(|i| self[(i, j)]).collect())
    }
}

// ── Formatting ──────────────────────────────────────────────────────

impl Matrix {
    /// Render as the literal accepted by [`FromStr`](core::str::FromStr).
    ///
    /// ```
    /// use linalg_kit::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 0.5], [3.0, -4.0]]).unwrap();
    /// assert_eq!(m.to_literal(), "1.0, 0.5; 3.0, -4.0");
    /// assert_eq!(m.to_literal().parse::<Matrix>().unwrap(), m);
    /// ```
    pub fn to_literal(&self) -> String {
        let mut out = String::new();
        for (i, row) in self.data.chunks(self.ncols).enumerate() {
            if i > 0 {
                out.push_str("; ");
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    out.push_str(", ");
                }
                // writing to a String cannot fail
                let _ = write!(out, "{x}");
            }
        }
        out
    }

    pub(crate) fn fmt_grid(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('[')?;
        for (i, row) in self.data.chunks(self.ncols).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_char('[')?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{x}")?;
            }
            f.write_char(']')?;
        }
        f.write_char(']')
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.chunks(self.ncols).enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char('\t')?;
                }
                write!(f, "{x}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matrix(")?;
        self.fmt_grid(f)?;
        f.write_char(')')
    }
}
