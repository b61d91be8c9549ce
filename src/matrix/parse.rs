//! Literal parsing: `"1, 2; 3, 4"` for matrices, `"1, 2, 3"` for vectors.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::matrix::vector::Vector;
use crate::{Error, Number};

use super::Matrix;

fn parse_row(row: &str) -> Result<Vec<Number>, Error> {
    row.split(',').map(Number::parse_token).collect()
}

impl FromStr for Matrix {
    type Err = Error;

    /// Rows are separated by `;`, elements by `,`. Whitespace around tokens
    /// is ignored.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::InvalidInput("empty matrix literal".into()));
        }
        let rows = s.split(';').map(parse_row).collect::<Result<Vec<_>, _>>()?;
        Matrix::from_rows(&rows)
    }
}

impl FromStr for Vector {
    type Err = Error;

    /// Elements are separated by `,`. Whitespace around tokens is ignored.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::InvalidInput("empty vector literal".into()));
        }
        parse_row(s).map(Vector::from_vec)
    }
}
