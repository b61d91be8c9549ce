use log::trace;

use crate::traits::{MatrixMut, Scalar};
use crate::Error;

/// Which rows are cleared around each pivot during row reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elimination {
    /// Only rows below the pivot: row echelon form (REF) with unit pivots.
    Below,
    /// Every row other than the pivot row: reduced row echelon form (RREF).
    Full,
}

/// Gauss-Jordan style row reduction, in place.
///
/// For each pivot `r` in `0..min(nrows, ncols)`, row `r` is divided by
/// `a[r][r]` and then `a[other][r] * row r` is subtracted from each row
/// selected by `mode`. Pivots are taken from the diagonal as they stand; no
/// row swapping is performed.
///
/// Returns [`Error::ZeroPivot`] if a diagonal pivot is exactly zero. Rows
/// above the failing pivot have already been transformed at that point, so
/// callers that need the original should reduce a copy.
///
/// ```
/// use linalg_kit::Matrix;
/// use linalg_kit::linalg::{row_reduce_in_place, Elimination};
///
/// let mut a = Matrix::from_rows(&[[2.0, 4.0, 6.0], [1.0, 3.0, 5.0]]).unwrap();
/// row_reduce_in_place(&mut a, Elimination::Full).unwrap();
/// assert_eq!(a, Matrix::from_rows(&[[1, 0, -1], [0, 1, 2]]).unwrap());
/// ```
pub fn row_reduce_in_place<T: Scalar>(
    a: &mut impl MatrixMut<T>,
    mode: Elimination,
) -> Result<(), Error> {
    let nrows = a.nrows();
    let ncols = a.ncols();

    for r in 0..nrows.min(ncols) {
        let pivot = *a.entry(r, r);
        if pivot.is_zero() {
            return Err(Error::ZeroPivot { row: r });
        }
        trace!("pivot row {r}: {pivot:?}");

        for c in 0..ncols {
            let v = *a.entry(r, c);
            *a.entry_mut(r, c) = v / pivot;
        }

        let first = match mode {
            Elimination::Below => r + 1,
            Elimination::Full => 0,
        };
        for other in (first..nrows).filter(|&o| o != r) {
            let factor = *a.entry(other, r);
            for c in 0..ncols {
                let v = *a.entry(r, c);
                let cell = a.entry_mut(other, c);
                *cell = *cell - factor * v;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Number};

    #[test]
    fn full_reduction_solves() {
        let mut a = Matrix::from_rows(&[[2, 1, 3, 1], [5, 2, 4, 2], [1, 0, 3, 3]]).unwrap();
        row_reduce_in_place(&mut a, Elimination::Full).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(a[(i, j)], Number::from(expected));
            }
        }
        assert!((a[(0, 3)].as_f64() - 1.2).abs() < 1e-12);
        assert!((a[(1, 3)].as_f64() + 3.2).abs() < 1e-12);
        assert!((a[(2, 3)].as_f64() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn below_leaves_upper_triangle() {
        let mut a = Matrix::from_rows(&[[2, 4, 2], [1, 3, 4]]).unwrap();
        row_reduce_in_place(&mut a, Elimination::Below).unwrap();
        // row0 = [1, 2, 1]; row1 = [0, 1, 3] / 1
        assert_eq!(a, Matrix::from_rows(&[[1, 2, 1], [0, 1, 3]]).unwrap());
    }

    #[test]
    fn zero_pivot_is_reported() {
        let mut a = Matrix::from_rows(&[[0, 1, 1], [1, 0, 2]]).unwrap();
        assert_eq!(
            row_reduce_in_place(&mut a, Elimination::Full),
            Err(Error::ZeroPivot { row: 0 })
        );
    }

    #[test]
    fn zero_pivot_after_elimination() {
        // row1 - 2*row0 leaves a zero on the diagonal
        let mut a = Matrix::from_rows(&[[1, 2, 3], [2, 4, 7]]).unwrap();
        assert_eq!(
            row_reduce_in_place(&mut a, Elimination::Below),
            Err(Error::ZeroPivot { row: 1 })
        );
    }

    #[test]
    fn primitive_floats() {
        struct Rows(Vec<[f64; 3]>);
        impl crate::traits::MatrixRef<f64> for Rows {
            fn nrows(&self) -> usize {
                self.0.len()
            }
            fn ncols(&self) -> usize {
                3
            }
            fn entry(&self, row: usize, col: usize) -> &f64 {
                &self.0[row][col]
            }
        }
        impl MatrixMut<f64> for Rows {
            fn entry_mut(&mut self, row: usize, col: usize) -> &mut f64 {
                &mut self.0[row][col]
            }
        }
        let mut a = Rows(vec![[4.0, 2.0, 8.0], [1.0, 3.0, 7.0]]);
        row_reduce_in_place(&mut a, Elimination::Full).unwrap();
        assert!((a.0[0][2] - 1.0).abs() < 1e-12);
        assert!((a.0[1][2] - 2.0).abs() < 1e-12);
    }
}
