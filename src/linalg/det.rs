use alloc::vec::Vec;

use crate::traits::{MatrixRef, Scalar};

/// Determinant by recursive cofactor expansion along the first row.
///
/// 1×1 and 2×2 matrices are evaluated directly; larger ones expand into
/// signed minors. Cost is O(n!) and no division is performed, so integer
/// matrices yield exact integer determinants. The empty (0×0) matrix has
/// determinant one.
///
/// Panics if the matrix is not square.
///
/// ```
/// use linalg_kit::{Matrix, Number};
/// use linalg_kit::linalg::cofactor_det;
///
/// let m = Matrix::from_rows(&[[6, 1, 1], [4, -2, 5], [2, 8, 7]]).unwrap();
/// assert_eq!(cofactor_det(&m), Number::from(-306));
/// ```
pub fn cofactor_det<T: Scalar>(a: &impl MatrixRef<T>) -> T {
    assert!(a.is_square(), "determinant requires a square matrix");
    let idx: Vec<usize> = (0..a.nrows()).collect();
    expand(a, &idx, &idx)
}

/// Determinant of the submatrix left after deleting `row` and `col`.
///
/// Panics if the matrix is not square or either index is out of range.
pub fn minor_det<T: Scalar>(a: &impl MatrixRef<T>, row: usize, col: usize) -> T {
    assert!(a.is_square(), "minor requires a square matrix");
    let n = a.nrows();
    assert!(row < n && col < n, "minor index ({row}, {col}) out of range for {n}x{n}");
    let rows: Vec<usize> = (0..n).filter(|&i| i != row).collect();
    let cols: Vec<usize> = (0..n).filter(|&j| j != col).collect();
    expand(a, &rows, &cols)
}

/// Signed minor: `(-1)^(row + col) * minor_det(a, row, col)`.
pub fn cofactor<T: Scalar>(a: &impl MatrixRef<T>, row: usize, col: usize) -> T {
    let m = minor_det(a, row, col);
    if (row + col) % 2 == 0 {
        m
    } else {
        T::zero() - m
    }
}

/// Expand the determinant of the submatrix selected by `rows` x `cols`.
fn expand<T: Scalar, M: MatrixRef<T> + ?Sized>(a: &M, rows: &[usize], cols: &[usize]) -> T {
    debug_assert_eq!(rows.len(), cols.len());
    match rows.len() {
        0 => T::one(),
        1 => *a.entry(rows[0], cols[0]),
        2 => {
            let (r0, r1) = (rows[0], rows[1]);
            let (c0, c1) = (cols[0], cols[1]);
            *a.entry(r0, c0) * *a.entry(r1, c1) - *a.entry(r0, c1) * *a.entry(r1, c0)
        }
        n => {
            let top = rows[0];
            let sub_rows = &rows[1..];
            let mut sub_cols = Vec::with_capacity(n - 1);
            let mut det = T::zero();
            for (j, &c) in cols.iter().enumerate() {
                sub_cols.clear();
                sub_cols.extend(cols.iter().copied().filter(|&k| k != c));
                let term = *a.entry(top, c) * expand(a, sub_rows, &sub_cols);
                det = if j % 2 == 0 { det + term } else { det - term };
            }
            det
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Matrix, Number};

    fn m(rows: &[&[i64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn det_small() {
        assert_eq!(cofactor_det(&m(&[&[7]])), Number::Int(7));
        assert_eq!(cofactor_det(&m(&[&[1, 2], &[3, 4]])), Number::Int(-2));
    }

    #[test]
    fn det_3x3() {
        let a = m(&[&[7, 2, 9], &[8, 1, 4], &[4, 0, -2]]);
        assert!(matches!(cofactor_det(&a), Number::Int(14)));
    }

    #[test]
    fn det_singular_4x4() {
        let a = m(&[&[1, 2, 3, 4], &[2, 3, 4, 5], &[3, 4, 5, 6], &[4, 5, 6, 7]]);
        assert_eq!(cofactor_det(&a), Number::Int(0));
    }

    #[test]
    fn det_4x4() {
        let a = m(&[&[2, 0, 1, 3], &[1, 1, 0, 2], &[0, 3, 1, 1], &[4, 1, 2, 0]]);
        assert_eq!(cofactor_det(&a), Number::Int(-32));
    }

    #[test]
    fn minors_and_cofactors() {
        let a = m(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 10]]);
        // delete row 0, col 1: [[4, 6], [7, 10]]
        assert_eq!(minor_det(&a, 0, 1), Number::Int(-2));
        assert_eq!(cofactor(&a, 0, 1), Number::Int(2));
        assert_eq!(cofactor(&a, 1, 1), Number::Int(-11));
    }

    #[test]
    fn works_on_primitives() {
        struct Plain([[f64; 3]; 3]);
        impl MatrixRef<f64> for Plain {
            fn nrows(&self) -> usize {
                3
            }
            fn ncols(&self) -> usize {
                3
            }
            fn entry(&self, row: usize, col: usize) -> &f64 {
                &self.0[row][col]
            }
        }
        let p = Plain([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert!((cofactor_det(&p) - (-306.0)).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn det_non_square_panics() {
        let _ = cofactor_det(&m(&[&[1, 2, 3]]));
    }
}
