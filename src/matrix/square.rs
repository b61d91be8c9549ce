use core::ops::Mul;

use num_traits::{One, Zero};

use crate::linalg::cofactor_det;
use crate::{Error, Number};

use super::Matrix;

/// A [`Matrix`] with as many rows as columns.
///
/// Dereferences to [`Matrix`] for the read-only API. Operations that keep a
/// matrix square (sums, negation, scaling, products with another square
/// matrix, transpose, minors, cofactors) return `SquareMatrix` again, and
/// operations that can only fail on a non-square input (trace, determinant)
/// are infallible here.
///
/// ```
/// use linalg_kit::{Number, SquareMatrix};
///
/// let a: SquareMatrix = "1, 2; 3, 4".parse().unwrap();
/// assert_eq!(a.determinant(), Number::Int(-2));
/// assert_eq!(a.trace(), Number::Int(5));
///
/// let (sym, anti) = a.symmetric_decomposition();
/// assert!(sym.is_symmetric());
/// assert!(anti.is_antisymmetric());
/// assert_eq!(&sym + &anti, a);
/// ```
#[derive(Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Matrix", into = "Matrix")
)]
pub struct SquareMatrix {
    inner: Matrix,
}

impl_matrix_wrapper!(SquareMatrix);

// ── Constructors ────────────────────────────────────────────────────

impl SquareMatrix {
    /// Wrap `m`, failing with [`Error::NotSquare`] if it is not square.
    pub fn new(m: Matrix) -> Result<Self, Error> {
        m.require_square()?;
        Ok(Self { inner: m })
    }

    pub(crate) fn from_square(inner: Matrix) -> Self {
        debug_assert!(inner.is_square());
        Self { inner }
    }

    /// The `dim x dim` identity.
    ///
    /// Panics if `dim` is zero.
    pub fn identity(dim: usize) -> Self {
        Self {
            inner: Matrix::from_fn(dim, dim, |i, j| {
                if i == j {
                    Number::one()
                } else {
                    Number::zero()
                }
            }),
        }
    }

    /// The `dim x dim` zero matrix.
    ///
    /// Panics if `dim` is zero.
    pub fn zero(dim: usize) -> Self {
        Self {
            inner: Matrix::zeros(dim, dim),
        }
    }

    /// Side length.
    #[inline]
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }
}

// ── Square-only operations ──────────────────────────────────────────

impl SquareMatrix {
    /// Sum of the diagonal entries.
    pub fn trace(&self) -> Number {
        (0..self.dim()).map(|i| self.inner[(i, i)]).sum()
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> Number {
        cofactor_det(&self.inner)
    }

    /// Transpose.
    pub fn transpose(&self) -> SquareMatrix {
        Self {
            inner: self.inner.transpose(),
        }
    }

    /// Matrix of minors; see [`Matrix::minor`].
    pub fn minor(&self) -> SquareMatrix {
        Self {
            inner: Matrix::from_fn(self.dim(), self.dim(), |i, j| {
                crate::linalg::minor_det(&self.inner, i, j)
            }),
        }
    }

    /// Matrix of cofactors; see [`Matrix::cofactor`].
    pub fn cofactor(&self) -> SquareMatrix {
        Self {
            inner: Matrix::from_fn(self.dim(), self.dim(), |i, j| {
                crate::linalg::cofactor(&self.inner, i, j)
            }),
        }
    }

    /// Product with another square matrix of the same side length.
    ///
    /// For products with an arbitrary [`Matrix`], go through
    /// [`as_matrix`](SquareMatrix::as_matrix).
    pub fn multiply(&self, rhs: &SquareMatrix) -> Result<SquareMatrix, Error> {
        self.inner.multiply(&rhs.inner).map(|inner| Self { inner })
    }

    /// `self` multiplied by itself `n` times, by repeated squaring.
    ///
    /// `pow(0)` is the identity.
    ///
    /// ```
    /// use linalg_kit::SquareMatrix;
    /// let m: SquareMatrix = "1, 1; 0, 1".parse().unwrap();
    /// assert_eq!(m.pow(3), "1, 3; 0, 1".parse::<SquareMatrix>().unwrap());
    /// assert_eq!(m.pow(0), SquareMatrix::identity(2));
    /// ```
    pub fn pow(&self, mut n: u32) -> SquareMatrix {
        let mut result = Self::identity(self.dim());
        let mut base = self.clone();
        while n > 0 {
            if n & 1 == 1 {
                result = &result * &base;
            }
            n >>= 1;
            if n > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Whether `self == transpose(self)`.
    pub fn is_symmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| ((i + 1)..n).all(|j| self.inner[(i, j)] == self.inner[(j, i)]))
    }

    /// Whether `self == -transpose(self)`. The diagonal must be zero.
    pub fn is_antisymmetric(&self) -> bool {
        let n = self.dim();
        (0..n).all(|i| (i..n).all(|j| self.inner[(i, j)] == -self.inner[(j, i)]))
    }

    /// Split into symmetric and antisymmetric parts,
    /// `((A + Aᵀ) / 2, (A - Aᵀ) / 2)`, each intified.
    pub fn symmetric_decomposition(&self) -> (SquareMatrix, SquareMatrix) {
        let t = self.inner.transpose();
        let two = Number::Int(2);
        let sym = (&self.inner + &t).scalar_div(two).intify();
        let anti = (&self.inner - &t).scalar_div(two).intify();
        (Self { inner: sym }, Self { inner: anti })
    }
}

impl Mul<&SquareMatrix> for &SquareMatrix {
    type Output = SquareMatrix;

    fn mul(self, rhs: &SquareMatrix) -> SquareMatrix {
        SquareMatrix {
            inner: &self.inner * &rhs.inner,
        }
    }
}

impl Mul for SquareMatrix {
    type Output = SquareMatrix;

    fn mul(self, rhs: SquareMatrix) -> SquareMatrix {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vector;
    use alloc::format;

    fn sq(s: &str) -> SquareMatrix {
        s.parse().unwrap()
    }

    #[test]
    fn construction() {
        let a = SquareMatrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        assert_eq!(a.dim(), 2);
        assert_eq!(
            SquareMatrix::from_rows(&[[1, 2, 3], [4, 5, 6]]),
            Err(Error::NotSquare { rows: 2, cols: 3 })
        );
        assert!(matches!(
            "1, 2, 3".parse::<SquareMatrix>(),
            Err(Error::NotSquare { rows: 1, cols: 3 })
        ));
        let m: Matrix = "1, 2; 3, 4".parse().unwrap();
        assert_eq!(SquareMatrix::try_from(m.clone()).unwrap().into_matrix(), m);
    }

    #[test]
    fn identity_and_zero() {
        let id = SquareMatrix::identity(3);
        assert_eq!(id, sq("1, 0, 0; 0, 1, 0; 0, 0, 1"));
        assert_eq!(&id * &id, id);
        assert_eq!(SquareMatrix::zero(2), sq("0, 0; 0, 0"));
        assert_eq!(id.determinant(), Number::Int(1));
    }

    #[test]
    fn deref_reaches_matrix_api() {
        let a = sq("1, 2; 3, 4");
        assert_eq!(a.nrows(), 2);
        assert_eq!(a.get(2, 1).unwrap(), Number::Int(3));
        assert_eq!(a.row(0), Vector::from_slice(&[1, 2]));
        assert_eq!(a.to_literal(), "1, 2; 3, 4");
    }

    #[test]
    fn shape_preserving_ops_stay_square() {
        let a = sq("1, 2; 3, 4");
        let b = sq("0, 1; 1, 0");
        let sum: SquareMatrix = a.try_add(&b).unwrap();
        assert_eq!(sum, sq("1, 3; 4, 4"));
        let diff: SquareMatrix = &a - &b;
        assert_eq!(diff, sq("1, 1; 2, 4"));
        let neg: SquareMatrix = -&a;
        assert_eq!(neg, sq("-1, -2; -3, -4"));
        let scaled: SquareMatrix = a.scalar_mul(2);
        assert_eq!(scaled, sq("2, 4; 6, 8"));
        let halved: SquareMatrix = a.scalar_div(2).intify();
        assert_eq!(halved, sq("0.5, 1; 1.5, 2"));
        let t: SquareMatrix = a.transpose();
        assert_eq!(t, sq("1, 3; 2, 4"));
        let prod: SquareMatrix = a.multiply(&b).unwrap();
        assert_eq!(prod, sq("2, 1; 4, 3"));
        assert!(a.multiply(&SquareMatrix::identity(3)).is_err());
    }

    #[test]
    fn determinant_and_trace() {
        let a = sq("2, 1, 3; 5, 2, 4; 1, 0, 3");
        assert_eq!(a.determinant(), Number::Int(-5));
        assert_eq!(a.trace(), Number::Int(7));
        assert_eq!(a.determinant(), a.transpose().determinant());
    }

    #[test]
    fn minor_and_cofactor() {
        let a = sq("1, 2; 3, 4");
        assert_eq!(a.minor(), sq("4, 3; 2, 1"));
        assert_eq!(a.cofactor(), sq("4, -3; -2, 1"));
        assert_eq!(sq("5").minor(), sq("1"));
    }

    #[test]
    fn pow() {
        let a = sq("2, 1; 0, 1");
        assert_eq!(a.pow(0), SquareMatrix::identity(2));
        assert_eq!(a.pow(1), a);
        assert_eq!(a.pow(2), &a * &a);
        assert_eq!(a.pow(5), sq("32, 31; 0, 1"));
    }

    #[test]
    fn symmetry() {
        assert!(sq("1, 2; 2, 3").is_symmetric());
        assert!(!sq("1, 2; 3, 4").is_symmetric());
        assert!(sq("0, 2; -2, 0").is_antisymmetric());
        assert!(!sq("1, 2; -2, 0").is_antisymmetric());
        assert!(!sq("0, 2; 2, 0").is_antisymmetric());
    }

    #[test]
    fn symmetric_decomposition() {
        let a = sq("1, 2, 3; 4, 5, 6; 7, 8, 10");
        let (s, k) = a.symmetric_decomposition();
        assert!(s.is_symmetric());
        assert!(k.is_antisymmetric());
        assert_eq!(s, sq("1, 3, 5; 3, 5, 7; 5, 7, 10"));
        assert!(s.as_slice().iter().all(|x| x.is_integer()));
        assert_eq!(&s + &k, a);
    }

    #[test]
    fn symmetric_decomposition_keeps_halves() {
        let a = sq("0, 1; 0, 0");
        let (s, k) = a.symmetric_decomposition();
        assert_eq!(s, sq("0, 0.5; 0.5, 0"));
        assert_eq!(k, sq("0, 0.5; -0.5, 0"));
    }

    #[test]
    fn debug_names_the_type() {
        assert_eq!(format!("{:?}", sq("1, 2; 3, 4")), "SquareMatrix([[1, 2], [3, 4]])");
        assert_eq!(format!("{}", sq("1, 2; 3, 4")), "1\t2\n3\t4");
    }
}
