use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Index, Mul, Neg, Sub};
use core::slice;

use num_traits::{Float, Zero};

use crate::{Error, Matrix, Number};

/// A fixed-dimension sequence of [`Number`]s.
///
/// Binary operations check dimensions and report [`Error::DimensionMismatch`]
/// with the operands described as `dim x 1` columns. Geometry helpers
/// (`heading`, `angle_to`, `cross`) are only defined in R2 / R3 and return
/// [`Error::InvalidOperation`] elsewhere.
///
/// # Examples
///
/// ```
/// use linalg_kit::{Number, Vector};
///
/// let v = Vector::from_slice(&[3, 4]);
/// assert_eq!(v.magnitude(), Number::Int(5));
/// assert_eq!(v.get(2).unwrap(), Number::Int(4));
/// assert_eq!(v.get_0(1).unwrap(), Number::Int(4));
///
/// let w: Vector = "1, 0.5, 2".parse().unwrap();
/// assert_eq!(w.dim(), 3);
/// ```
#[derive(Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector {
    data: Vec<Number>,
}

/// Levi-Civita symbol on 0-based indices: +1 for cyclic permutations of
/// `(0, 1, 2)`, -1 for anticyclic ones, 0 when any index repeats.
fn levi_civita(i: usize, j: usize, k: usize) -> i64 {
    match (i, j, k) {
        (0, 1, 2) | (1, 2, 0) | (2, 0, 1) => 1,
        (0, 2, 1) | (2, 1, 0) | (1, 0, 2) => -1,
        _ => 0,
    }
}

// ── Constructors ────────────────────────────────────────────────────

impl Vector {
    /// Create a vector from a slice of anything convertible into [`Number`].
    ///
    /// ```
    /// use linalg_kit::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.5]);
    /// assert_eq!(v.dim(), 2);
    /// ```
    pub fn from_slice<N: Copy + Into<Number>>(data: &[N]) -> Self {
        Self {
            data: data.iter().map(|&x| x.into()).collect(),
        }
    }

    /// Create a vector from an owned `Vec<Number>`.
    pub fn from_vec(data: Vec<Number>) -> Self {
        Self { data }
    }

    /// Create a zero vector of dimension `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![Number::zero(); n],
        }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl Vector {
    /// Number of components.
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector has no components.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Owned copy of the components.
    pub fn to_vec(&self) -> Vec<Number> {
        self.data.clone()
    }

    /// View the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Number] {
        &self.data
    }

    /// Iterate over the components.
    pub fn iter(&self) -> slice::Iter<'_, Number> {
        self.data.iter()
    }

    /// Component `i`, 1-indexed.
    pub fn get(&self, i: usize) -> Result<Number, Error> {
        self.check_index_1(i)?;
        Ok(self.data[i - 1])
    }

    /// Component `i`, 0-indexed.
    pub fn get_0(&self, i: usize) -> Result<Number, Error> {
        self.check_index_0(i)?;
        Ok(self.data[i])
    }

    /// Overwrite component `i`, 1-indexed.
    pub fn set(&mut self, i: usize, value: impl Into<Number>) -> Result<(), Error> {
        self.check_index_1(i)?;
        self.data[i - 1] = value.into();
        Ok(())
    }

    /// Overwrite component `i`, 0-indexed.
    pub fn set_0(&mut self, i: usize, value: impl Into<Number>) -> Result<(), Error> {
        self.check_index_0(i)?;
        self.data[i] = value.into();
        Ok(())
    }

    /// First component; requires `dim >= 1`.
    pub fn x(&self) -> Result<Number, Error> {
        self.component(0, "x component requires dimension >= 1")
    }

    /// Second component; requires `dim >= 2`.
    pub fn y(&self) -> Result<Number, Error> {
        self.component(1, "y component requires dimension >= 2")
    }

    /// Third component; requires `dim >= 3`.
    pub fn z(&self) -> Result<Number, Error> {
        self.component(2, "z component requires dimension >= 3")
    }

    fn component(&self, i: usize, msg: &'static str) -> Result<Number, Error> {
        self.data.get(i).copied().ok_or(Error::InvalidOperation(msg))
    }

    fn check_index_1(&self, i: usize) -> Result<(), Error> {
        if i == 0 || i > self.dim() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.dim(),
            });
        }
        Ok(())
    }

    fn check_index_0(&self, i: usize) -> Result<(), Error> {
        if i >= self.dim() {
            return Err(Error::IndexOutOfRange {
                index: i,
                len: self.dim(),
            });
        }
        Ok(())
    }

    fn check_same_dim(&self, rhs: &Vector) -> Result<(), Error> {
        if self.dim() != rhs.dim() {
            return Err(Error::DimensionMismatch {
                expected: (self.dim(), 1),
                got: (rhs.dim(), 1),
            });
        }
        Ok(())
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Vector {
    /// Elementwise sum.
    pub fn try_add(&self, rhs: &Vector) -> Result<Vector, Error> {
        self.check_same_dim(rhs)?;
        Ok(self.zip_map(rhs, |a, b| a + b))
    }

    /// Elementwise difference.
    pub fn try_sub(&self, rhs: &Vector) -> Result<Vector, Error> {
        self.check_same_dim(rhs)?;
        Ok(self.zip_map(rhs, |a, b| a - b))
    }

    /// Multiply every component by `scalar`.
    pub fn scalar_mul(&self, scalar: impl Into<Number>) -> Vector {
        let s = scalar.into();
        self.map(|x| s * x)
    }

    /// Copy with every whole-valued real component turned into an integer.
    pub fn intify(&self) -> Vector {
        self.map(Number::intify)
    }

    fn map(&self, f: impl Fn(Number) -> Number) -> Vector {
        Vector {
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    fn zip_map(&self, rhs: &Vector, f: impl Fn(Number, Number) -> Number) -> Vector {
        Vector {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }
}

// ── Geometry ────────────────────────────────────────────────────────

impl Vector {
    /// Dot product.
    ///
    /// ```
    /// use linalg_kit::{Number, Vector};
    /// let a = Vector::from_slice(&[1, 2, 3]);
    /// let b = Vector::from_slice(&[4, 5, 6]);
    /// assert_eq!(a.dot(&b).unwrap(), Number::Int(32));
    /// ```
    pub fn dot(&self, rhs: &Vector) -> Result<Number, Error> {
        self.check_same_dim(rhs)?;
        Ok(self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a * b)
            .sum())
    }

    /// Whether the dot product is exactly zero.
    pub fn is_orthogonal(&self, rhs: &Vector) -> Result<bool, Error> {
        Ok(self.dot(rhs)?.is_zero())
    }

    /// Sum of squared components.
    pub fn magnitude_squared(&self) -> Number {
        self.data.iter().map(|&x| x * x).sum()
    }

    /// Euclidean length, as an integer when the root is exact.
    pub fn magnitude(&self) -> Number {
        self.magnitude_squared().sqrt().intify()
    }

    /// Copy scaled to unit length.
    ///
    /// Fails with [`Error::InvalidOperation`] for a zero-magnitude vector.
    pub fn unitized(&self) -> Result<Vector, Error> {
        let mag = self.magnitude();
        if mag.is_zero() {
            return Err(Error::InvalidOperation("cannot unitize a zero vector"));
        }
        Ok(self.map(|x| x / mag))
    }

    /// Scale this vector to unit length in place.
    ///
    /// Leaves the vector untouched on error.
    pub fn unitize(&mut self) -> Result<(), Error> {
        *self = self.unitized()?;
        Ok(())
    }

    /// Angle from the positive x-axis, in radians (R2 only).
    pub fn heading(&self) -> Result<f64, Error> {
        if self.dim() != 2 {
            return Err(Error::InvalidOperation("heading is only defined in R2"));
        }
        Ok(Float::atan2(self.data[1].as_f64(), self.data[0].as_f64()))
    }

    /// [`heading`](Vector::heading) in degrees.
    pub fn heading_degrees(&self) -> Result<f64, Error> {
        self.heading().map(Float::to_degrees)
    }

    /// Angle between two vectors of equal dimension 2 or 3, in radians.
    ///
    /// Fails with [`Error::InvalidOperation`] if either vector has zero
    /// magnitude.
    ///
    /// ```
    /// use linalg_kit::Vector;
    /// let a = Vector::from_slice(&[1, 0]);
    /// let b = Vector::from_slice(&[0, 3]);
    /// assert!((a.angle_to(&b).unwrap() - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    /// ```
    pub fn angle_to(&self, rhs: &Vector) -> Result<f64, Error> {
        if !matches!(self.dim(), 2 | 3) || rhs.dim() != self.dim() {
            return Err(Error::InvalidOperation(
                "angle is only defined between vectors of equal dimension 2 or 3",
            ));
        }
        let norms = self.magnitude() * rhs.magnitude();
        if norms.is_zero() {
            return Err(Error::InvalidOperation(
                "angle is undefined for a zero vector",
            ));
        }
        let cos = self.dot(rhs)? / norms;
        Ok(Float::acos(cos.as_f64()))
    }

    /// [`angle_to`](Vector::angle_to) in degrees.
    pub fn angle_to_degrees(&self, rhs: &Vector) -> Result<f64, Error> {
        self.angle_to(rhs).map(Float::to_degrees)
    }

    /// Cross product of two R3 vectors.
    ///
    /// Component `i` is `Σ_jk ε(i,j,k) a[j] b[k]` with ε the Levi-Civita
    /// symbol, so integer inputs give integer results.
    ///
    /// ```
    /// use linalg_kit::Vector;
    /// let x = Vector::from_slice(&[1, 0, 0]);
    /// let y = Vector::from_slice(&[0, 1, 0]);
    /// assert_eq!(x.cross(&y).unwrap(), Vector::from_slice(&[0, 0, 1]));
    /// ```
    pub fn cross(&self, rhs: &Vector) -> Result<Vector, Error> {
        if self.dim() != 3 || rhs.dim() != 3 {
            return Err(Error::InvalidOperation(
                "cross product is only defined in R3",
            ));
        }
        let mut out = Vector::zeros(3);
        for i in 0..3 {
            let mut component = Number::zero();
            for j in 0..3 {
                for k in 0..3 {
                    let eps = levi_civita(i, j, k);
                    if eps != 0 {
                        component += Number::Int(eps) * self.data[j] * rhs.data[k];
                    }
                }
            }
            out.data[i] = component;
        }
        Ok(out)
    }

    /// Treat this vector as a column and left-multiply it by `matrix`.
    ///
    /// The result has `matrix.nrows()` components. Fails with
    /// [`Error::DimensionMismatch`] unless `matrix.ncols() == self.dim()`.
    ///
    /// ```
    /// use linalg_kit::{Matrix, Vector};
    /// let rot = Matrix::from_rows(&[[0, -1], [1, 0]]).unwrap();
    /// let v = Vector::from_slice(&[1, 0]);
    /// assert_eq!(v.apply_transformation(&rot).unwrap(), Vector::from_slice(&[0, 1]));
    /// ```
    pub fn apply_transformation(&self, matrix: &Matrix) -> Result<Vector, Error> {
        if matrix.ncols() != self.dim() {
            return Err(Error::DimensionMismatch {
                expected: (matrix.ncols(), 1),
                got: (self.dim(), 1),
            });
        }
        let data = (0..matrix.nrows())
            .map(|i| {
                self.data
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| matrix[(i, j)] * x)
                    .sum()
            })
            .collect();
        Ok(Vector { data })
    }
}

// ── Operators ───────────────────────────────────────────────────────

impl Index<usize> for Vector {
    type Output = Number;

    #[inline]
    fn index(&self, i: usize) -> &Number {
        &self.data[i]
    }
}

impl Add<&Vector> for &Vector {
    type Output = Vector;

    /// Panics on dimension mismatch; see [`Vector::try_add`].
    fn add(self, rhs: &Vector) -> Vector {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        &self + &rhs
    }
}

impl Sub<&Vector> for &Vector {
    type Output = Vector;

    /// Panics on dimension mismatch; see [`Vector::try_sub`].
    fn sub(self, rhs: &Vector) -> Vector {
        self.try_sub(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        &self - &rhs
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        self.map(|x| -x)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        -&self
    }
}

impl Mul<Number> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: Number) -> Vector {
        self.scalar_mul(rhs)
    }
}

impl Mul<Number> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Number) -> Vector {
        self.scalar_mul(rhs)
    }
}

impl From<Vec<Number>> for Vector {
    fn from(data: Vec<Number>) -> Self {
        Vector { data }
    }
}

impl From<Vector> for Vec<Number> {
    fn from(v: Vector) -> Self {
        v.data
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Number;
    type IntoIter = slice::Iter<'a, Number>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Vector {
    /// Literal form, `1, 2, 3`, which parses back with `str::parse`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, x) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector([{self}])")
    }
}
