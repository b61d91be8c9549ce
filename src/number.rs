use alloc::format;
use core::cmp::Ordering;
use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use core::str::FromStr;

use num_traits::{Float, Num, One, ToPrimitive, Zero};

use crate::Error;

/// A matrix or vector element: either an integer or a real.
///
/// Integer `+`, `-`, `*` stay integral (promoting to a real instead of
/// overflowing); anything involving a real, and every division, produces a
/// real. [`intify`](Number::intify) folds whole-valued reals back into
/// integers. Comparison is numeric across the two variants.
///
/// ```
/// use linalg_kit::Number;
///
/// let a = Number::from(3) * Number::from(4);
/// assert_eq!(a, Number::Int(12));
///
/// let h = Number::from(1) / Number::from(2);
/// assert_eq!(h, Number::Real(0.5));
///
/// let w = Number::from(6) / Number::from(3);
/// assert!(matches!(w, Number::Real(_)));
/// assert!(matches!(w.intify(), Number::Int(2)));
/// assert_eq!(w, Number::Int(2));
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Parse a single literal token.
    ///
    /// Surrounding whitespace is ignored. Integer literals that fit an `i64`
    /// are read exactly; anything else is read as a real, and a finite value
    /// with no fractional part becomes [`Number::Int`].
    ///
    /// ```
    /// use linalg_kit::Number;
    /// assert!(matches!(Number::parse_token(" 3 ").unwrap(), Number::Int(3)));
    /// assert!(matches!(Number::parse_token("4.0").unwrap(), Number::Int(4)));
    /// assert!(matches!(Number::parse_token("-0.25").unwrap(), Number::Real(r) if r == -0.25));
    /// assert!(Number::parse_token("two").is_err());
    /// ```
    pub fn parse_token(token: &str) -> Result<Self, Error> {
        let token = token.trim();
        if let Ok(i) = token.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        token
            .parse::<f64>()
            .map(|r| Number::Real(r).intify())
            .map_err(|_| Error::InvalidInput(format!("`{token}` is not a number")))
    }

    /// The value as an `f64` (integers are converted, possibly rounding).
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Real(r) => r,
        }
    }

    /// Whether this is the integer variant.
    #[inline]
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Whether the value has no fractional part.
    pub fn is_whole(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Real(r) => r.is_finite() && Float::fract(r) == 0.0,
        }
    }

    /// Normalize a whole-valued real to the integer variant.
    ///
    /// Non-whole, non-finite, and out-of-range reals are returned unchanged.
    pub fn intify(self) -> Self {
        match self {
            Number::Real(r)
                if self.is_whole() && r >= i64::MIN as f64 && r < i64::MAX as f64 =>
            {
                Number::Int(r as i64)
            }
            other => other,
        }
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        match self {
            Number::Int(i) => i.checked_abs().map_or(Number::Real(-(i as f64)), Number::Int),
            Number::Real(r) => Number::Real(Float::abs(r)),
        }
    }

    /// Square root, always as a real.
    #[inline]
    pub fn sqrt(self) -> Self {
        Number::Real(Float::sqrt(self.as_f64()))
    }
}

// ── Conversions ─────────────────────────────────────────────────────

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                #[inline]
                fn from(v: $t) -> Self {
                    Number::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    #[inline]
    fn from(v: f32) -> Self {
        Number::Real(f64::from(v))
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Number::Real(v)
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Number::parse_token(s)
    }
}

impl ToPrimitive for Number {
    fn to_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::Real(r) => r.to_i64(),
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(i) => i.to_u64(),
            Number::Real(r) => r.to_u64(),
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.as_f64())
    }
}

// ── Comparison ──────────────────────────────────────────────────────

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

/// Integer-preserving binary operator: integer operands use the checked
/// integer op and fall back to `f64` on overflow.
macro_rules! impl_promoting_op {
    ($tr:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $tr for Number {
            type Output = Number;

            #[inline]
            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => match a.$checked(b) {
                        Some(v) => Number::Int(v),
                        None => Number::Real(a as f64 $op b as f64),
                    },
                    (a, b) => Number::Real(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

impl_promoting_op!(Add, add, checked_add, +);
impl_promoting_op!(Sub, sub, checked_sub, -);
impl_promoting_op!(Mul, mul, checked_mul, *);
impl_promoting_op!(Rem, rem, checked_rem, %);

impl Div for Number {
    type Output = Number;

    /// True division: the quotient is always real, even for two integers.
    #[inline]
    fn div(self, rhs: Number) -> Number {
        Number::Real(self.as_f64() / rhs.as_f64())
    }
}

impl Neg for Number {
    type Output = Number;

    #[inline]
    fn neg(self) -> Number {
        match self {
            Number::Int(i) => i.checked_neg().map_or(Number::Real(-(i as f64)), Number::Int),
            Number::Real(r) => Number::Real(-r),
        }
    }
}

macro_rules! impl_assign_op {
    ($tr:ident, $method:ident, $op:tt) => {
        impl $tr for Number {
            #[inline]
            fn $method(&mut self, rhs: Number) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

impl Zero for Number {
    #[inline]
    fn zero() -> Self {
        Number::Int(0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        match *self {
            Number::Int(i) => i == 0,
            Number::Real(r) => r == 0.0,
        }
    }
}

impl One for Number {
    #[inline]
    fn one() -> Self {
        Number::Int(1)
    }
}

impl Num for Number {
    type FromStrRadixErr = Error;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Error> {
        if radix == 10 {
            return Number::parse_token(s);
        }
        i64::from_str_radix(s.trim(), radix)
            .map(Number::Int)
            .map_err(|_| Error::InvalidInput(format!("`{s}` is not a base-{radix} integer")))
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Self {
        iter.fold(Number::zero(), |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Number> for Number {
    fn sum<I: Iterator<Item = &'a Number>>(iter: I) -> Self {
        iter.fold(Number::zero(), |acc, &x| acc + x)
    }
}

impl Product for Number {
    fn product<I: Iterator<Item = Number>>(iter: I) -> Self {
        iter.fold(Number::one(), |acc, x| acc * x)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // Debug keeps the trailing `.0` on whole reals
            Number::Real(r) => write!(f, "{r:?}"),
        }
    }
}
