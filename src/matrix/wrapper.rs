/// Shared plumbing for the shape-constrained matrix newtypes.
///
/// `$ty` must be a struct with a single `inner: Matrix` field and an
/// associated `fn new(Matrix) -> Result<Self, Error>` that validates the shape.
/// Read-only `Matrix` API is reached through `Deref`; every operation that
/// cannot change the shape is re-exposed here returning `$ty` itself.
macro_rules! impl_matrix_wrapper {
    ($ty:ident) => {
        impl $ty {
            /// Borrow as a plain [`Matrix`](crate::Matrix).
            #[inline]
            pub fn as_matrix(&self) -> &crate::Matrix {
                &self.inner
            }

            /// Unwrap into a plain [`Matrix`](crate::Matrix).
            #[inline]
            pub fn into_matrix(self) -> crate::Matrix {
                self.inner
            }

            /// Create from a grid of rows, validating the shape.
            pub fn from_rows<R, N>(rows: &[R]) -> Result<Self, crate::Error>
            where
                R: AsRef<[N]>,
                N: Copy + Into<crate::Number>,
            {
                Self::new(crate::Matrix::from_rows(rows)?)
            }

            /// Elementwise sum.
            pub fn try_add(&self, rhs: &$ty) -> Result<$ty, crate::Error> {
                self.inner.try_add(&rhs.inner).map(|inner| $ty { inner })
            }

            /// Elementwise difference.
            pub fn try_sub(&self, rhs: &$ty) -> Result<$ty, crate::Error> {
                self.inner.try_sub(&rhs.inner).map(|inner| $ty { inner })
            }

            /// Multiply every element by `scalar`.
            pub fn scalar_mul(&self, scalar: impl Into<crate::Number>) -> $ty {
                $ty {
                    inner: self.inner.scalar_mul(scalar),
                }
            }

            /// Divide every element by `scalar` (true division).
            pub fn scalar_div(&self, scalar: impl Into<crate::Number>) -> $ty {
                $ty {
                    inner: self.inner.scalar_div(scalar),
                }
            }

            /// Copy with whole-valued reals normalized to integers.
            pub fn intify(&self) -> $ty {
                $ty {
                    inner: self.inner.intify(),
                }
            }

            /// Overwrite element `(i, j)`, 1-indexed.
            pub fn set(
                &mut self,
                i: usize,
                j: usize,
                value: impl Into<crate::Number>,
            ) -> Result<(), crate::Error> {
                self.inner.set(i, j, value)
            }

            /// Overwrite element `(i, j)`, 0-indexed.
            pub fn set_0(
                &mut self,
                i: usize,
                j: usize,
                value: impl Into<crate::Number>,
            ) -> Result<(), crate::Error> {
                self.inner.set_0(i, j, value)
            }
        }

        impl core::ops::Deref for $ty {
            type Target = crate::Matrix;

            #[inline]
            fn deref(&self) -> &crate::Matrix {
                &self.inner
            }
        }

        impl AsRef<crate::Matrix> for $ty {
            #[inline]
            fn as_ref(&self) -> &crate::Matrix {
                &self.inner
            }
        }

        impl From<$ty> for crate::Matrix {
            #[inline]
            fn from(m: $ty) -> crate::Matrix {
                m.inner
            }
        }

        impl TryFrom<crate::Matrix> for $ty {
            type Error = crate::Error;

            fn try_from(m: crate::Matrix) -> Result<Self, crate::Error> {
                $ty::new(m)
            }
        }

        impl TryFrom<alloc::vec::Vec<alloc::vec::Vec<crate::Number>>> for $ty {
            type Error = crate::Error;

            fn try_from(
                rows: alloc::vec::Vec<alloc::vec::Vec<crate::Number>>,
            ) -> Result<Self, crate::Error> {
                $ty::new(crate::Matrix::try_from(rows)?)
            }
        }

        impl From<$ty> for alloc::vec::Vec<alloc::vec::Vec<crate::Number>> {
            fn from(m: $ty) -> Self {
                m.inner.rows()
            }
        }

        impl core::str::FromStr for $ty {
            type Err = crate::Error;

            fn from_str(s: &str) -> Result<Self, crate::Error> {
                $ty::new(s.parse()?)
            }
        }

        impl crate::traits::MatrixRef<crate::Number> for $ty {
            #[inline]
            fn nrows(&self) -> usize {
                self.inner.nrows()
            }

            #[inline]
            fn ncols(&self) -> usize {
                self.inner.ncols()
            }

            #[inline]
            fn entry(&self, row: usize, col: usize) -> &crate::Number {
                crate::traits::MatrixRef::entry(&self.inner, row, col)
            }
        }

        impl crate::traits::MatrixMut<crate::Number> for $ty {
            #[inline]
            fn entry_mut(&mut self, row: usize, col: usize) -> &mut crate::Number {
                crate::traits::MatrixMut::entry_mut(&mut self.inner, row, col)
            }
        }

        impl core::ops::Add<&$ty> for &$ty {
            type Output = $ty;

            fn add(self, rhs: &$ty) -> $ty {
                $ty {
                    inner: &self.inner + &rhs.inner,
                }
            }
        }

        impl core::ops::Add for $ty {
            type Output = $ty;

            fn add(self, rhs: $ty) -> $ty {
                &self + &rhs
            }
        }

        impl core::ops::Sub<&$ty> for &$ty {
            type Output = $ty;

            fn sub(self, rhs: &$ty) -> $ty {
                $ty {
                    inner: &self.inner - &rhs.inner,
                }
            }
        }

        impl core::ops::Sub for $ty {
            type Output = $ty;

            fn sub(self, rhs: $ty) -> $ty {
                &self - &rhs
            }
        }

        impl core::ops::Neg for &$ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                $ty { inner: -&self.inner }
            }
        }

        impl core::ops::Neg for $ty {
            type Output = $ty;

            fn neg(self) -> $ty {
                -&self
            }
        }

        impl core::ops::Mul<crate::Number> for &$ty {
            type Output = $ty;

            fn mul(self, rhs: crate::Number) -> $ty {
                self.scalar_mul(rhs)
            }
        }

        impl core::ops::Div<crate::Number> for &$ty {
            type Output = $ty;

            fn div(self, rhs: crate::Number) -> $ty {
                self.scalar_div(rhs)
            }
        }

        impl core::fmt::Display for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.inner, f)
            }
        }

        impl core::fmt::Debug for $ty {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}(", stringify!($ty))?;
                self.inner.fmt_grid(f)?;
                write!(f, ")")
            }
        }
    };
}
