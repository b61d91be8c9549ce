use log::debug;

use crate::matrix::vector::Vector;
use crate::{AugmentedMatrix, Error, Matrix};

/// A system of linear equations `A x = b`.
///
/// Holds the coefficients `A` and knowns `b`; [`augment`](Self::augment)
/// builds the augmented matrix `[A | b]` once and caches it.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    coefficients: Matrix,
    knowns: Vector,
    augmented: Option<AugmentedMatrix>,
}

impl LinearSystem {
    /// Fails with [`Error::DimensionMismatch`] unless there is one known per
    /// row of coefficients.
    pub fn new(coefficients: Matrix, knowns: Vector) -> Result<Self, Error> {
        if coefficients.nrows() != knowns.dim() {
            return Err(Error::DimensionMismatch {
                expected: (coefficients.nrows(), 1),
                got: (knowns.dim(), 1),
            });
        }
        Ok(Self {
            coefficients,
            knowns,
            augmented: None,
        })
    }

    /// The coefficient matrix.
    pub fn coefficients(&self) -> &Matrix {
        &self.coefficients
    }

    /// The right-hand side.
    pub fn knowns(&self) -> &Vector {
        &self.knowns
    }

    /// Whether [`augment`](Self::augment) has succeeded.
    pub fn is_augmented(&self) -> bool {
        self.augmented.is_some()
    }

    /// Build the augmented matrix by appending the knowns as a last column.
    ///
    /// Only the first successful call builds anything; later calls return
    /// the cached matrix. Fails with [`Error::InvalidAugmentedShape`] if the
    /// coefficients are not square, leaving the system unaugmented.
    pub fn augment(&mut self) -> Result<&AugmentedMatrix, Error> {
        if self.augmented.is_none() {
            let aug = AugmentedMatrix::from_parts(&self.coefficients, &self.knowns)?;
            debug!("augmented {}x{} system", aug.nrows(), aug.ncols());
            self.augmented = Some(aug);
        }
        self.augmented_matrix()
    }

    /// The augmented matrix, or [`Error::NotYetAugmented`] before
    /// [`augment`](Self::augment) has succeeded.
    pub fn augmented_matrix(&self) -> Result<&AugmentedMatrix, Error> {
        self.augmented.as_ref().ok_or(Error::NotYetAugmented)
    }

    /// Augment if needed, reduce to RREF and return the last column.
    ///
    /// Reduction does not pivot: a zero on the diagonal fails with
    /// [`Error::ZeroPivot`].
    pub fn solve(&mut self) -> Result<Vector, Error> {
        let rref = self.augment()?.reduced_row_echelon()?;
        Ok(rref.knowns())
    }
}
