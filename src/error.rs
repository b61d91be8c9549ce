use alloc::string::String;

/// Errors from constructing or operating on vectors, matrices and the models
/// built on them.
///
/// Every fallible operation in the crate returns this type. Failures are
/// detected before anything is mutated, so a value that produced an error is
/// left exactly as it was.
///
/// ```
/// use linalg_kit::{Error, Matrix};
///
/// let err = "1, 2; 3".parse::<Matrix>().unwrap_err();
/// assert_eq!(err, Error::NonRectangular { row: 1, expected: 2, got: 1 });
///
/// let m = Matrix::from_rows(&[[1, 2, 3]]).unwrap();
/// assert_eq!(m.trace().unwrap_err(), Error::NotSquare { rows: 1, cols: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Malformed construction data: a non-numeric token, an empty grid, or an
    /// argument outside the operation's domain.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Matrix rows of unequal length.
    #[error("matrix must be rectangular: row {row} has {got} columns, expected {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Square-only operation invoked on a non-square matrix.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Augmented matrix must have exactly one more column than rows.
    #[error("augmented matrix must be n x (n+1), got {rows}x{cols}")]
    InvalidAugmentedShape { rows: usize, cols: usize },

    /// Binary operation on incompatible shapes. Vectors are reported as
    /// `dim x 1` columns.
    #[error(
        "dimension mismatch: expected {}x{}, got {}x{}",
        .expected.0, .expected.1, .got.0, .got.1
    )]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Operation defined only for particular dimensions (heading, angle, cross
    /// product, component accessors) or values (unitizing the zero vector).
    #[error("invalid operation: {0}")]
    InvalidOperation(&'static str),

    /// Index outside `1..=len` for 1-indexed access or `0..len` for 0-indexed.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Augmented matrix requested before the linear system was augmented.
    #[error("matrix of coefficients not yet augmented")]
    NotYetAugmented,

    /// Row reduction hit an exactly-zero pivot. No row swapping is attempted.
    #[error("zero pivot in row {row}")]
    ZeroPivot { row: usize },
}
