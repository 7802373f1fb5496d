//! Error types for matrix shape and index validation

/// Shape and index violations detected by the validation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatError {
    /// A height or width of zero was requested
    ZeroDimension,
    /// A flat initializer does not hold exactly `height * width` values
    LengthMismatch { expected: usize, actual: usize },
    /// Element-wise operands disagree on (height, width)
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Left width differs from right height in a product
    InnerDimensionMismatch { left_width: usize, right_height: usize },
    /// Cell index outside the matrix
    IndexOutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
}

impl core::fmt::Display for MatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatError::ZeroDimension => write!(f, "Matrix height and width must be at least 1"),
            MatError::LengthMismatch { expected, actual } => {
                write!(f, "Invalid matrix size: expected {expected} values, got {actual}")
            }
            MatError::ShapeMismatch { left, right } => write!(
                f,
                "Invalid size: {}x{} and {}x{} differ",
                left.0, left.1, right.0, right.1
            ),
            MatError::InnerDimensionMismatch {
                left_width,
                right_height,
            } => write!(
                f,
                "Invalid matrix size for product: left width {left_width} != right height {right_height}"
            ),
            MatError::IndexOutOfBounds {
                row,
                col,
                height,
                width,
            } => write!(f, "Out of bounds: ({row}, {col}) in a {height}x{width} matrix"),
        }
    }
}

impl core::error::Error for MatError {}

/// Result type for fallible matrix operations
pub type Result<T> = core::result::Result<T, MatError>;
