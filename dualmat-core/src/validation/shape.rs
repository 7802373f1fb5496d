//! Shape validation for construction and arithmetic
//!
//! Pure functions over dimensions; nothing here touches element storage.

use crate::MatError;

/// Validate that a requested height and width are both non-zero
pub const fn validate_dimensions(height: usize, width: usize) -> Result<(), MatError> {
    if height == 0 || width == 0 {
        return Err(MatError::ZeroDimension);
    }
    Ok(())
}

/// Validate that a flat row-major initializer fills the matrix exactly
pub const fn validate_len(height: usize, width: usize, len: usize) -> Result<(), MatError> {
    let expected = height * width;
    if len != expected {
        return Err(MatError::LengthMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Validate element-wise operands: identical height and identical width
pub const fn validate_same_shape(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatError> {
    if left.0 != right.0 || left.1 != right.1 {
        return Err(MatError::ShapeMismatch { left, right });
    }
    Ok(())
}

/// Validate product operands: left width must equal right height
pub const fn validate_product(
    left: (usize, usize),
    right: (usize, usize),
) -> Result<(), MatError> {
    if left.1 != right.0 {
        return Err(MatError::InnerDimensionMismatch {
            left_width: left.1,
            right_height: right.0,
        });
    }
    Ok(())
}
