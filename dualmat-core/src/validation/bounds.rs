//! Cell index validation and row-major offset arithmetic

use crate::MatError;

/// Validate that (`row`, `col`) lies inside a `height` x `width` matrix
pub const fn validate_index(
    row: usize,
    col: usize,
    height: usize,
    width: usize,
) -> Result<(), MatError> {
    if row >= height || col >= width {
        return Err(MatError::IndexOutOfBounds {
            row,
            col,
            height,
            width,
        });
    }
    Ok(())
}

/// Flat offset of (`row`, `col`) in a row-major buffer of the given width
#[inline]
pub const fn row_major_offset(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}
