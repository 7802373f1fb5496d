//! The matrix capability contract
//!
//! Every dense matrix in the workspace implements [`Matrix`], whatever its
//! storage strategy. Cross-type operators (fixed with dynamic, or anything
//! behind `&dyn Matrix`) are written purely against this trait.

use super::element::MatrixElement;
use crate::render::Render;

/// Dense matrix contract: dimensions, cell access and in-place scalar ops
///
/// The trait is object safe. Implementations must report `height() >= 1`
/// and `width() >= 1` for as long as they are usable.
pub trait Matrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Read the cell at (`row`, `col`)
    ///
    /// Requires `row < height()` and `col < width()`. Violations panic when
    /// the `checked` feature is enabled and are unspecified otherwise.
    fn at(&self, row: usize, col: usize) -> Self::Element;

    /// Mutable access to the cell at (`row`, `col`), same preconditions as [`Matrix::at`]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut Self::Element;

    /// Add `value` to every cell
    fn add_assign_scalar(&mut self, value: Self::Element);

    /// Subtract `value` from every cell
    fn sub_assign_scalar(&mut self, value: Self::Element);

    /// Multiply every cell by `value`
    fn mul_assign_scalar(&mut self, value: Self::Element);

    /// Divide every cell by `value`
    ///
    /// Integer division by zero is not validated.
    fn div_assign_scalar(&mut self, value: Self::Element);

    /// Dimensions as (height, width)
    fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Total number of cells
    fn len(&self) -> usize {
        self.height() * self.width()
    }

    /// Always false for a usable matrix, kept for API symmetry with `len`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_square(&self) -> bool {
        self.height() == self.width()
    }

    /// Text adapter: one line per row, every cell followed by a space
    fn render(&self) -> Render<'_, Self>
    where
        Self: Sized,
    {
        Render::new(self)
    }
}
