//! Heap-allocated matrix with runtime dimensions
//!
//! `DynamicMatrix<T>` keeps its cells in one row-major `Vec<T>` alongside
//! runtime `height` and `width` fields. Shapes are only known at runtime, so
//! every shape precondition is validated on entry.

use core::fmt;
use core::ops::{Index, IndexMut};

use dualmat_core::validation::{
    row_major_offset, validate_dimensions, validate_index, validate_len,
};
use dualmat_core::{enforce, MatError, Matrix, MatrixElement, Render};

use crate::FixedMatrix;

/// Resizable dense matrix
#[derive(Debug, Clone, PartialEq)]
pub struct DynamicMatrix<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: MatrixElement> DynamicMatrix<T> {
    /// `height` x `width` matrix of default values
    ///
    /// Both dimensions must be at least 1.
    #[track_caller]
    pub fn new(height: usize, width: usize) -> Self {
        Self::filled(height, width, T::default())
    }

    /// `height` x `width` matrix with every cell set to `value`
    #[track_caller]
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        enforce(validate_dimensions(height, width));
        Self {
            width,
            height,
            data: vec![value; height * width],
        }
    }

    /// Fallible form of [`DynamicMatrix::filled`]
    pub fn try_filled(height: usize, width: usize, value: T) -> Result<Self, MatError> {
        validate_dimensions(height, width)?;
        Ok(Self::filled(height, width, value))
    }

    /// Take ownership of a row-major buffer of exactly `height * width` values
    #[track_caller]
    pub fn from_vec(height: usize, width: usize, data: Vec<T>) -> Self {
        enforce(validate_dimensions(height, width));
        enforce(validate_len(height, width, data.len()));
        Self {
            width,
            height,
            data,
        }
    }

    pub fn try_from_vec(height: usize, width: usize, data: Vec<T>) -> Result<Self, MatError> {
        validate_dimensions(height, width)?;
        validate_len(height, width, data.len())?;
        Ok(Self::from_vec(height, width, data))
    }

    /// Build from a function of (row, col)
    #[track_caller]
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        enforce(validate_dimensions(height, width));
        let mut data = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                data.push(f(row, col));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Deep copy of any matrix through the contract
    pub fn from_matrix<M>(matrix: &M) -> Self
    where
        M: Matrix<Element = T> + ?Sized,
    {
        Self::from_fn(matrix.height(), matrix.width(), |row, col| matrix.at(row, col))
    }

    /// Overwrite every cell from a flat row-major slice
    ///
    /// The slice must hold exactly `height * width` values.
    #[track_caller]
    pub fn assign(&mut self, values: &[T]) -> &mut Self {
        enforce(validate_len(self.height, self.width, values.len()));
        self.data
            .iter_mut()
            .zip(values)
            .for_each(|(cell, value)| *cell = *value);
        self
    }

    /// Fallible form of [`DynamicMatrix::assign`]
    pub fn try_assign(&mut self, values: &[T]) -> Result<&mut Self, MatError> {
        validate_len(self.height, self.width, values.len())?;
        Ok(self.assign(values))
    }

    /// Reallocate to `height` x `width`, keeping the overlapping top-left block
    ///
    /// Cells outside the old extent are set to the default value. The old
    /// buffer is released; there is no amortized growth.
    #[track_caller]
    pub fn resize(&mut self, height: usize, width: usize) {
        enforce(validate_dimensions(height, width));
        log::trace!(
            "resizing matrix {}x{} -> {}x{}",
            self.height,
            self.width,
            height,
            width
        );

        let mut data = vec![T::default(); height * width];
        let keep_rows = self.height.min(height);
        let keep_cols = self.width.min(width);
        for row in 0..keep_rows {
            let src = row_major_offset(row, 0, self.width);
            let dst = row_major_offset(row, 0, width);
            data[dst..dst + keep_cols].copy_from_slice(&self.data[src..src + keep_cols]);
        }

        self.data = data;
        self.height = height;
        self.width = width;
    }

    /// Fallible form of [`DynamicMatrix::resize`]
    pub fn try_resize(&mut self, height: usize, width: usize) -> Result<(), MatError> {
        validate_dimensions(height, width)?;
        self.resize(height, width);
        Ok(())
    }

    /// Row-major view of every cell
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Zero-copy byte view of the row-major storage
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Cells of one row
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        enforce(validate_index(row, 0, self.height, self.width));
        let start = row_major_offset(row, 0, self.width);
        &self.data[start..start + self.width]
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.width, self.height, |row, col| self.at(col, row))
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    fn for_each_cell(&mut self, f: impl FnMut(&mut T)) {
        self.data.iter_mut().for_each(f);
    }
}

impl<T: MatrixElement> Matrix for DynamicMatrix<T> {
    type Element = T;

    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[track_caller]
    fn at(&self, row: usize, col: usize) -> T {
        enforce(validate_index(row, col, self.height, self.width));
        self.data[row_major_offset(row, col, self.width)]
    }

    #[inline]
    #[track_caller]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        enforce(validate_index(row, col, self.height, self.width));
        let offset = row_major_offset(row, col, self.width);
        &mut self.data[offset]
    }

    fn add_assign_scalar(&mut self, value: T) {
        self.for_each_cell(|v| *v += value);
    }

    fn sub_assign_scalar(&mut self, value: T) {
        self.for_each_cell(|v| *v -= value);
    }

    fn mul_assign_scalar(&mut self, value: T) {
        self.for_each_cell(|v| *v *= value);
    }

    fn div_assign_scalar(&mut self, value: T) {
        self.for_each_cell(|v| *v /= value);
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> From<FixedMatrix<T, H, W>>
    for DynamicMatrix<T>
{
    fn from(matrix: FixedMatrix<T, H, W>) -> Self {
        Self::from_vec(H, W, matrix.as_slice().to_vec())
    }
}

impl<T: MatrixElement> Index<(usize, usize)> for DynamicMatrix<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        enforce(validate_index(row, col, self.height, self.width));
        &self.data[row_major_offset(row, col, self.width)]
    }
}

impl<T: MatrixElement> IndexMut<(usize, usize)> for DynamicMatrix<T> {
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}

impl<T: MatrixElement> fmt::Display for DynamicMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Render::new(self), f)
    }
}
