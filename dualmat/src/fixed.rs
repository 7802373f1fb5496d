//! Stack-allocated matrix with dimensions fixed at the type level
//!
//! `FixedMatrix<T, H, W>` stores exactly `H * W` cells in a nested array,
//! which is contiguous and row-major. Dimensions are const generics, so
//! shape errors between two fixed matrices surface as type errors rather
//! than runtime panics.

use core::fmt;
use core::ops::{Index, IndexMut};

use dualmat_core::validation::{validate_index, validate_len};
use dualmat_core::{enforce, MatError, Matrix, MatrixElement, Render};

/// Non-resizable dense matrix of `H` rows by `W` columns
///
/// ```
/// use dualmat::{FixedMatrix, Matrix};
///
/// let m = FixedMatrix::<i32, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6]);
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m[(1, 0)], 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMatrix<T, const H: usize, const W: usize> {
    data: [[T; W]; H],
}

impl<T: MatrixElement, const H: usize, const W: usize> FixedMatrix<T, H, W> {
    const NON_EMPTY: () = assert!(H > 0 && W > 0, "Matrix height and width must be superior than 0");

    /// Matrix with every cell set to the default value
    pub fn new() -> Self {
        Self::filled(T::default())
    }

    /// Alias of [`FixedMatrix::new`]
    pub fn zeros() -> Self {
        Self::new()
    }

    /// Matrix with every cell set to `value`
    pub fn filled(value: T) -> Self {
        let () = Self::NON_EMPTY;
        Self {
            data: [[value; W]; H],
        }
    }

    /// Build from a flat row-major slice of exactly `H * W` values
    ///
    /// Position `k` lands on row `k / W`, column `k % W`. A length mismatch
    /// panics when the `checked` feature is enabled.
    #[track_caller]
    pub fn from_slice(values: &[T]) -> Self {
        enforce(validate_len(H, W, values.len()));
        let mut mat = Self::new();
        mat.as_mut_slice()
            .iter_mut()
            .zip(values)
            .for_each(|(cell, value)| *cell = *value);
        mat
    }

    /// Fallible form of [`FixedMatrix::from_slice`]
    pub fn try_from_slice(values: &[T]) -> Result<Self, MatError> {
        validate_len(H, W, values.len())?;
        Ok(Self::from_slice(values))
    }

    /// Build from a function of (row, col)
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut mat = Self::new();
        for (row, cells) in mat.data.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(row, col);
            }
        }
        mat
    }

    /// Row-major view of every cell
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Zero-copy byte view of the row-major storage
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Cells of one row
    #[track_caller]
    pub fn row(&self, row: usize) -> &[T] {
        enforce(validate_index(row, 0, H, W));
        &self.data[row]
    }

    /// Iterate over cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.as_slice().iter()
    }

    /// Swap rows and columns; the result type carries the swapped dimensions
    pub fn transpose(&self) -> FixedMatrix<T, W, H> {
        FixedMatrix::from_fn(|row, col| self.data[col][row])
    }

    /// Combine two same-shape matrices cell by cell
    pub(crate) fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_fn(|row, col| f(self.data[row][col], other.data[row][col]))
    }

    fn for_each_cell(&mut self, f: impl FnMut(&mut T)) {
        self.as_mut_slice().iter_mut().for_each(f);
    }
}

impl<T: MatrixElement, const N: usize> FixedMatrix<T, N, N> {
    /// Identity matrix: one on the main diagonal, default elsewhere
    ///
    /// Only square matrices have an identity, so this is not even defined
    /// for `H != W`:
    ///
    /// ```compile_fail
    /// use dualmat::FixedMatrix;
    ///
    /// let m = FixedMatrix::<i32, 2, 3>::identity();
    /// ```
    pub fn identity() -> Self {
        let mut mat = Self::new();
        for i in 0..N {
            mat.data[i][i] = T::one();
        }
        mat
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> Matrix for FixedMatrix<T, H, W> {
    type Element = T;

    fn width(&self) -> usize {
        W
    }

    fn height(&self) -> usize {
        H
    }

    #[inline]
    #[track_caller]
    fn at(&self, row: usize, col: usize) -> T {
        enforce(validate_index(row, col, H, W));
        self.data[row][col]
    }

    #[inline]
    #[track_caller]
    fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        enforce(validate_index(row, col, H, W));
        &mut self.data[row][col]
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

impl<T: MatrixElement, const H: usize, const W: usize> Default for FixedMatrix<T, H, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> From<[[T; W]; H]> for FixedMatrix<T, H, W> {
    fn from(data: [[T; W]; H]) -> Self {
        let () = Self::NON_EMPTY;
        Self { data }
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> TryFrom<&[T]> for FixedMatrix<T, H, W> {
    type Error = MatError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        Self::try_from_slice(values)
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> Index<(usize, usize)> for FixedMatrix<T, H, W> {
    type Output = T;

    #[track_caller]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        enforce(validate_index(row, col, H, W));
        &self.data[row][col]
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> IndexMut<(usize, usize)>
    for FixedMatrix<T, H, W>
{
    #[track_caller]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        self.at_mut(row, col)
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> fmt::Display for FixedMatrix<T, H, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Render::new(self), f)
    }
}
