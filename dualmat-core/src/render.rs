//! Diagnostic text rendering for any [`Matrix`]
//!
//! The output is meant for printing, not parsing: each row on its own line,
//! each cell followed by a single space.

use core::fmt;

use crate::traits::Matrix;

/// Borrowing `Display` adapter over a matrix
pub struct Render<'a, M: ?Sized> {
    matrix: &'a M,
}

impl<'a, M: Matrix + ?Sized> Render<'a, M> {
    /// Wrap a matrix, including unsized `dyn Matrix` objects
    pub fn new(matrix: &'a M) -> Self {
        Self { matrix }
    }
}

impl<M: Matrix + ?Sized> fmt::Display for Render<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.matrix.height() {
            for col in 0..self.matrix.width() {
                write!(f, "{} ", self.matrix.at(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::string::ToString;

    struct Grid([[i32; 3]; 2]);

    impl Matrix for Grid {
        type Element = i32;

        fn width(&self) -> usize {
            3
        }

        fn height(&self) -> usize {
            2
        }

        fn at(&self, row: usize, col: usize) -> i32 {
            self.0[row][col]
        }

        fn at_mut(&mut self, row: usize, col: usize) -> &mut i32 {
            &mut self.0[row][col]
        }

        fn add_assign_scalar(&mut self, value: i32) {
            self.0.iter_mut().flatten().for_each(|v| *v += value);
        }

        fn sub_assign_scalar(&mut self, value: i32) {
            self.0.iter_mut().flatten().for_each(|v| *v -= value);
        }

        fn mul_assign_scalar(&mut self, value: i32) {
            self.0.iter_mut().flatten().for_each(|v| *v *= value);
        }

        fn div_assign_scalar(&mut self, value: i32) {
            self.0.iter_mut().flatten().for_each(|v| *v /= value);
        }
    }

    #[test]
    fn test_render_rows() {
        let grid = Grid([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(grid.render().to_string(), "1 2 3 \n4 5 6 \n");
    }

    #[test]
    fn test_render_trait_object() {
        let mut grid = Grid([[1, 2, 3], [4, 5, 6]]);
        grid.mul_assign_scalar(10);
        let object: &dyn Matrix<Element = i32> = &grid;
        assert_eq!(object.shape(), (2, 3));
        assert_eq!(Render::new(object).to_string(), "10 20 30 \n40 50 60 \n");
    }
}
