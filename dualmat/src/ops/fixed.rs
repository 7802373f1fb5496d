//! Operators between fixed matrices of statically known shape
//!
//! Same-shape sums and differences return the operand type, and products
//! return `FixedMatrix<T, M, P>`. A mismatched inner dimension has no impl,
//! so it fails to compile:
//!
//! ```compile_fail
//! use dualmat::FixedMatrix;
//!
//! let a = FixedMatrix::<i32, 2, 3>::new();
//! let b = FixedMatrix::<i32, 2, 2>::new();
//! let _ = a * b;
//! ```

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use dualmat_core::{Matrix, MatrixElement};

use super::dot;
use crate::FixedMatrix;

impl<T: MatrixElement, const H: usize, const W: usize> Add for FixedMatrix<T, H, W> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a + b)
    }
}

impl<T: MatrixElement, const H: usize, const W: usize> Sub for FixedMatrix<T, H, W> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(&rhs, |a, b| a - b)
    }
}

impl<T: MatrixElement, const M: usize, const N: usize, const P: usize> Mul<FixedMatrix<T, N, P>>
    for FixedMatrix<T, M, N>
{
    type Output = FixedMatrix<T, M, P>;

    fn mul(self, rhs: FixedMatrix<T, N, P>) -> FixedMatrix<T, M, P> {
        FixedMatrix::from_fn(|row, col| dot(&self, &rhs, row, col))
    }
}

macro_rules! impl_fixed_scalar_op {
    ($($Op:ident $op:ident, $OpAssign:ident $op_assign:ident => $method:ident;)+) => {
        $(
            impl<T: MatrixElement, const H: usize, const W: usize> $Op<T> for FixedMatrix<T, H, W> {
                type Output = Self;

                fn $op(mut self, rhs: T) -> Self {
                    self.$method(rhs);
                    self
                }
            }

            impl<T: MatrixElement, const H: usize, const W: usize> $OpAssign<T>
                for FixedMatrix<T, H, W>
            {
                fn $op_assign(&mut self, rhs: T) {
                    self.$method(rhs);
                }
            }
        )+
    };
}

impl_fixed_scalar_op! {
    Add add, AddAssign add_assign => add_assign_scalar;
    Sub sub, SubAssign sub_assign => sub_assign_scalar;
    Mul mul, MulAssign mul_assign => mul_assign_scalar;
    Div div, DivAssign div_assign => div_assign_scalar;
}

#[cfg(test)]
mod tests {
    use super::*;

    type Mat33 = FixedMatrix<i32, 3, 3>;

    #[test]
    fn test_same_type_add_sub_stay_fixed() {
        let ones = FixedMatrix::<i32, 2, 3>::filled(1);
        let twos = FixedMatrix::<i32, 2, 3>::filled(2);

        let sum: FixedMatrix<i32, 2, 3> = ones + twos;
        assert_eq!(sum, FixedMatrix::filled(3));
        let diff: FixedMatrix<i32, 2, 3> = ones - twos;
        assert_eq!(diff, FixedMatrix::filled(-1));
    }

    #[test]
    fn test_scalar_chain() {
        let m = FixedMatrix::<i32, 2, 2>::filled(5);
        let m = m + 3;
        assert_eq!(m, FixedMatrix::filled(8));
        let m = m * 2;
        assert_eq!(m, FixedMatrix::filled(16));
        let m = m / 4;
        assert_eq!(m, FixedMatrix::filled(4));
        let m = m - 1;
        assert_eq!(m, FixedMatrix::filled(3));
    }

    #[test]
    fn test_compound_assign() {
        let mut m = FixedMatrix::<f32, 1, 3>::from_slice(&[1.0, 2.0, 3.0]);
        m += 1.0;
        m *= 2.0;
        m -= 0.5;
        m /= 0.5;
        assert_eq!(m.as_slice(), &[7.0, 11.0, 15.0]);
    }

    #[test]
    fn test_identity_law() {
        let m = Mat33::from_slice(&[3, 2, 1, 6, 5, 4, 9, 8, 7]);
        assert_eq!(Mat33::identity() * m, m);
        assert_eq!(m * Mat33::identity(), m);
    }

    #[test]
    fn test_rectangular_product() {
        let a = FixedMatrix::<i32, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6]);
        let b = FixedMatrix::<i32, 3, 2>::from_slice(&[7, 8, 9, 10, 11, 12]);
        let c: FixedMatrix<i32, 2, 2> = a * b;
        assert_eq!(c, FixedMatrix::from([[58, 64], [139, 154]]));

        let d: FixedMatrix<i32, 3, 3> = b * a;
        assert_eq!(d.row(0), &[39, 54, 69]);
    }
}
