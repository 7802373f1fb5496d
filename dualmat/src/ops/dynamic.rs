//! Operators whose result shape is only known at runtime
//!
//! Any pairing that involves a [`DynamicMatrix`] goes through the contract
//! functions in the parent module and yields a `DynamicMatrix`. Both the
//! borrowed (`&a + &b`) and owned (`a + b`) forms are provided.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use dualmat_core::{Matrix, MatrixElement};

use crate::{DynamicMatrix, FixedMatrix};

macro_rules! impl_contract_binops {
    ($([$($generics:tt)*] $Lhs:ty, $Rhs:ty;)+) => {
        $(
            impl<$($generics)*> Add<&$Rhs> for &$Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn add(self, rhs: &$Rhs) -> DynamicMatrix<T> {
                    super::add(self, rhs)
                }
            }

            impl<$($generics)*> Add<$Rhs> for $Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn add(self, rhs: $Rhs) -> DynamicMatrix<T> {
                    super::add(&self, &rhs)
                }
            }

            impl<$($generics)*> Sub<&$Rhs> for &$Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn sub(self, rhs: &$Rhs) -> DynamicMatrix<T> {
                    super::sub(self, rhs)
                }
            }

            impl<$($generics)*> Sub<$Rhs> for $Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn sub(self, rhs: $Rhs) -> DynamicMatrix<T> {
                    super::sub(&self, &rhs)
                }
            }

            impl<$($generics)*> Mul<&$Rhs> for &$Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn mul(self, rhs: &$Rhs) -> DynamicMatrix<T> {
                    super::product(self, rhs)
                }
            }

            impl<$($generics)*> Mul<$Rhs> for $Lhs {
                type Output = DynamicMatrix<T>;

                #[track_caller]
                fn mul(self, rhs: $Rhs) -> DynamicMatrix<T> {
                    super::product(&self, &rhs)
                }
            }
        )+
    };
}

impl_contract_binops! {
    [T: MatrixElement] DynamicMatrix<T>, DynamicMatrix<T>;
    [T: MatrixElement, const H: usize, const W: usize] FixedMatrix<T, H, W>, DynamicMatrix<T>;
    [T: MatrixElement, const H: usize, const W: usize] DynamicMatrix<T>, FixedMatrix<T, H, W>;
}

macro_rules! impl_dynamic_scalar_op {
    ($($Op:ident $op:ident, $OpAssign:ident $op_assign:ident => $method:ident;)+) => {
        $(
            impl<T: MatrixElement> $Op<T> for DynamicMatrix<T> {
                type Output = Self;

                fn $op(mut self, rhs: T) -> Self {
                    self.$method(rhs);
                    self
                }
            }

            impl<T: MatrixElement> $Op<T> for &DynamicMatrix<T> {
                type Output = DynamicMatrix<T>;

                fn $op(self, rhs: T) -> DynamicMatrix<T> {
                    let mut mat = self.clone();
                    mat.$method(rhs);
                    mat
                }
            }

            impl<T: MatrixElement> $OpAssign<T> for DynamicMatrix<T> {
                fn $op_assign(&mut self, rhs: T) {
                    self.$method(rhs);
                }
            }
        )+
    };
}

impl_dynamic_scalar_op! {
    Add add, AddAssign add_assign => add_assign_scalar;
    Sub sub, SubAssign sub_assign => sub_assign_scalar;
    Mul mul, MulAssign mul_assign => mul_assign_scalar;
    Div div, DivAssign div_assign => div_assign_scalar;
}
