//! Scalar-on-the-left operators (`v + m`, `v - m`, `v * m`)
//!
//! Coherence rules only allow these for concrete element types, so they are
//! stamped out for every primitive [`MatrixElement`](dualmat_core::MatrixElement).
//!
//! `v - m` is deliberately *not* the negation of `m - v`: it computes
//! `m - v`, exactly like the right-hand form. This mirrors long-standing
//! behavior that callers may match reference output against, and is most
//! likely not what a reader expects. Write `-(m - v)` style code explicitly
//! if the mathematical meaning is required. `v / m` is not provided.

use core::ops::{Add, Mul, Sub};

use crate::{DynamicMatrix, FixedMatrix};

macro_rules! impl_scalar_lhs {
    (@op $ty:ty, $Op:ident $op:ident) => {
        impl<const H: usize, const W: usize> $Op<FixedMatrix<$ty, H, W>> for $ty {
            type Output = FixedMatrix<$ty, H, W>;

            fn $op(self, rhs: FixedMatrix<$ty, H, W>) -> Self::Output {
                $Op::$op(rhs, self)
            }
        }

        impl $Op<DynamicMatrix<$ty>> for $ty {
            type Output = DynamicMatrix<$ty>;

            fn $op(self, rhs: DynamicMatrix<$ty>) -> Self::Output {
                $Op::$op(rhs, self)
            }
        }

        impl $Op<&DynamicMatrix<$ty>> for $ty {
            type Output = DynamicMatrix<$ty>;

            fn $op(self, rhs: &DynamicMatrix<$ty>) -> Self::Output {
                $Op::$op(rhs, self)
            }
        }
    };
    ($($ty:ty),+ $(,)?) => {
        $(
            impl_scalar_lhs!(@op $ty, Add add);
            impl_scalar_lhs!(@op $ty, Sub sub);
            impl_scalar_lhs!(@op $ty, Mul mul);
        )+
    };
}

impl_scalar_lhs!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
