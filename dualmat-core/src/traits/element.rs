//! Element type constraints for matrix storage
//!
//! Every operator in this workspace is numeric, so matrices only accept
//! arithmetic element types. The restriction is a plain trait bound and
//! is independent of the `checked` feature.

use core::fmt::{Debug, Display};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use bytemuck::Pod;

/// Trait for arithmetic types that can be stored as matrix elements
///
/// Requirements:
/// - Pod: plain bytes, which also gives `Copy` and a zero-copy byte view
/// - Default: the additive identity used for fresh cells and accumulators
/// - closed `+ - * /` and their compound forms
/// - Display: cells can be rendered as text
pub trait MatrixElement:
    Pod
    + Default
    + PartialEq
    + Debug
    + Display
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// The multiplicative identity, used on identity diagonals
    fn one() -> Self;

    /// The additive identity
    #[inline]
    fn zero() -> Self {
        Self::default()
    }

    /// Get the size in bytes of this element type
    fn size_bytes() -> usize {
        core::mem::size_of::<Self>()
    }
}

macro_rules! impl_matrix_element {
    ($one:literal => $($ty:ty),+ $(,)?) => {
        $(
            impl MatrixElement for $ty {
                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_matrix_element!(1 => i8, i16, i32, i64, i128, isize);
impl_matrix_element!(1 => u8, u16, u32, u64, u128, usize);
impl_matrix_element!(1.0 => f32, f64);
