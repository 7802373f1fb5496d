//! Shape and bounds validation
//!
//! The `validate_*` functions are pure and always available. [`enforce`] is
//! the single point where a failed validation turns into a panic; it is
//! compiled down to a `debug_assert!` when the `checked` feature is off.

pub mod bounds;
pub mod shape;

pub use bounds::{row_major_offset, validate_index};
pub use shape::{validate_dimensions, validate_len, validate_product, validate_same_shape};

use crate::MatError;

/// Whether precondition violations are checked in this build
pub const CHECKED: bool = cfg!(feature = "checked");

/// Turn a failed precondition into a panic
///
/// With `checked` disabled only debug builds assert; release builds skip the
/// check and the caller gets unspecified (but memory safe) behavior.
#[inline]
#[track_caller]
pub fn enforce(check: Result<(), MatError>) {
    if CHECKED {
        if let Err(err) = check {
            panic!("{err}");
        }
    } else {
        debug_assert!(check.is_ok(), "unchecked matrix precondition violated");
    }
}
