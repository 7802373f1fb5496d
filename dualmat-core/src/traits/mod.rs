//! Abstract interfaces shared by every matrix type
//!
//! Traits are pure interfaces - concrete storage lives in the `dualmat` crate.

pub mod element;
pub mod matrix;

pub use element::MatrixElement;
pub use matrix::Matrix;
