#![no_std]

//! dualmat core - matrix contract and validation
//!
//! This crate defines what a matrix is without owning any storage:
//!
//! - [`Matrix`]: the capability contract every matrix type implements
//! - [`MatrixElement`]: the arithmetic constraint on element types
//! - [`MatError`]: shape and index violations
//! - [`validation`]: pure shape checks plus the `checked` feature toggle
//! - [`Render`]: row-per-line text output for any matrix
//!
//! ## Features
//!
//! - `checked` (default): precondition violations panic. Disabling it strips
//!   the checks from release builds; violating a precondition then yields
//!   unspecified results instead of a panic.

pub mod error;
pub mod render;
pub mod traits;
pub mod validation;

pub use error::*;
pub use render::Render;
pub use traits::*;
pub use validation::{enforce, CHECKED};
