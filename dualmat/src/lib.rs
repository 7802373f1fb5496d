//! dualmat - fixed-size and resizable dense matrices
//!
//! Two storage strategies behind one contract:
//!
//! - [`FixedMatrix<T, H, W>`]: dimensions are const generics, storage is an
//!   inline array, shape errors between fixed matrices are type errors
//! - [`DynamicMatrix<T>`]: dimensions are runtime values, storage is a `Vec`,
//!   the matrix can be resized and shape errors are checked at runtime
//!
//! Both implement [`Matrix`] from `dualmat-core`, so arithmetic can mix them
//! freely. Mixed or dynamic operands produce a `DynamicMatrix`; two fixed
//! operands produce a fixed result.
//!
//! ## Quick Start
//!
//! ```rust
//! use dualmat::{DynamicMatrix, FixedMatrix, Matrix};
//!
//! let a = FixedMatrix::<i32, 3, 3>::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
//! let mut b = DynamicMatrix::new(3, 3);
//! b.assign(&[1, 2, 3, 4, 5, 6, 7, 8, 9]);
//!
//! let product = &a * &b;
//! assert_eq!(product.shape(), (3, 3));
//! assert_eq!(product[(0, 0)], 30);
//!
//! b.resize(5, 5);
//! assert_eq!(b[(2, 2)], 9);
//! assert_eq!(b[(4, 4)], 0);
//! ```
//!
//! ## Features
//!
//! - `checked` (default): shape and bounds preconditions panic with a
//!   [`MatError`] message. Without it, violations are only caught by debug
//!   assertions and otherwise give unspecified results.
//! - `parallel`: [`ops::product_par`], a rayon kernel partitioned by rows
//! - `cli`: dependencies of the `demo` example

// Re-export the contract and validation layer
pub use dualmat_core::{
    enforce, validation, MatError, Matrix, MatrixElement, Render, Result, CHECKED,
};

pub mod dynamic;
pub mod fixed;
pub mod ops;

pub use dynamic::DynamicMatrix;
pub use fixed::FixedMatrix;
