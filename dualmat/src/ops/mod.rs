//! Arithmetic over the matrix contract
//!
//! The free functions here accept any pair of [`Matrix`] implementors,
//! including `dyn Matrix` objects, and always return a [`DynamicMatrix`].
//! The `core::ops` impls in the submodules route mixed and dynamic operands
//! through them, while same-type fixed operands take statically sized
//! paths that return fixed matrices.

mod dynamic;
mod fixed;
#[cfg(feature = "parallel")]
pub mod parallel;
mod scalar;

#[cfg(feature = "parallel")]
pub use parallel::{product_par, ProductConfig};

use dualmat_core::validation::{validate_product, validate_same_shape};
use dualmat_core::{enforce, MatError, Matrix};

use crate::DynamicMatrix;

/// Apply `f` to each pair of corresponding cells of two same-shape matrices
#[track_caller]
pub fn elementwise<A, B, F>(left: &A, right: &B, f: F) -> DynamicMatrix<A::Element>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
    F: Fn(A::Element, A::Element) -> A::Element,
{
    enforce(validate_same_shape(left.shape(), right.shape()));
    DynamicMatrix::from_fn(left.height(), left.width(), |row, col| {
        f(left.at(row, col), right.at(row, col))
    })
}

/// Cell-wise sum of two matrices of identical shape
#[track_caller]
pub fn add<A, B>(left: &A, right: &B) -> DynamicMatrix<A::Element>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    elementwise(left, right, |a, b| a + b)
}

/// Cell-wise difference (`left - right`) of two matrices of identical shape
#[track_caller]
pub fn sub<A, B>(left: &A, right: &B) -> DynamicMatrix<A::Element>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    elementwise(left, right, |a, b| a - b)
}

/// Matrix product of an M x N and an N x P matrix
///
/// Plain triple loop, O(M * N * P), each accumulator starting at the
/// default value.
#[track_caller]
pub fn product<A, B>(left: &A, right: &B) -> DynamicMatrix<A::Element>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    enforce(validate_product(left.shape(), right.shape()));
    log::trace!(
        "product {}x{} * {}x{}",
        left.height(),
        left.width(),
        right.height(),
        right.width()
    );
    DynamicMatrix::from_fn(left.height(), right.width(), |row, col| {
        dot(left, right, row, col)
    })
}

pub fn try_add<A, B>(left: &A, right: &B) -> Result<DynamicMatrix<A::Element>, MatError>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    validate_same_shape(left.shape(), right.shape())?;
    Ok(add(left, right))
}

pub fn try_sub<A, B>(left: &A, right: &B) -> Result<DynamicMatrix<A::Element>, MatError>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    validate_same_shape(left.shape(), right.shape())?;
    Ok(sub(left, right))
}

pub fn try_product<A, B>(left: &A, right: &B) -> Result<DynamicMatrix<A::Element>, MatError>
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    validate_product(left.shape(), right.shape())?;
    Ok(product(left, right))
}

/// Row `row` of `left` dotted with column `col` of `right`
#[inline]
pub(crate) fn dot<A, B>(left: &A, right: &B, row: usize, col: usize) -> A::Element
where
    A: Matrix + ?Sized,
    B: Matrix<Element = A::Element> + ?Sized,
{
    let mut acc = <A::Element as Default>::default();
    for inner in 0..left.width() {
        acc += left.at(row, inner) * right.at(inner, col);
    }
    acc
}
