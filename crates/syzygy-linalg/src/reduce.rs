//! Reduction of one row space modulo another.
//!
//! Stacking `[I B; 0 A]` and reducing keeps the identity rows on top, so the
//! first rows of the result are the rows of `B` with everything the rows
//! of `A` can cancel removed. What remains is the canonical residue of `B`
//! modulo the row space of `A`: zero exactly on the rows that lie in it.

use syzygy_rings::traits::EchelonDomain;

use crate::basis::basis_of_rows;
use crate::blocks::{stack_columns, stack_rows};
use crate::dense_matrix::DenseMatrix;
use crate::error::{expect_dim, Result};
use crate::normal_form::normal_form;

/// Reduces every row of `b` modulo the row space of `a`.
///
/// The result has the shape of `b`; row `i` differs from row `i` of `b` by
/// an element of the row space of `a`, and is zero exactly when that row of
/// `b` lies in it.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts.
pub fn decide_zero_rows<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    let c = a.num_cols();
    expect_dim("decide_zero_rows", c, b.num_cols())?;

    let (rb, ra) = (b.num_rows(), a.num_rows());
    let tracking = stack_rows(rb, &[&DenseMatrix::identity(rb), &DenseMatrix::zeros(ra, rb)]);
    let stacked = stack_rows(c, &[b, a]);
    let basis = basis_of_rows(&stack_columns(rb + ra, &[&tracking, &stacked]));
    Ok(basis.sub_matrix(0..rb, rb..rb + c))
}

/// Reduces every column of `b` modulo the column space of `a`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts.
pub fn decide_zero_columns<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    expect_dim("decide_zero_columns", a.num_rows(), b.num_rows())?;
    decide_zero_rows(&b.transpose(), &a.transpose()).map(|m| m.transpose())
}

/// [`decide_zero_rows`] together with the coefficients of the reduction:
/// returns `(reduced, t)` with `reduced == b + t * a`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts.
pub fn decide_zero_rows_effectively<R: EchelonDomain>(
    b: &DenseMatrix<R>,
    a: &DenseMatrix<R>,
) -> Result<(DenseMatrix<R>, DenseMatrix<R>)> {
    let c = a.num_cols();
    expect_dim("decide_zero_rows", c, b.num_cols())?;

    let (rb, ra) = (b.num_rows(), a.num_rows());
    let width = rb + c + ra;
    let top = stack_columns(rb, &[&DenseMatrix::identity(rb), b, &DenseMatrix::zeros(rb, ra)]);
    let bottom = stack_columns(ra, &[&DenseMatrix::zeros(ra, rb), a, &DenseMatrix::identity(ra)]);
    let reduced = normal_form(&stack_rows(width, &[&top, &bottom])).matrix;

    Ok((
        reduced.sub_matrix(0..rb, rb..rb + c),
        reduced.sub_matrix(0..rb, rb + c..width),
    ))
}

/// [`decide_zero_columns`] together with the coefficients of the reduction:
/// returns `(reduced, t)` with `reduced == b + a * t`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts.
pub fn decide_zero_columns_effectively<R: EchelonDomain>(
    b: &DenseMatrix<R>,
    a: &DenseMatrix<R>,
) -> Result<(DenseMatrix<R>, DenseMatrix<R>)> {
    expect_dim("decide_zero_columns", a.num_rows(), b.num_rows())?;
    let (reduced, t) = decide_zero_rows_effectively(&b.transpose(), &a.transpose())?;
    Ok((reduced.transpose(), t.transpose()))
}

/// Returns true if every row of `b` lies in the row space of `a`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts.
pub fn is_zero_modulo_rows<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<bool> {
    Ok(decide_zero_rows(b, a)?.is_zero())
}

/// Returns true if every column of `b` lies in the column space of `a`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts.
pub fn is_zero_modulo_columns<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<bool> {
    Ok(decide_zero_columns(b, a)?.is_zero())
}
