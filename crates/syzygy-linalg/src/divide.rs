//! One-sided divides: solving `X * A + Y * L = B` and `A * X + L * Y = B`.
//!
//! The right divides reduce the block matrix
//!
//! ```text
//! [ I  B  0 ]
//! [ 0  A  I ]
//! [ 0  L  0 ]
//! ```
//!
//! once. The leading identity pins the first rows to the rows of `B`; after
//! reduction their `B` block is zero exactly when `B` lies in the row space
//! of `A` and `L`, and their trailing block then holds `-X`.
//!
//! Every divide has three flavors: `safe_*` fails with `Unsolvable`, the
//! plain one returns `Ok(None)` instead, and `unique_*` first rejects
//! coefficient matrices whose solutions would not be unique.

use tracing::debug;

use syzygy_rings::traits::EchelonDomain;

use crate::blocks::{stack_columns, stack_rows};
use crate::dense_matrix::DenseMatrix;
use crate::error::{expect_dim, LinalgError, Result};
use crate::normal_form::{normal_form, rank};
use crate::solve::solve_linear_system;

/// Some `X` with `X * a == b`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts, and
/// `Unsolvable` if no solution exists over the ring.
pub fn safe_right_divide<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    safe_right_divide_modulo(b, a, &DenseMatrix::zeros(0, a.num_cols()))
}

/// Some `X` such that `X * a + Y * l == b` for some `Y`.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless `a`, `b` and `l` share their column
/// count, and `Unsolvable` if no solution exists over the ring.
pub fn safe_right_divide_modulo<R: EchelonDomain>(
    b: &DenseMatrix<R>,
    a: &DenseMatrix<R>,
    l: &DenseMatrix<R>,
) -> Result<DenseMatrix<R>> {
    let c = a.num_cols();
    expect_dim("right_divide", c, b.num_cols())?;
    expect_dim("right_divide", c, l.num_cols())?;

    let (rb, ra, rl) = (b.num_rows(), a.num_rows(), l.num_rows());
    let width = rb + c + ra;
    let top = stack_columns(rb, &[&DenseMatrix::identity(rb), b, &DenseMatrix::zeros(rb, ra)]);
    let middle = stack_columns(ra, &[&DenseMatrix::zeros(ra, rb), a, &DenseMatrix::identity(ra)]);
    let bottom = stack_columns(rl, &[&DenseMatrix::zeros(rl, rb), l, &DenseMatrix::zeros(rl, ra)]);
    let reduced = normal_form(&stack_rows(width, &[&top, &middle, &bottom])).matrix;

    if !reduced.sub_matrix(0..rb, rb..rb + c).is_zero() {
        debug!(rows = rb, cols = c, "right divide has no solution");
        return Err(LinalgError::Unsolvable);
    }
    Ok(-reduced.sub_matrix(0..rb, rb + c..width))
}

/// [`safe_right_divide`] with `Ok(None)` when there is no solution.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts.
pub fn right_divide<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<Option<DenseMatrix<R>>> {
    solution_or_none(safe_right_divide(b, a))
}

/// [`safe_right_divide_modulo`] with `Ok(None)` when there is no solution.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless `a`, `b` and `l` share their column count.
pub fn right_divide_modulo<R: EchelonDomain>(
    b: &DenseMatrix<R>,
    a: &DenseMatrix<R>,
    l: &DenseMatrix<R>,
) -> Result<Option<DenseMatrix<R>>> {
    solution_or_none(safe_right_divide_modulo(b, a, l))
}

/// The unique `X` with `X * a == b`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different column counts,
/// `NotUnique` if `a` does not have full row rank, and `Unsolvable` if no
/// solution exists.
pub fn unique_right_divide<R: EchelonDomain>(b: &DenseMatrix<R>, a: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    expect_dim("right_divide", a.num_cols(), b.num_cols())?;
    let r = rank(a);
    if r != a.num_rows() {
        debug!(rows = a.num_rows(), rank = r, "right divide is not unique");
        return Err(LinalgError::NotUnique);
    }
    safe_right_divide(b, a)
}

/// Some `X` with `a * X == b`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts, and
/// `Unsolvable` if no solution exists over the ring.
pub fn safe_left_divide<R: EchelonDomain>(a: &DenseMatrix<R>, b: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    let solution = solve_linear_system(a, b);
    if matches!(solution, Err(LinalgError::Unsolvable)) {
        debug!(rows = b.num_rows(), cols = b.num_cols(), "left divide has no solution");
    }
    solution
}

/// Some `X` such that `a * X + l * Y == b` for some `Y`.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless `a`, `b` and `l` share their row count,
/// and `Unsolvable` if no solution exists over the ring.
pub fn safe_left_divide_modulo<R: EchelonDomain>(
    a: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    l: &DenseMatrix<R>,
) -> Result<DenseMatrix<R>> {
    expect_dim("left_divide", a.num_rows(), b.num_rows())?;
    expect_dim("left_divide", a.num_rows(), l.num_rows())?;
    safe_right_divide_modulo(&b.transpose(), &a.transpose(), &l.transpose()).map(|x| x.transpose())
}

/// [`safe_left_divide`] with `Ok(None)` when there is no solution.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts.
pub fn left_divide<R: EchelonDomain>(a: &DenseMatrix<R>, b: &DenseMatrix<R>) -> Result<Option<DenseMatrix<R>>> {
    solution_or_none(safe_left_divide(a, b))
}

/// [`safe_left_divide_modulo`] with `Ok(None)` when there is no solution.
///
/// # Errors
///
/// Returns `ShapeMismatch` unless `a`, `b` and `l` share their row count.
pub fn left_divide_modulo<R: EchelonDomain>(
    a: &DenseMatrix<R>,
    b: &DenseMatrix<R>,
    l: &DenseMatrix<R>,
) -> Result<Option<DenseMatrix<R>>> {
    solution_or_none(safe_left_divide_modulo(a, b, l))
}

/// The unique `X` with `a * X == b`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts,
/// `NotUnique` if `a` does not have full column rank, and `Unsolvable` if
/// no solution exists.
pub fn unique_left_divide<R: EchelonDomain>(a: &DenseMatrix<R>, b: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    expect_dim("left_divide", a.num_rows(), b.num_rows())?;
    let r = rank(a);
    if r != a.num_cols() {
        debug!(cols = a.num_cols(), rank = r, "left divide is not unique");
        return Err(LinalgError::NotUnique);
    }
    safe_left_divide(a, b)
}

fn solution_or_none<R>(result: Result<DenseMatrix<R>>) -> Result<Option<DenseMatrix<R>>> {
    match result {
        Ok(x) => Ok(Some(x)),
        Err(LinalgError::Unsolvable) => Ok(None),
        Err(e) => Err(e),
    }
}
