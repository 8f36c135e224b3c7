//! Bases of row and column spaces, and zero-row bookkeeping.

use syzygy_rings::traits::{EchelonDomain, Ring};

use crate::dense_matrix::DenseMatrix;
use crate::normal_form::normal_form;

/// The nonzero rows of the normal form: a full-rank matrix with the same
/// row space as `matrix`.
#[must_use]
pub fn basis_of_rows<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> DenseMatrix<R> {
    let nf = normal_form(matrix);
    nf.matrix.sub_matrix(0..nf.rank, 0..matrix.num_cols())
}

/// A full-rank matrix with the same column space as `matrix`.
#[must_use]
pub fn basis_of_columns<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> DenseMatrix<R> {
    basis_of_rows(&matrix.transpose()).transpose()
}

/// Indices of the all-zero rows, ascending.
#[must_use]
pub fn zero_rows<R: Ring>(matrix: &DenseMatrix<R>) -> Vec<usize> {
    matrix
        .rows()
        .enumerate()
        .filter(|(_, row)| row.iter().all(|v| v.is_zero()))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of the all-zero columns, ascending.
#[must_use]
pub fn zero_columns<R: Ring>(matrix: &DenseMatrix<R>) -> Vec<usize> {
    (0..matrix.num_cols())
        .filter(|&j| (0..matrix.num_rows()).all(|i| matrix[(i, j)].is_zero()))
        .collect()
}

/// Index of the first all-zero row, or `num_rows` if there is none.
#[must_use]
pub fn first_zero_row<R: Ring>(matrix: &DenseMatrix<R>) -> usize {
    matrix
        .rows()
        .position(|row| row.iter().all(|v| v.is_zero()))
        .unwrap_or(matrix.num_rows())
}

/// Index of the first all-zero column, or `num_cols` if there is none.
#[must_use]
pub fn first_zero_column<R: Ring>(matrix: &DenseMatrix<R>) -> usize {
    (0..matrix.num_cols())
        .find(|&j| (0..matrix.num_rows()).all(|i| matrix[(i, j)].is_zero()))
        .unwrap_or(matrix.num_cols())
}
