//! Kernel generators.
//!
//! The rows of `[A | I]` in normal form carry, in the identity block, the
//! combination of rows of `A` that produced them. Rows whose `A` block has
//! vanished are exactly the syzygies, and the normal form keeps them
//! together at the bottom.

use tracing::debug;

use syzygy_rings::traits::EchelonDomain;

use crate::basis::first_zero_row;
use crate::blocks::stack_columns;
use crate::dense_matrix::DenseMatrix;
use crate::normal_form::normal_form;

/// Generators of the left kernel `{ x : x * a == 0 }`, one per row.
///
/// The result has `a.num_rows()` columns and `a.num_rows() - rank(a)` rows;
/// for a matrix of full row rank it is the empty `0 x a.num_rows()` matrix.
#[must_use]
pub fn syzygies_of_rows<R: EchelonDomain>(a: &DenseMatrix<R>) -> DenseMatrix<R> {
    let (m, n) = a.shape();
    let identity = DenseMatrix::identity(m);
    let nf = normal_form(&stack_columns(m, &[a, &identity]));

    let start = first_zero_row(&nf.matrix.sub_matrix(0..m, 0..n));
    debug_assert_eq!(
        start,
        nf.pivot_columns.iter().filter(|&&col| col < n).count(),
        "rows with a vanished leading block must be contiguous"
    );

    let syzygies = nf.matrix.sub_matrix(start..m, n..n + m);
    debug!(rows = m, cols = n, generators = syzygies.num_rows(), "syzygies of rows");
    syzygies
}

/// Generators of the right kernel `{ x : a * x == 0 }`, one per column.
#[must_use]
pub fn syzygies_of_columns<R: EchelonDomain>(a: &DenseMatrix<R>) -> DenseMatrix<R> {
    syzygies_of_rows(&a.transpose()).transpose()
}
