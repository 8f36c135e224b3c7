//! Moving matrices between rings.

use std::fmt::Display;

use syzygy_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;
use crate::error::{LinalgError, Result};

/// Maps every entry of `matrix` into the ring `T`.
///
/// Embeddings such as `Z -> Q` always succeed; partial maps such as
/// `Q -> Z` fail on the first entry (in row-major order) with no image.
///
/// # Errors
///
/// Returns `BaseChange` with the position of the offending entry and the
/// conversion's own message.
pub fn change_base_ring<S, T>(matrix: &DenseMatrix<S>) -> Result<DenseMatrix<T>>
where
    S: Ring,
    T: Ring + TryFrom<S>,
    <T as TryFrom<S>>::Error: Display,
{
    let (num_rows, num_cols) = matrix.shape();
    let entries = matrix
        .entries()
        .iter()
        .enumerate()
        .map(|(k, v)| {
            T::try_from(v.clone()).map_err(|e| LinalgError::BaseChange {
                row: k / num_cols,
                col: k % num_cols,
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DenseMatrix::from_flat(num_rows, num_cols, entries))
}
