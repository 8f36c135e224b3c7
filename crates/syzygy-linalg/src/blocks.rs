//! Block assembly: stacking, selection and Kronecker products.
//!
//! Every algorithm in this crate works by gluing its operands into one
//! augmented matrix, reducing it once, and slicing the answer back out.
//! These are the gluing and slicing primitives.

use syzygy_rings::traits::Ring;

use crate::dense_matrix::DenseMatrix;
use crate::error::{expect_dim, LinalgError, Result};

/// Stacks matrices vertically, in order.
///
/// Every block must have `num_cols` columns. An empty list yields the
/// `0 x num_cols` zero matrix.
///
/// # Errors
///
/// Returns `ShapeMismatch` if a block has the wrong number of columns.
pub fn concat_rows<R: Ring>(num_cols: usize, blocks: &[&DenseMatrix<R>]) -> Result<DenseMatrix<R>> {
    for block in blocks {
        expect_dim("concat_rows", num_cols, block.num_cols())?;
    }
    Ok(stack_rows(num_cols, blocks))
}

/// Stacks matrices side by side, in order.
///
/// Every block must have `num_rows` rows. An empty list yields the
/// `num_rows x 0` zero matrix.
///
/// # Errors
///
/// Returns `ShapeMismatch` if a block has the wrong number of rows.
pub fn concat_columns<R: Ring>(num_rows: usize, blocks: &[&DenseMatrix<R>]) -> Result<DenseMatrix<R>> {
    for block in blocks {
        expect_dim("concat_columns", num_rows, block.num_rows())?;
    }
    Ok(stack_columns(num_rows, blocks))
}

/// [`concat_rows`] for blocks whose widths are known to agree.
pub(crate) fn stack_rows<R: Ring>(num_cols: usize, blocks: &[&DenseMatrix<R>]) -> DenseMatrix<R> {
    let num_rows: usize = blocks.iter().map(|b| b.num_rows()).sum();
    let mut entries = Vec::with_capacity(num_rows * num_cols);
    for block in blocks {
        debug_assert_eq!(block.num_cols(), num_cols);
        entries.extend_from_slice(block.entries());
    }
    DenseMatrix::from_flat(num_rows, num_cols, entries)
}

/// [`concat_columns`] for blocks whose heights are known to agree.
pub(crate) fn stack_columns<R: Ring>(num_rows: usize, blocks: &[&DenseMatrix<R>]) -> DenseMatrix<R> {
    let num_cols: usize = blocks.iter().map(|b| b.num_cols()).sum();
    let mut rows = Vec::with_capacity(num_rows);
    for i in 0..num_rows {
        let mut row = Vec::with_capacity(num_cols);
        for block in blocks {
            debug_assert_eq!(block.num_rows(), num_rows);
            row.extend_from_slice(block.row(i));
        }
        rows.push(row);
    }
    DenseMatrix::from_row_vecs(num_cols, rows)
}

impl<R: Ring> DenseMatrix<R> {
    /// Picks rows by index, in the order given.
    ///
    /// Indices may repeat and need not be sorted. An empty index list yields
    /// a `0 x num_cols` matrix.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for any index `>= num_rows`.
    pub fn select_rows(&self, indices: &[usize]) -> Result<Self> {
        let rows = indices
            .iter()
            .map(|&i| {
                if i < self.num_rows() {
                    Ok(self.row(i).to_vec())
                } else {
                    Err(LinalgError::IndexOutOfBounds {
                        index: i,
                        bound: self.num_rows(),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_row_vecs(self.num_cols(), rows))
    }

    /// Picks columns by index, in the order given.
    ///
    /// Indices may repeat and need not be sorted. An empty index list yields
    /// a `num_rows x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` for any index `>= num_cols`.
    pub fn select_columns(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&j| j >= self.num_cols()) {
            return Err(LinalgError::IndexOutOfBounds {
                index: bad,
                bound: self.num_cols(),
            });
        }
        let rows = self
            .rows()
            .map(|row| indices.iter().map(|&j| row[j].clone()).collect())
            .collect();
        Ok(Self::from_row_vecs(indices.len(), rows))
    }

    /// Kronecker product.
    ///
    /// The result has shape `(r1 * r2, c1 * c2)` and entry
    /// `(i1 * r2 + i2, j1 * c2 + j2) = self[(i1, j1)] * other[(i2, j2)]`.
    #[must_use]
    pub fn kronecker(&self, other: &Self) -> Self {
        let (r1, c1) = self.shape();
        let (r2, c2) = other.shape();
        let mut rows = Vec::with_capacity(r1 * r2);
        for i1 in 0..r1 {
            for i2 in 0..r2 {
                let mut row = Vec::with_capacity(c1 * c2);
                for j1 in 0..c1 {
                    let a = &self[(i1, j1)];
                    row.extend(other.row(i2).iter().map(|b| a.clone() * b.clone()));
                }
                rows.push(row);
            }
        }
        Self::from_row_vecs(c1 * c2, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syzygy_rings::integers::Z;

    fn z(rows: &[&[i64]]) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| Z::new(v)).collect()).collect())
    }

    #[test]
    fn test_concat_rows() {
        let a = z(&[&[1, 2]]);
        let b = z(&[&[3, 4], &[5, 6]]);
        let stacked = concat_rows(2, &[&a, &b]).unwrap();
        assert_eq!(stacked, z(&[&[1, 2], &[3, 4], &[5, 6]]));
    }

    #[test]
    fn test_concat_columns() {
        let a = z(&[&[1], &[2]]);
        let b = z(&[&[3, 4], &[5, 6]]);
        let glued = concat_columns(2, &[&a, &b]).unwrap();
        assert_eq!(glued, z(&[&[1, 3, 4], &[2, 5, 6]]));
    }

    #[test]
    fn test_concat_empty_lists() {
        let rows = concat_rows::<Z>(4, &[]).unwrap();
        assert_eq!(rows.shape(), (0, 4));
        let cols = concat_columns::<Z>(3, &[]).unwrap();
        assert_eq!(cols.shape(), (3, 0));
    }

    #[test]
    fn test_concat_with_empty_blocks() {
        let empty = DenseMatrix::<Z>::zeros(0, 2);
        let a = z(&[&[7, 8]]);
        assert_eq!(concat_rows(2, &[&empty, &a, &empty]).unwrap(), a);

        let thin = DenseMatrix::<Z>::zeros(1, 0);
        assert_eq!(concat_columns(1, &[&thin, &a]).unwrap(), a);
    }

    #[test]
    fn test_concat_shape_mismatch() {
        let a = z(&[&[1, 2]]);
        let b = z(&[&[1, 2, 3]]);
        assert_eq!(
            concat_rows(2, &[&a, &b]),
            Err(LinalgError::ShapeMismatch {
                operation: "concat_rows",
                expected: 2,
                found: 3
            })
        );
        assert!(concat_columns(2, &[&a]).is_err());
    }

    #[test]
    fn test_select_rows() {
        let m = z(&[&[1, 2], &[3, 4], &[5, 6]]);
        assert_eq!(m.select_rows(&[2, 0, 2]).unwrap(), z(&[&[5, 6], &[1, 2], &[5, 6]]));
        assert_eq!(m.select_rows(&[]).unwrap().shape(), (0, 2));
        assert_eq!(
            m.select_rows(&[1, 3]),
            Err(LinalgError::IndexOutOfBounds { index: 3, bound: 3 })
        );
    }

    #[test]
    fn test_select_columns() {
        let m = z(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.select_columns(&[2, 2, 0]).unwrap(), z(&[&[3, 3, 1], &[6, 6, 4]]));
        assert_eq!(m.select_columns(&[]).unwrap().shape(), (2, 0));
        assert_eq!(
            m.select_columns(&[5]),
            Err(LinalgError::IndexOutOfBounds { index: 5, bound: 3 })
        );
    }

    #[test]
    fn test_kronecker() {
        let a = z(&[&[1, 2], &[3, 4]]);
        let b = z(&[&[0, 5, 1]]);
        let k = a.kronecker(&b);
        assert_eq!(k, z(&[&[0, 5, 1, 0, 10, 2], &[0, 15, 3, 0, 20, 4]]));
    }

    #[test]
    fn test_kronecker_block_formula() {
        let a = z(&[&[2, -1, 0], &[1, 3, 5]]);
        let b = z(&[&[1, 4], &[-2, 0], &[7, 1]]);
        let k = a.kronecker(&b);
        assert_eq!(k.shape(), (6, 6));
        for i1 in 0..2 {
            for j1 in 0..3 {
                for i2 in 0..3 {
                    for j2 in 0..2 {
                        assert_eq!(
                            k[(i1 * 3 + i2, j1 * 2 + j2)],
                            a[(i1, j1)].clone() * b[(i2, j2)].clone()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_kronecker_with_empty() {
        let a = z(&[&[1, 2]]);
        let empty = DenseMatrix::<Z>::zeros(0, 3);
        assert_eq!(a.kronecker(&empty).shape(), (0, 6));
    }
}
