//! Canonical row-reduced forms.
//!
//! One algorithm serves every [`EchelonDomain`]: over `Z` it produces the
//! Hermite normal form (positive pivots, entries above a pivot reduced into
//! `[0, pivot)`), over a field the reduced row-echelon form (unit pivots,
//! zeros above).
//!
//! # Algorithm
//!
//! Columns are scanned left to right. For each pivot column:
//!
//! 1. the first row at or below the current pivot row with a nonzero entry
//!    is swapped into place;
//! 2. lower rows whose entry the pivot does not divide are combined with the
//!    pivot row through the unimodular 2x2 matrix `[[s, t], [-b/g, a/g]]`
//!    built from `extended_gcd`, which leaves the gcd in the pivot position;
//! 3. every lower entry is now a multiple of the pivot and is cleared by an
//!    exact quotient;
//! 4. the pivot row is multiplied by the pivot's normalizing unit;
//! 5. entries above the pivot are replaced by their canonical residues.
//!
//! Steps 3 and 5 update rows independently and run on the rayon pool for
//! large matrices (see [`ParallelConfig`]).
//!
//! The result depends only on the row space of the input. In particular the
//! rows whose leading block vanishes always sit contiguously at the bottom,
//! which the syzygy and divide computations rely on.

use tracing::trace;

use syzygy_rings::traits::{EchelonDomain, Ring};

use crate::blocks::stack_columns;
use crate::dense_matrix::DenseMatrix;
use crate::parallel::{for_each_row, ParallelConfig};

/// A matrix in normal form together with its rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalForm<R> {
    /// The reduced matrix, same shape as the input.
    pub matrix: DenseMatrix<R>,
    /// Number of nonzero rows.
    pub rank: usize,
    /// Column of the leading entry of each nonzero row, strictly increasing.
    pub pivot_columns: Vec<usize>,
}

/// A normal form and the invertible matrix that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalFormWithTransform<R> {
    /// The reduced matrix.
    pub matrix: DenseMatrix<R>,
    /// Square matrix, invertible over the ring, with `transform * input == matrix`.
    pub transform: DenseMatrix<R>,
    /// Number of nonzero rows.
    pub rank: usize,
    /// Column of the leading entry of each nonzero row.
    pub pivot_columns: Vec<usize>,
}

/// Computes the normal form with the default [`ParallelConfig`].
#[must_use]
pub fn normal_form<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> NormalForm<R> {
    normal_form_with_config(matrix, &ParallelConfig::default())
}

/// Computes the normal form, parallelizing row updates per `config`.
#[must_use]
pub fn normal_form_with_config<R: EchelonDomain>(
    matrix: &DenseMatrix<R>,
    config: &ParallelConfig,
) -> NormalForm<R> {
    let num_cols = matrix.num_cols();
    let mut rows = matrix.clone().into_row_vecs();
    let pivot_columns = reduce_rows(&mut rows, num_cols, config);
    let rank = pivot_columns.len();
    trace!(
        rows = matrix.num_rows(),
        cols = num_cols,
        rank,
        "normal form"
    );
    NormalForm {
        matrix: DenseMatrix::from_row_vecs(num_cols, rows),
        rank,
        pivot_columns,
    }
}

/// Computes the normal form and a transformation matrix `u` with
/// `u * matrix == normal form`.
///
/// The normal form is the same as [`normal_form`]'s. The transform is not
/// unique when the rank is smaller than the number of rows.
#[must_use]
pub fn normal_form_with_transform<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> NormalFormWithTransform<R> {
    let (num_rows, num_cols) = matrix.shape();
    let identity = DenseMatrix::identity(num_rows);
    let augmented = stack_columns(num_rows, &[matrix, &identity]);

    let mut rows = augmented.into_row_vecs();
    let pivot_columns = reduce_rows(&mut rows, num_cols, &ParallelConfig::default());
    let rank = pivot_columns.len();
    trace!(rows = num_rows, cols = num_cols, rank, "normal form with transform");

    let reduced = DenseMatrix::from_row_vecs(num_cols + num_rows, rows);
    NormalFormWithTransform {
        matrix: reduced.sub_matrix(0..num_rows, 0..num_cols),
        transform: reduced.sub_matrix(0..num_rows, num_cols..num_cols + num_rows),
        rank,
        pivot_columns,
    }
}

/// Rank of a matrix: the number of nonzero rows of its normal form.
#[must_use]
pub fn rank<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> usize {
    normal_form(matrix).rank
}

/// Checks whether a matrix already is in normal form.
///
/// Nonzero rows must come first with strictly increasing leading columns,
/// each leading entry must be normalized, and each entry above a leading
/// entry must be its own canonical residue.
#[must_use]
pub fn is_normal_form<R: EchelonDomain>(matrix: &DenseMatrix<R>) -> bool {
    let mut pivots: Vec<(usize, &R)> = Vec::new();
    let mut seen_zero_row = false;

    for row in matrix.rows() {
        match row.iter().position(|v| !v.is_zero()) {
            None => seen_zero_row = true,
            Some(col) => {
                if seen_zero_row || pivots.last().is_some_and(|&(prev, _)| prev >= col) {
                    return false;
                }
                if !row[col].is_normalized() {
                    return false;
                }
                pivots.push((col, &row[col]));
            }
        }
    }

    pivots.iter().enumerate().all(|(i, &(col, pivot))| {
        (0..i).all(|above| matrix[(above, col)].canonical_quotient(pivot).is_zero())
    })
}

/// Reduces `rows` in place, choosing pivots only among the first
/// `pivot_limit` columns. Returns the pivot columns.
///
/// Columns past `pivot_limit` are carried along by every row operation,
/// which is how augmented identity blocks record the transformation.
pub(crate) fn reduce_rows<R: EchelonDomain>(
    rows: &mut [Vec<R>],
    pivot_limit: usize,
    config: &ParallelConfig,
) -> Vec<usize> {
    let num_rows = rows.len();
    let mut pivot_columns = Vec::new();
    let mut r = 0;

    for col in 0..pivot_limit {
        if r == num_rows {
            break;
        }
        let Some(found) = (r..num_rows).find(|&i| !rows[i][col].is_zero()) else {
            continue;
        };
        rows.swap(r, found);

        let (head, below) = rows.split_at_mut(r + 1);
        let pivot_row = &mut head[r];

        for row in below.iter_mut() {
            if !row[col].is_zero() && row[col].exact_div(&pivot_row[col]).is_none() {
                gcd_step(pivot_row, row, col);
            }
        }

        let pivot = pivot_row[col].clone();
        let unit = pivot.normalizing_unit();
        let snapshot: &[R] = pivot_row;
        for_each_row(below, config, |row| {
            if !row[col].is_zero() {
                let q = row[col].div(&pivot);
                subtract_multiple(row, &q, snapshot);
            }
        });

        if !unit.is_one() {
            for v in pivot_row.iter_mut() {
                *v = unit.clone() * v.clone();
            }
        }

        let (above, rest) = head.split_at_mut(r);
        let pivot_row: &[R] = &rest[0];
        let pivot = &pivot_row[col];
        for_each_row(above, config, |row| {
            let q = row[col].canonical_quotient(pivot);
            if !q.is_zero() {
                subtract_multiple(row, &q, pivot_row);
            }
        });

        pivot_columns.push(col);
        r += 1;
    }

    pivot_columns
}

/// Replaces `(pivot, other)` by `(s*pivot + t*other, -(b/g)*pivot + (a/g)*other)`
/// where `a, b` are their entries in `col` and `g = s*a + t*b = gcd(a, b)`.
///
/// The 2x2 matrix has determinant one, so the row space is unchanged, and
/// the entry of `other` in `col` becomes zero.
fn gcd_step<R: EchelonDomain>(pivot: &mut [R], other: &mut [R], col: usize) {
    let a = pivot[col].clone();
    let b = other[col].clone();
    let (g, s, t) = a.extended_gcd(&b);
    let a_g = a.div(&g);
    let b_g = b.div(&g);

    for (p, o) in pivot.iter_mut().zip(other.iter_mut()) {
        let new_p = s.clone() * p.clone() + t.clone() * o.clone();
        let new_o = a_g.clone() * o.clone() - b_g.clone() * p.clone();
        *p = new_p;
        *o = new_o;
    }
    debug_assert!(other[col].is_zero());
}

/// `row -= factor * pivot_row`, skipping zero entries of the pivot row.
fn subtract_multiple<R: Ring>(row: &mut [R], factor: &R, pivot_row: &[R]) {
    for (v, p) in row.iter_mut().zip(pivot_row) {
        if !p.is_zero() {
            *v = v.clone() - factor.clone() * p.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syzygy_rings::integers::Z;
    use syzygy_rings::rationals::Q;

    fn z(rows: &[&[i64]]) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| Z::new(v)).collect()).collect())
    }

    fn q(rows: &[&[i64]]) -> DenseMatrix<Q> {
        DenseMatrix::from_rows(
            rows.iter()
                .map(|r| r.iter().map(|&v| Q::from_integer(v)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_hermite_form_full_rank() {
        let m = z(&[&[2, 4, 4], &[-6, 6, 12], &[10, -4, -16]]);
        let nf = normal_form(&m);
        assert_eq!(nf.matrix, z(&[&[2, 4, 4], &[0, 6, 0], &[0, 0, 12]]));
        assert_eq!(nf.rank, 3);
        assert_eq!(nf.pivot_columns, vec![0, 1, 2]);
    }

    #[test]
    fn test_hermite_form_rank_deficient() {
        let m = z(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let nf = normal_form(&m);
        assert_eq!(nf.matrix, z(&[&[1, 2, 3], &[0, 3, 6], &[0, 0, 0]]));
        assert_eq!(nf.rank, 2);
    }

    #[test]
    fn test_hermite_form_reduces_above_pivots() {
        let m = z(&[&[2, 3], &[4, 5], &[6, 7]]);
        let nf = normal_form(&m);
        assert_eq!(nf.matrix, z(&[&[2, 0], &[0, 1], &[0, 0]]));

        let m = z(&[&[3, 5, 7], &[13, 16, 19]]);
        assert_eq!(normal_form(&m).matrix, z(&[&[1, 13, 25], &[0, 17, 34]]));
    }

    #[test]
    fn test_skips_zero_columns() {
        let m = z(&[&[0, 3], &[0, 6], &[0, 0]]);
        let nf = normal_form(&m);
        assert_eq!(nf.matrix, z(&[&[0, 3], &[0, 0], &[0, 0]]));
        assert_eq!(nf.pivot_columns, vec![1]);
    }

    #[test]
    fn test_reduced_row_echelon_over_q() {
        let m = q(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]]);
        let nf = normal_form(&m);
        assert_eq!(nf.matrix, q(&[&[1, 0, -1], &[0, 1, 2], &[0, 0, 0]]));
        assert_eq!(nf.rank, 2);

        let m = DenseMatrix::from_rows(vec![vec![Q::new(2, 3), Q::new(1, 3)]]);
        assert_eq!(normal_form(&m).matrix, DenseMatrix::from_rows(vec![vec![Q::one(), Q::new(1, 2)]]));
    }

    #[test]
    fn test_empty_shapes() {
        let nf = normal_form(&DenseMatrix::<Z>::zeros(0, 4));
        assert_eq!(nf.matrix.shape(), (0, 4));
        assert_eq!(nf.rank, 0);

        let nf = normal_form(&DenseMatrix::<Z>::zeros(3, 0));
        assert_eq!(nf.matrix.shape(), (3, 0));
        assert_eq!(nf.rank, 0);
    }

    #[test]
    fn test_transform_reproduces_form() {
        let m = z(&[&[1, 2, 3], &[4, 5, 6], &[7, 8, 9], &[2, 0, -2]]);
        let nft = normal_form_with_transform(&m);
        assert_eq!(nft.matrix, normal_form(&m).matrix);
        assert_eq!(nft.transform.mm(&m), nft.matrix);
        assert_eq!(nft.transform.shape(), (4, 4));
        // A unimodular transform has full rank.
        assert_eq!(rank(&nft.transform), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        // Enough rows to cross the threshold below.
        let rows: Vec<Vec<i64>> = (0..12)
            .map(|i| (0..5).map(|j| ((i * 7 + j * 3) % 11) - 5).collect())
            .collect();
        let refs: Vec<&[i64]> = rows.iter().map(Vec::as_slice).collect();
        let m = z(&refs);

        let sequential = normal_form_with_config(&m, &ParallelConfig::sequential());
        let parallel = normal_form_with_config(&m, &ParallelConfig { parallel_threshold: 1 });
        assert_eq!(sequential, parallel);
        assert!(is_normal_form(&parallel.matrix));
    }

    #[test]
    fn test_is_normal_form() {
        assert!(is_normal_form(&z(&[&[1, 2, 3], &[0, 3, 6], &[0, 0, 0]])));
        assert!(is_normal_form(&DenseMatrix::<Z>::zeros(2, 2)));
        // Negative pivot.
        assert!(!is_normal_form(&z(&[&[-1, 2]])));
        // Entry above a pivot not reduced.
        assert!(!is_normal_form(&z(&[&[1, 5], &[0, 3]])));
        // Zero row before a nonzero row.
        assert!(!is_normal_form(&z(&[&[0, 0], &[0, 1]])));
        // Leading columns not increasing.
        assert!(!is_normal_form(&z(&[&[0, 1], &[1, 0]])));
        assert!(!is_normal_form(&q(&[&[1, 3], &[0, 1]])));
    }

    #[test]
    fn test_rank() {
        assert_eq!(rank(&z(&[&[1, 2], &[2, 4]])), 1);
        assert_eq!(rank(&q(&[&[1, 0], &[0, 1]])), 2);
        assert_eq!(rank(&DenseMatrix::<Q>::zeros(3, 3)), 0);
    }
}
