//! Exact solutions of `A * X = B`.

use syzygy_rings::traits::EchelonDomain;

use crate::dense_matrix::DenseMatrix;
use crate::error::{expect_dim, LinalgError, Result};
use crate::normal_form::normal_form_with_transform;

/// Finds some `X` with `a * X == b`.
///
/// Works on the transposed system `X^T * a^T = b^T`: with `U * a^T = H` in
/// normal form, every row of `b^T` is expressed in the nonzero rows of `H`
/// by forward substitution over their pivot columns, and the coefficients
/// are mapped back through `U`.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `a` and `b` have different row counts, and
/// `Unsolvable` if no solution has all its entries in the ring.
pub fn solve_linear_system<R: EchelonDomain>(a: &DenseMatrix<R>, b: &DenseMatrix<R>) -> Result<DenseMatrix<R>> {
    expect_dim("solve_linear_system", a.num_rows(), b.num_rows())?;

    let nft = normal_form_with_transform(&a.transpose());
    let coefficients = (0..b.num_cols())
        .map(|j| express_in_rows(&nft.matrix, &nft.pivot_columns, b.col(j)).ok_or(LinalgError::Unsolvable))
        .collect::<Result<Vec<_>>>()?;

    let y = DenseMatrix::from_row_vecs(nft.rank, coefficients);
    let row_basis_transform = nft.transform.sub_matrix(0..nft.rank, 0..a.num_cols());
    Ok(y.mm(&row_basis_transform).transpose())
}

/// Coefficients `y` with `y * h[0..pivots.len()] == target`, if they exist
/// in the ring.
fn express_in_rows<R: EchelonDomain>(h: &DenseMatrix<R>, pivots: &[usize], mut residual: Vec<R>) -> Option<Vec<R>> {
    let mut y = Vec::with_capacity(pivots.len());
    for (i, &p) in pivots.iter().enumerate() {
        let c = residual[p].exact_div(&h[(i, p)])?;
        if !c.is_zero() {
            for (v, hv) in residual.iter_mut().zip(h.row(i)) {
                *v = v.clone() - c.clone() * hv.clone();
            }
        }
        y.push(c);
    }
    residual.iter().all(|v| v.is_zero()).then_some(y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use syzygy_rings::integers::Z;
    use syzygy_rings::rationals::Q;

    fn z(rows: &[&[i64]]) -> DenseMatrix<Z> {
        DenseMatrix::from_rows(rows.iter().map(|r| r.iter().map(|&v| Z::new(v)).collect()).collect())
    }

    #[test]
    fn test_square_system() {
        let a = z(&[&[1, 2], &[3, 4]]);
        let b = z(&[&[5, 1], &[11, 3]]);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_eq!(x, z(&[&[1, 1], &[2, 0]]));
    }

    #[test]
    fn test_underdetermined_system() {
        let a = z(&[&[2, 4, 6], &[1, 1, 1]]);
        let b = z(&[&[10], &[3]]);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_eq!(x.shape(), (3, 1));
        assert_eq!(a.mm(&x), b);
    }

    #[test]
    fn test_integrality_matters() {
        let a = z(&[&[2]]);
        let b = z(&[&[3]]);
        assert_eq!(solve_linear_system(&a, &b), Err(LinalgError::Unsolvable));

        let a = DenseMatrix::from_rows(vec![vec![Q::from_integer(2)]]);
        let b = DenseMatrix::from_rows(vec![vec![Q::from_integer(3)]]);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_eq!(x[(0, 0)], Q::new(3, 2));
    }

    #[test]
    fn test_inconsistent_system() {
        let a = z(&[&[1, 1], &[1, 1]]);
        let b = z(&[&[1], &[2]]);
        assert_eq!(solve_linear_system(&a, &b), Err(LinalgError::Unsolvable));
    }

    #[test]
    fn test_empty_systems() {
        let a = DenseMatrix::<Z>::zeros(0, 3);
        let b = DenseMatrix::<Z>::zeros(0, 2);
        let x = solve_linear_system(&a, &b).unwrap();
        assert_eq!(x.shape(), (3, 2));
        assert!(x.is_zero());

        let a = DenseMatrix::<Z>::zeros(2, 0);
        assert!(solve_linear_system(&a, &DenseMatrix::zeros(2, 1)).is_ok());
        assert_eq!(solve_linear_system(&a, &z(&[&[1], &[0]])), Err(LinalgError::Unsolvable));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = z(&[&[1, 2]]);
        let b = z(&[&[1], &[2]]);
        assert_eq!(
            solve_linear_system(&a, &b),
            Err(LinalgError::ShapeMismatch {
                operation: "solve_linear_system",
                expected: 1,
                found: 2
            })
        );
    }
}
