//! Dense matrices over exact rings.
//!
//! A [`DenseMatrix`] is an immutable value: every operation returns a fresh
//! matrix. Matrices with zero rows or zero columns are legal and carry their
//! shape, so a `0 x 3` matrix (an empty set of generators in a rank 3 free
//! module) differs from a `0 x 0` one.

use std::ops::{Add, Index, Neg, Range, Sub};

use rayon::prelude::*;

use syzygy_rings::traits::Ring;

use crate::error::{expect_dim, Result};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = R::one();
        }
        m
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// An empty outer vector gives the `0 x 0` matrix; use
    /// [`DenseMatrix::zeros`] for other empty shapes.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a flat row-major entry list.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `entries.len() != num_rows * num_cols`.
    pub fn from_entries(num_rows: usize, num_cols: usize, entries: Vec<R>) -> Result<Self> {
        expect_dim("from_entries", num_rows * num_cols, entries.len())?;
        Ok(Self {
            data: entries,
            num_rows,
            num_cols,
        })
    }

    /// Wraps row-major entries whose count is known to match the shape.
    pub(crate) fn from_flat(num_rows: usize, num_cols: usize, data: Vec<R>) -> Self {
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Builds a matrix of known width from owned rows, which may be empty.
    pub(crate) fn from_row_vecs(num_cols: usize, rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), num_rows * num_cols);
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Splits the matrix into owned rows.
    pub(crate) fn into_row_vecs(self) -> Vec<Vec<R>> {
        if self.num_cols == 0 {
            return vec![Vec::new(); self.num_rows];
        }
        let num_cols = self.num_cols;
        let mut rows = Vec::with_capacity(self.num_rows);
        let mut data = self.data.into_iter();
        for _ in 0..self.num_rows {
            rows.push(data.by_ref().take(num_cols).collect());
        }
        rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns `(num_rows, num_cols)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows, self.num_cols)
    }

    /// Checks if the matrix is square.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.num_rows == self.num_cols
    }

    /// Returns true if every entry is zero (vacuously true when empty).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|v| v.is_zero())
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        if row < self.num_rows && col < self.num_cols {
            Some(&self.data[row * self.num_cols + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        assert!(row < self.num_rows, "row {row} out of range");
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[R]> + '_ {
        (0..self.num_rows).map(move |i| self.row(i))
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Returns the entries in row-major order.
    #[must_use]
    pub fn entries(&self) -> &[R] {
        &self.data
    }

    /// Matrix-matrix multiply: C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if `self.num_cols() != other.num_rows()`.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let mut data = Vec::with_capacity(self.num_rows * other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                let mut sum = R::zero();
                for k in 0..self.num_cols {
                    sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                }
                data.push(sum);
            }
        }
        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }

    /// Matrix-matrix multiply that reports a dimension mismatch instead of
    /// panicking.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if `self.num_cols() != other.num_rows()`.
    pub fn try_mm(&self, other: &Self) -> Result<Self> {
        expect_dim("mm", self.num_cols, other.num_rows)?;
        Ok(self.mm(other))
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = Vec::with_capacity(self.data.len());
        for j in 0..self.num_cols {
            for i in 0..self.num_rows {
                data.push(self[(i, j)].clone());
            }
        }
        Self {
            data,
            num_rows: self.num_cols,
            num_cols: self.num_rows,
        }
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self.data.iter().map(|v| v.clone() * scalar.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Returns the contiguous block `rows x cols`.
    ///
    /// # Panics
    ///
    /// Panics if either range reaches past the matrix, like slice indexing.
    #[must_use]
    pub fn sub_matrix(&self, rows: Range<usize>, cols: Range<usize>) -> Self {
        assert!(
            rows.start <= rows.end && rows.end <= self.num_rows,
            "row range {rows:?} out of range for {} rows",
            self.num_rows
        );
        assert!(
            cols.start <= cols.end && cols.end <= self.num_cols,
            "column range {cols:?} out of range for {} columns",
            self.num_cols
        );
        let data = rows
            .clone()
            .flat_map(|i| self.row(i)[cols.clone()].iter().cloned())
            .collect();
        Self {
            data,
            num_rows: rows.len(),
            num_cols: cols.len(),
        }
    }
}

impl<R: Ring + Send + Sync> DenseMatrix<R> {
    /// Matrix-matrix multiply (parallel over output rows): C = A * B.
    ///
    /// # Panics
    ///
    /// Panics if `self.num_cols() != other.num_rows()`.
    #[must_use]
    pub fn mm_parallel(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows);

        let data: Vec<R> = (0..self.num_rows)
            .into_par_iter()
            .flat_map_iter(|i| {
                (0..other.num_cols).map(move |j| {
                    let mut sum = R::zero();
                    for k in 0..self.num_cols {
                        sum = sum + self[(i, k)].clone() * other[(k, j)].clone();
                    }
                    sum
                })
            })
            .collect();

        Self {
            data,
            num_rows: self.num_rows,
            num_cols: other.num_cols,
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.shape(), other.shape());

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() + b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        assert_eq!(self.shape(), other.shape());

        DenseMatrix {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a.clone() - b.clone())
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> Neg for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn neg(self) -> DenseMatrix<R> {
        DenseMatrix {
            data: self.data.iter().map(|a| -a.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring> Neg for DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn neg(self) -> DenseMatrix<R> {
        DenseMatrix {
            data: self.data.into_iter().map(Neg::neg).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}
