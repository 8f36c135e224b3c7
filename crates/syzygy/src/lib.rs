//! # Syzygy
//!
//! Exact linear algebra over the integers and the rationals, for module
//! presentations, kernels and one-sided linear systems.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: arbitrary precision integers and rationals
//! - **Canonical Normal Forms**: Hermite over `Z`, reduced row-echelon over `Q`
//! - **Syzygies**: generators of left and right kernels
//! - **Divides**: solve `X * A + Y * L = B` with a typed "no solution" result
//! - **Reduction**: decide membership in a row or column space
//!
//! ## Quick Start
//!
//! ```rust
//! use syzygy::prelude::*;
//!
//! let a = DenseMatrix::from_rows(vec![
//!     vec![Z::new(1), Z::new(2)],
//!     vec![Z::new(2), Z::new(4)],
//! ]);
//! let kernel = syzygies_of_rows(&a);
//! assert!(kernel.mm(&a).is_zero());
//! assert_eq!(kernel.num_rows(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use syzygy_integers as integers;
pub use syzygy_linalg as linalg;
pub use syzygy_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use syzygy_integers::{Integer, Rational};
    pub use syzygy_linalg::{
        basis_of_columns, basis_of_rows, change_base_ring, concat_columns, concat_rows, decide_zero_columns,
        decide_zero_rows, left_divide, normal_form, rank, right_divide, safe_left_divide, safe_right_divide,
        safe_right_divide_modulo, syzygies_of_columns, syzygies_of_rows, unique_left_divide, unique_right_divide,
        DenseMatrix, LinalgError, NormalForm,
    };
    pub use syzygy_rings::{EchelonDomain, EuclideanDomain, Field, Ring, Q, Z};
}
