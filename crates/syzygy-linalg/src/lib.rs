//! # syzygy-linalg
//!
//! Exact linear algebra over `Z` and `Q` for module computations.
//!
//! This crate provides:
//! - Dense matrices and block assembly (concatenation, selection, Kronecker)
//! - Canonical normal forms: Hermite over `Z`, reduced row-echelon over `Q`
//! - Bases of row and column spaces
//! - Syzygies (left and right kernels)
//! - One-sided divides: `X * A + Y * L = B` and `A * X + L * Y = B`
//! - Reduction of one row space modulo another
//!
//! ## How the algorithms work
//!
//! Almost every operation glues its operands into one augmented block
//! matrix, computes a single normal form, and slices the answer out of a
//! sub-block. Identity blocks in the augmentation record which combination
//! of input rows produced each reduced row. This only works because the
//! normal form is canonical, so the slicing is always reproducible.
//!
//! Large reductions hand independent row updates to rayon; see
//! [`ParallelConfig`].

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::many_single_char_names)]

pub mod base_change;
pub mod basis;
pub mod blocks;
pub mod dense_matrix;
pub mod divide;
pub mod error;
pub mod normal_form;
pub mod parallel;
pub mod reduce;
pub mod solve;
pub mod syzygies;

pub use base_change::change_base_ring;
pub use basis::{basis_of_columns, basis_of_rows, first_zero_column, first_zero_row, zero_columns, zero_rows};
pub use blocks::{concat_columns, concat_rows};
pub use dense_matrix::DenseMatrix;
pub use divide::{
    left_divide, left_divide_modulo, right_divide, right_divide_modulo, safe_left_divide, safe_left_divide_modulo,
    safe_right_divide, safe_right_divide_modulo, unique_left_divide, unique_right_divide,
};
pub use error::{LinalgError, Result};
pub use normal_form::{
    is_normal_form, normal_form, normal_form_with_config, normal_form_with_transform, rank, NormalForm,
    NormalFormWithTransform,
};
pub use parallel::ParallelConfig;
pub use reduce::{
    decide_zero_columns, decide_zero_columns_effectively, decide_zero_rows, decide_zero_rows_effectively,
    is_zero_modulo_columns, is_zero_modulo_rows,
};
pub use solve::solve_linear_system;
pub use syzygies::{syzygies_of_columns, syzygies_of_rows};
