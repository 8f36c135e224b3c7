//! # syzygy-rings
//!
//! Coefficient rings for syzygy.
//!
//! This crate provides:
//! - Abstract traits: `Ring`, `EuclideanDomain`, `Field`, `EchelonDomain`
//! - Concrete implementations: Z, Q
//! - Base change between them (`Z -> Q` always, `Q -> Z` when integral)
//!
//! A ring is identified by its element type. Matrices over `Z` and over `Q`
//! are distinct types, so operations can never mix rings by accident.
//!
//! ## Trait Hierarchy
//!
//! ```text
//! Ring
//!  └── CommutativeRing
//!       └── IntegralDomain
//!            └── EuclideanDomain
//!                 ├── Field
//!                 └── EchelonDomain  (canonical pivots and residues)
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use integers::Z;
pub use rationals::{NonIntegralError, Q};
pub use traits::{EchelonDomain, EuclideanDomain, Field, OrderedRing, Ring};
