//! # syzygy-integers
//!
//! Arbitrary precision integer and rational arithmetic for syzygy.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Arbitrary precision rationals (`Rational`)
//!
//! Every value is exact. Matrix entries grow during Hermite reduction, so
//! nothing here ever truncates to a machine word silently; conversions to
//! `i64` are explicit and fallible.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use rational::Rational;
