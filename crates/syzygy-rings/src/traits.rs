//! Algebraic structure traits.
//!
//! The element type of a ring carries the whole ring structure: `zero()` and
//! `one()` are associated functions, and the arithmetic comes from the
//! operator traits. No ring object exists at runtime.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A ring is a set with addition and multiplication operations.
///
/// # Laws
///
/// - Addition is associative and commutative with identity `zero()`
/// - Multiplication is associative with identity `one()`
/// - Multiplication distributes over addition
/// - Every element has an additive inverse (`neg`)
pub trait Ring:
    Clone + Eq + Debug + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Neg<Output = Self>
{
    /// The additive identity.
    fn zero() -> Self;

    /// The multiplicative identity.
    fn one() -> Self;

    /// Returns true if this is the additive identity.
    fn is_zero(&self) -> bool;

    /// Returns true if this is the multiplicative identity.
    fn is_one(&self) -> bool;
}

/// A commutative ring where multiplication is commutative.
pub trait CommutativeRing: Ring {}

/// An integral domain is a commutative ring with no zero divisors.
///
/// If a * b = 0, then a = 0 or b = 0.
pub trait IntegralDomain: CommutativeRing {}

/// A Euclidean domain supports division with remainder.
///
/// For any a, b with b ≠ 0, there exist q, r such that:
/// - a = b*q + r
/// - Either r = 0 or φ(r) < φ(b) for some Euclidean function φ
pub trait EuclideanDomain: IntegralDomain {
    /// Computes the quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// May panic if `other` is zero.
    fn div_rem(&self, other: &Self) -> (Self, Self);

    /// Computes the quotient of division.
    fn div(&self, other: &Self) -> Self {
        self.div_rem(other).0
    }

    /// Computes the remainder of division.
    fn rem(&self, other: &Self) -> Self {
        self.div_rem(other).1
    }

    /// Computes a greatest common divisor.
    fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();

        while !b.is_zero() {
            let r = a.rem(&b);
            a = b;
            b = r;
        }

        a
    }

    /// Extended Euclidean algorithm.
    ///
    /// Returns (gcd, x, y) such that gcd = self*x + other*y.
    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self);
}

/// A field is a ring where every non-zero element has a multiplicative inverse.
pub trait Field: EuclideanDomain {
    /// Computes the multiplicative inverse.
    ///
    /// Returns `None` if the element is zero.
    fn inv(&self) -> Option<Self>;
}

/// Marker trait for ordered rings.
pub trait OrderedRing: Ring + Ord {
    /// Returns the absolute value.
    fn abs(&self) -> Self;

    /// Returns the sign: -1, 0, or 1.
    fn signum(&self) -> i8;
}

/// A Euclidean domain with canonical representatives, which is what makes
/// a row-reduced form unique.
///
/// Two choices pin the normal form down:
/// - each pivot is replaced by its canonical associate
///   (`normalizing_unit() * pivot`), and
/// - each entry above a pivot is replaced by its canonical residue
///   (`entry - canonical_quotient(pivot) * pivot`).
///
/// Over `Z` this yields the Hermite normal form (positive pivots, residues
/// in `[0, pivot)`); over a field it yields the reduced row-echelon form
/// (pivots 1, zeros above).
///
/// `Send + Sync` lets the normal-form engine update rows in parallel.
pub trait EchelonDomain: EuclideanDomain + Send + Sync {
    /// A unit `u` such that `u * self` is the canonical associate of `self`.
    ///
    /// Returns `one()` for zero.
    fn normalizing_unit(&self) -> Self;

    /// The quotient `q` for which `self - q * pivot` is the canonical residue
    /// of `self` modulo a pivot already in canonical form.
    ///
    /// # Panics
    ///
    /// May panic if `pivot` is zero.
    fn canonical_quotient(&self, pivot: &Self) -> Self;

    /// Returns `q` with `q * divisor == self` if the quotient lies in the
    /// ring, `None` otherwise. A zero divisor always yields `None`.
    fn exact_div(&self, divisor: &Self) -> Option<Self>;

    /// Returns true if `self` already is its canonical associate.
    fn is_normalized(&self) -> bool {
        self.normalizing_unit().is_one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Q, Z};

    #[test]
    fn test_is_normalized() {
        assert!(Z::new(5).is_normalized());
        assert!(!Z::new(-5).is_normalized());
        assert!(Z::zero().is_normalized());
        assert!(Q::one().is_normalized());
        assert!(!Q::new(2, 3).is_normalized());
    }
}
