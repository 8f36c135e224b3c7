//! The field of rational numbers Q.

use thiserror::Error;

use crate::integers::Z;
use crate::traits::{CommutativeRing, EchelonDomain, EuclideanDomain, Field, IntegralDomain, OrderedRing, Ring};
use syzygy_integers::Rational;

/// The field of rational numbers.
///
/// This is a wrapper around `syzygy_integers::Rational` that implements
/// the algebraic traits.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Q(pub Rational);

/// A rational with a non-trivial denominator has no image in `Z`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0} is not an integer")]
pub struct NonIntegralError(pub Q);

impl Q {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if `den` is zero.
    #[must_use]
    pub fn new(num: i64, den: i64) -> Self {
        Self(Rational::from_i64(num, den))
    }

    /// Creates a rational from an integer.
    #[must_use]
    pub fn from_integer(n: i64) -> Self {
        Self(Rational::from(n))
    }

    /// Returns the inner Rational.
    #[must_use]
    pub fn into_inner(self) -> Rational {
        self.0
    }

    /// Returns a reference to the inner Rational.
    #[must_use]
    pub fn as_inner(&self) -> &Rational {
        &self.0
    }
}

impl Ring for Q {
    fn zero() -> Self {
        Self(Rational::from(0))
    }

    fn one() -> Self {
        Self(Rational::from(1))
    }

    fn is_zero(&self) -> bool {
        use num_traits::Zero;
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        use num_traits::One;
        self.0.is_one()
    }
}

impl CommutativeRing for Q {}
impl IntegralDomain for Q {}

impl EuclideanDomain for Q {
    fn div_rem(&self, other: &Self) -> (Self, Self) {
        // In a field, division is exact, so remainder is always zero
        (Self(&self.0 / &other.0), Self::zero())
    }

    fn gcd(&self, other: &Self) -> Self {
        if self.is_zero() && other.is_zero() {
            Self::zero()
        } else {
            Self::one()
        }
    }

    fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        if !self.is_zero() {
            (Self::one(), Self(self.0.recip()), Self::zero())
        } else if !other.is_zero() {
            (Self::one(), Self::zero(), Self(other.0.recip()))
        } else {
            (Self::zero(), Self::zero(), Self::zero())
        }
    }
}

impl Field for Q {
    fn inv(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            Some(Self(self.0.recip()))
        }
    }
}

impl EchelonDomain for Q {
    fn normalizing_unit(&self) -> Self {
        self.inv().unwrap_or_else(Self::one)
    }

    fn canonical_quotient(&self, pivot: &Self) -> Self {
        self.div(pivot)
    }

    fn exact_div(&self, divisor: &Self) -> Option<Self> {
        (!divisor.is_zero()).then(|| self.div(divisor))
    }
}

impl OrderedRing for Q {
    fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    fn signum(&self) -> i8 {
        self.0.signum()
    }
}

impl std::ops::Add for Q {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Q {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::Mul for Q {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::Neg for Q {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<i64> for Q {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<Rational> for Q {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl From<Z> for Q {
    fn from(value: Z) -> Self {
        Self(Rational::from_integer(value.into_inner()))
    }
}

impl TryFrom<Q> for Z {
    type Error = NonIntegralError;

    fn try_from(value: Q) -> Result<Self, Self::Error> {
        value.0.to_integer().map(Z).ok_or(NonIntegralError(value))
    }
}

impl std::fmt::Display for Q {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
