//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        #[test]
        fn integer_ring_axioms(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            prop_assert_eq!(&a + &(-&a), Integer::zero());
        }

        #[test]
        fn floor_division_reconstructs(a in small_int(), d in non_zero_int()) {
            let a = Integer::new(a);
            let d = Integer::new(d);
            let (q, r) = a.div_rem_floor(&d);
            prop_assert_eq!(&(&q * &d) + &r, a);
            prop_assert!(r.abs() < d.abs());
            prop_assert!(r.is_zero() || r.signum() == d.signum());
        }

        #[test]
        fn floor_residue_is_canonical(a in small_int(), k in small_int(), d in 1i64..=1000i64) {
            // a and a + k*d share the same residue modulo a positive d.
            let d = Integer::new(d);
            let a = Integer::new(a);
            let shifted = &a + &(&Integer::new(k) * &d);
            prop_assert_eq!(a.div_rem_floor(&d).1, shifted.div_rem_floor(&d).1);
        }

        #[test]
        fn exact_division_inverts_multiplication(a in small_int(), d in non_zero_int()) {
            let a = Integer::new(a);
            let d = Integer::new(d);
            prop_assert_eq!((&a * &d).checked_div_exact(&d), Some(a));
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let g = a.gcd(&b);
            prop_assert!(a.checked_div_exact(&g).is_some());
            prop_assert!(b.checked_div_exact(&g).is_some());
            prop_assert!(!g.is_negative());
        }

        #[test]
        fn rational_field_axioms(
            num_a in small_int(),
            den_a in non_zero_int(),
            num_b in small_int(),
            den_b in non_zero_int()
        ) {
            let a = Rational::from_i64(num_a, den_a);
            let b = Rational::from_i64(num_b, den_b);
            prop_assert_eq!(&a + &b, &b + &a);
            prop_assert_eq!(&a * &b, &b * &a);
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn rational_multiplicative_inverse(num in non_zero_int(), den in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            prop_assert!((&a * &a.recip()).is_one());
        }

        #[test]
        fn rational_is_stored_in_lowest_terms(num in small_int(), den in non_zero_int(), k in non_zero_int()) {
            let a = Rational::from_i64(num, den);
            let b = Rational::from_i64(num * k, den * k);
            prop_assert_eq!(&a, &b);
            prop_assert!(!a.denominator().is_negative());
        }

        #[test]
        fn integral_rationals_convert_back(n in small_int()) {
            let r = Rational::from(n);
            prop_assert_eq!(r.to_integer(), Some(Integer::new(n)));
        }
    }
}
