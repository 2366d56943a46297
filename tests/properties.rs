use hexint::primitives::BigUint;
use proptest::collection::vec;
use proptest::prelude::*;

fn biguint() -> impl Strategy<Value = BigUint> {
    vec(any::<u32>(), 1..12).prop_map(BigUint::from_digits)
}

fn nonzero_biguint() -> impl Strategy<Value = BigUint> {
    biguint().prop_filter("divisor must be nonzero", |value| !value.is_zero())
}

proptest! {
    #[test]
    fn format_parse_round_trip(text in "[0-9a-fA-F]{1,80}") {
        let value = BigUint::from_hex(&text).unwrap();

        let trimmed = text.to_ascii_lowercase().trim_start_matches('0').to_string();
        let expected = if trimmed.is_empty() { "0".to_string() } else { trimmed };

        prop_assert_eq!(value.to_string(), expected);
        prop_assert_eq!(BigUint::from_hex(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn bitwise_and_add_commute(a in biguint(), b in biguint()) {
        prop_assert_eq!(&a ^ &b, &b ^ &a);
        prop_assert_eq!(&a | &b, &b | &a);
        prop_assert_eq!(&a & &b, &b & &a);
        prop_assert_eq!(&a + &b, &b + &a);
    }

    #[test]
    fn add_and_mul_associate(a in biguint(), b in biguint(), c in biguint()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        prop_assert_eq!(&(&a * &b) * &c, &a * &(&b * &c));
    }

    #[test]
    fn mul_distributes_over_add(a in biguint(), b in biguint(), c in biguint()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }

    #[test]
    fn mul_identity_and_zero(a in biguint()) {
        prop_assert_eq!(&a * &BigUint::one(), a.clone());
        prop_assert_eq!(&a * &BigUint::zero(), BigUint::zero());
    }

    #[test]
    fn sub_undoes_add(a in biguint(), b in biguint()) {
        prop_assert_eq!(&(&a + &b) - &b, a);
    }

    #[test]
    fn sub_underflows_exactly_when_smaller(a in biguint(), b in biguint()) {
        prop_assert_eq!(a.checked_sub(&b).is_none(), a < b);
    }

    #[test]
    fn div_bounds_quotient(a in biguint(), b in nonzero_biguint()) {
        let quotient = &a / &b;

        prop_assert!(&quotient * &b <= a);
        prop_assert!(a < &(&quotient + &BigUint::one()) * &b);
    }

    #[test]
    fn div_rem_reconstructs_dividend(a in biguint(), b in nonzero_biguint()) {
        let (quotient, remainder) = a.div_rem(&b).unwrap();

        prop_assert!(remainder < b);
        prop_assert_eq!(&(&quotient * &b) + &remainder, a);
    }

    #[test]
    fn shifts_match_multiplication_by_powers_of_two(a in biguint(), shift in 0usize..200) {
        let power = BigUint::one() << shift;

        prop_assert_eq!(&a << shift, &a * &power);
        prop_assert_eq!(&a >> shift, &a / &power);
    }

    #[test]
    fn double_complement(a in biguint()) {
        prop_assume!(a.digits()[0] != u32::MAX);

        prop_assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn complement_xor_is_all_ones(a in biguint()) {
        let ones = BigUint::from_digits(vec![u32::MAX; a.digit_count()]);

        prop_assert_eq!(&a ^ &!a.clone(), ones);
    }

    #[test]
    fn native_arithmetic_agrees(a in any::<u64>(), b in any::<u64>()) {
        let (x, y) = (BigUint::from(a), BigUint::from(b));

        prop_assert_eq!(u128::try_from(&x * &y).unwrap(), a as u128 * b as u128);
        prop_assert_eq!(u128::try_from(&x + &y).unwrap(), a as u128 + b as u128);
        if b != 0 {
            prop_assert_eq!(u64::try_from(&x / &y).unwrap(), a / b);
            prop_assert_eq!(u64::try_from(&x % &y).unwrap(), a % b);
        }
    }
}
