// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Property tests for arithmetic modulo m.

use number_wall::arith::{inverse, reduce, Modulus};
use number_wall::WallError;
use proptest::prelude::*;

const PRIMES: [u64; 10] = [2, 3, 5, 7, 11, 13, 101, 257, 65_537, 1_000_000_007];

fn prime() -> impl Strategy<Value = u64> {
    prop::sample::select(PRIMES.to_vec())
}

proptest! {
    #[test]
    fn inverse_is_inverse(p in prime(), seed in 1u64..u64::MAX) {
        let n = seed % (p - 1) + 1;
        let inv = inverse(n as i128, p).unwrap();
        prop_assert!(inv < p);
        prop_assert_eq!(reduce(n as i128 * inv as i128, p), 1);
    }

    #[test]
    fn reduce_is_in_range(n in any::<i64>(), m in 2u64..10_000) {
        let r = reduce(n as i128, m);
        prop_assert!(r < m);
        prop_assert_eq!((n as i128 - r as i128).rem_euclid(m as i128), 0);
    }

    #[test]
    fn modulus_agrees_with_free_functions(n in any::<i64>(), m in 2u64..500) {
        let modulus = Modulus::new(m).unwrap();
        prop_assert_eq!(modulus.reduce(n as i128), reduce(n as i128, m));
        prop_assert_eq!(modulus.inverse(n as i128), inverse(n as i128, m));
    }

    #[test]
    fn inverse_fails_exactly_on_shared_factors(m in 2u64..200, n in 1u64..200) {
        let shares_factor = (2..=m).any(|d| m % d == 0 && n % d == 0);
        match inverse(n as i128, m) {
            Ok(inv) => {
                prop_assert!(!shares_factor || n % m == 0);
                if n % m != 0 {
                    prop_assert_eq!(reduce(n as i128 * inv as i128, m), 1);
                }
            }
            Err(WallError::DivisionUndefined { value, modulus }) => {
                prop_assert!(shares_factor);
                prop_assert_eq!(value, n % m);
                prop_assert_eq!(modulus, m);
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }
}

#[test]
fn test_is_prime() {
    for p in PRIMES {
        assert!(Modulus::new(p).unwrap().is_prime(), "{}", p);
    }
    for m in [4u64, 6, 9, 15, 25, 91, 65_535] {
        assert!(!Modulus::new(m).unwrap().is_prime(), "{}", m);
    }
}
