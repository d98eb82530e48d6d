use proptest::prelude::*;
use prism_base24::{chain, Base24Number, MAX_VALUE, WIDTH};

const MODULUS: u128 = MAX_VALUE as u128 + 1;

// Property 1: Roundtrip conversion (from_u32 → to_u32 == identity for every u32)
proptest! {
    #[test]
    fn prop_roundtrip_conversion(value in any::<u32>()) {
        let n = Base24Number::from_u32(value);
        prop_assert_eq!(n.to_u32(), value);
        prop_assert_eq!(n.to_u64(), u64::from(value));
    }
}

// Property 2: Digits stay in range, padding stays zero, size is canonical
proptest! {
    #[test]
    fn prop_constructor_invariants(value in 0u64..=MAX_VALUE) {
        let n = Base24Number::from_u64(value);
        let digits = n.digits();

        prop_assert!(n.size() >= 1 && n.size() <= WIDTH);
        prop_assert!(digits.iter().all(|&d| d < 24), "digit out of range: {:?}", digits);
        prop_assert!(digits[n.size()..].iter().all(|&d| d == 0));
        if value > 0 {
            prop_assert_ne!(digits[n.size() - 1], 0, "size {} is not canonical", n.size());
        }
        prop_assert_eq!(n.to_u64(), value);
    }
}

// Property 3: Addition matches native addition when no ninth digit is needed
proptest! {
    #[test]
    fn prop_addition_matches_native(a in any::<u32>(), b in any::<u32>()) {
        let sum = u64::from(a) + u64::from(b);
        prop_assume!(sum <= MAX_VALUE);

        let result = Base24Number::from_u32(a).add(&Base24Number::from_u32(b));
        prop_assert_eq!(result, Base24Number::from_u64(sum));
    }
}

// Property 4: Truncating addition and multiplication are exact modulo 24^8
proptest! {
    #[test]
    fn prop_truncation_is_modular(a in 0u64..=MAX_VALUE, b in 0u64..=MAX_VALUE) {
        let x = Base24Number::from_u64(a);
        let y = Base24Number::from_u64(b);

        let sum = x.add(&y);
        let product = x.multiply(&y);

        prop_assert_eq!(u128::from(sum.to_u64()), (u128::from(a) + u128::from(b)) % MODULUS);
        prop_assert_eq!(u128::from(product.to_u64()), (u128::from(a) * u128::from(b)) % MODULUS);
        prop_assert!(sum.digits().iter().all(|&d| d < 24));
        prop_assert!(product.digits().iter().all(|&d| d < 24));
        prop_assert!(sum.digits()[sum.size()..].iter().all(|&d| d == 0));
        prop_assert!(product.digits()[product.size()..].iter().all(|&d| d == 0));
    }
}

// Property 5: Multiplication matches native multiplication below the width limit
proptest! {
    #[test]
    fn prop_multiplication_matches_native(a in 0u32..300_000, b in 0u32..300_000) {
        let product = u64::from(a) * u64::from(b);
        prop_assume!(product <= MAX_VALUE);

        let result = Base24Number::from_u32(a).multiply(&Base24Number::from_u32(b));
        prop_assert_eq!(result, Base24Number::from_u64(product));
    }
}

// Property 6: Addition is commutative and associative without truncation
proptest! {
    #[test]
    fn prop_addition_laws(a in 0u32..1_000_000, b in 0u32..1_000_000, c in 0u32..1_000_000) {
        let (a, b, c) = (
            Base24Number::from_u32(a),
            Base24Number::from_u32(b),
            Base24Number::from_u32(c),
        );

        prop_assert_eq!(a.add(&b), b.add(&a), "Addition is not commutative");
        prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)), "Addition is not associative");
    }
}

// Property 7: Multiplying by zero always gives zero
proptest! {
    #[test]
    fn prop_multiply_by_zero(x in 0u64..=MAX_VALUE) {
        let zero = Base24Number::from_u32(0);
        let x = Base24Number::from_u64(x);
        prop_assert!(zero.multiply(&x).is_zero());
        prop_assert!(x.multiply(&zero).is_zero());
    }
}

// Property 8: Determinism (same input always produces the same digits)
proptest! {
    #[test]
    fn prop_determinism(value in any::<u32>()) {
        let first = Base24Number::from_u32(value);
        let second = Base24Number::from_u32(value);
        prop_assert_eq!(first.digits(), second.digits(), "Non-deterministic conversion");
        prop_assert_eq!(first.size(), second.size());
    }
}

// Property 9: 32-bit conversion is the exact value modulo 2^32
proptest! {
    #[test]
    fn prop_to_u32_wraps(value in 0u64..=MAX_VALUE) {
        let n = Base24Number::from_u64(value);
        prop_assert_eq!(n.to_u32(), value as u32);
        prop_assert_eq!(n.checked_to_u32().is_ok(), value <= u64::from(u32::MAX));
    }
}

// Property 10: Chained feedback matches a modular reference loop
proptest! {
    #[test]
    fn prop_chain_matches_reference(a in any::<u32>(), b in any::<u32>(), iterations in 0usize..64) {
        let out = chain(Base24Number::from_u32(a), Base24Number::from_u32(b), iterations);

        let (mut x, mut y) = (u128::from(a), u128::from(b));
        for _ in 0..iterations {
            let next_x = (x + y) % MODULUS;
            let next_y = (x * y) % MODULUS;
            x = next_x;
            y = next_y;
        }

        prop_assert_eq!(u128::from(out.sum.to_u64()), x);
        prop_assert_eq!(u128::from(out.product.to_u64()), y);
    }
}
