use prism_base24::{chain, Base24Number, WIDTH};

// Fixed digit layouts for hand-checked values, so any change to the
// conversion or carry handling shows up as an exact mismatch.

#[test]
fn test_base24_digit_layouts() {
    let cases: [(u32, [u8; WIDTH], usize); 8] = [
        (0, [0, 0, 0, 0, 0, 0, 0, 0], 1),
        (1, [1, 0, 0, 0, 0, 0, 0, 0], 1),
        (23, [23, 0, 0, 0, 0, 0, 0, 0], 1),
        (24, [0, 1, 0, 0, 0, 0, 0, 0], 2),
        (42, [18, 1, 0, 0, 0, 0, 0, 0], 2),
        (575, [23, 23, 0, 0, 0, 0, 0, 0], 2),
        (576, [0, 0, 1, 0, 0, 0, 0, 0], 3),
        (1008, [0, 18, 1, 0, 0, 0, 0, 0], 3),
    ];

    for (value, digits, size) in cases {
        let n = Base24Number::from_u32(value);
        assert_eq!(n.digits(), &digits, "digit layout mismatch for {}", value);
        assert_eq!(n.size(), size, "size mismatch for {}", value);
    }
}

#[test]
fn test_base24_reference_scenario() {
    let a = Base24Number::from_u32(42);
    let b = Base24Number::from_u32(24);

    assert_eq!(a.add(&b), Base24Number::from_u32(66));
    assert_eq!(a.multiply(&b), Base24Number::from_u32(1008));

    // The product carries the full 1:18:0 layout, not just the right value
    let product = a.multiply(&b);
    assert_eq!(product.to_string(), "1:18:0");
}

#[test]
fn test_base24_chained_runs_are_repeatable() {
    let a = Base24Number::from_u32(42);
    let b = Base24Number::from_u32(24);

    let first = chain(a, b, 1000);
    let second = chain(a, b, 1000);

    assert_eq!(first, second, "chained run is not deterministic");
    assert_eq!(first.sum.to_u32(), second.sum.to_u32());
    assert_eq!(first.product.to_u32(), second.product.to_u32());
}
