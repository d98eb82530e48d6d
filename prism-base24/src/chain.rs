use crate::Base24Number;

/// Final operands of a chained add/multiply run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOutcome {
    pub sum: Base24Number,
    pub product: Base24Number,
}

/// Benchmark feedback loop: every iteration computes `a + b` and `a * b`
/// from the previous pair, then feeds them back in as the next `a` and `b`.
///
/// With zero iterations the operands come back unchanged.
pub fn chain(a: Base24Number, b: Base24Number, iterations: usize) -> ChainOutcome {
    let mut sum = a;
    let mut product = b;

    for _ in 0..iterations {
        let next_sum = sum.add(&product);
        let next_product = sum.multiply(&product);
        sum = next_sum;
        product = next_product;
    }

    ChainOutcome { sum, product }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_iteration() {
        let out = chain(Base24Number::from_u32(42), Base24Number::from_u32(24), 1);
        assert_eq!(out.sum.to_u32(), 66);
        assert_eq!(out.product.to_u32(), 1008);
    }

    #[test]
    fn test_feedback() {
        let out = chain(Base24Number::from_u32(42), Base24Number::from_u32(24), 2);
        assert_eq!(out.sum.to_u32(), 66 + 1008);
        assert_eq!(out.product.to_u32(), 66 * 1008);
    }

    #[test]
    fn test_zero_iterations() {
        let a = Base24Number::from_u32(7);
        let b = Base24Number::from_u32(9);
        let out = chain(a, b, 0);
        assert_eq!(out.sum, a);
        assert_eq!(out.product, b);
    }
}
