//! Tests for the Fibonacci variants.

#[cfg(test)]
mod tests {
    use crate::math::fibonacci::code::*;

    const KNOWN: [(u32, u128); 8] = [
        (0, 0),
        (1, 1),
        (2, 1),
        (10, 55),
        (20, 6765),
        (50, 12_586_269_025),
        (80, 23_416_728_348_467_685),
        (186, 332_825_110_087_067_562_321_196_029_789_634_457_848),
    ];

    #[test]
    fn test_exact_variants_known_values() {
        for variant in available_variants() {
            if FLOAT_VARIANTS.contains(&variant.name) {
                continue;
            }
            for (n, expected) in KNOWN {
                assert_eq!((variant.function)(n), expected, "{} at n = {}", variant.name, n);
            }
        }
    }

    #[test]
    fn test_float_variants_small_values() {
        for variant in available_variants() {
            if !FLOAT_VARIANTS.contains(&variant.name) {
                continue;
            }
            for (n, expected) in KNOWN.iter().copied().filter(|(n, _)| *n <= 50) {
                assert_eq!((variant.function)(n), expected, "{} at n = {}", variant.name, n);
            }
        }
    }

    #[test]
    fn test_all_variants_agree_up_to_float_limit() {
        let variants = available_variants();
        for n in 0..=crate::config::FIBONACCI_FLOAT_EXACT_LIMIT {
            let expected = fibonacci_iterative(n);
            for variant in &variants {
                assert_eq!((variant.function)(n), expected, "{} at n = {}", variant.name, n);
            }
        }
    }

    #[test]
    fn test_closures_reject_oversized_index() {
        assert!(crate::math::fibonacci::bench::variant_closures(187).is_err());
        assert_eq!(crate::math::fibonacci::bench::variant_closures(10).unwrap().len(), 6);
    }
}
