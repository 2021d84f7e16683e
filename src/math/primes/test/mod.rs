//! Tests for the sieve implementations.

#[cfg(test)]
mod tests {
    use crate::math::primes::code::*;

    #[test]
    fn test_primes_up_to_30() {
        let expected = vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        for variant in available_variants() {
            let flags = (variant.function)(30);
            assert_eq!(flags.len(), 31);
            assert_eq!(primes_from_flags(&flags), expected, "{}", variant.name);
        }
    }

    #[test]
    fn test_variants_agree() {
        for n in 2..=600 {
            let reference = sieve_unmarked_multiples(n);
            for variant in available_variants() {
                assert_eq!((variant.function)(n), reference, "{} at n = {}", variant.name, n);
            }
        }
    }

    #[test]
    fn test_zero_and_one_never_prime() {
        for n in [0, 1, 2, 10] {
            for variant in available_variants() {
                let flags = (variant.function)(n);
                assert_eq!(flags.len(), n + 1);
                assert!(!flags[0]);
                if n >= 1 {
                    assert!(!flags[1]);
                }
            }
        }
    }

    #[test]
    fn test_prime_count_to_1000() {
        for variant in available_variants() {
            let count = primes_from_flags(&(variant.function)(1000)).len();
            assert_eq!(count, 168, "{}", variant.name);
        }
    }

    #[test]
    fn test_upper_bound_inclusive() {
        for variant in available_variants() {
            assert!((variant.function)(997)[997], "{}", variant.name);
            assert!(!(variant.function)(1000)[1000], "{}", variant.name);
        }
    }
}
