//! Tests for the sorting implementations.

#[cfg(test)]
mod tests {
    use crate::generators::random_integer_array;
    use crate::sorting::sort::code::*;
    use crate::utils::lab_rng;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    fn is_permutation(a: &[i64], b: &[i64]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn test_all_variants_sort_random_arrays() {
        let mut rng = lab_rng(Some(7));
        for size in [0, 1, 2, 17, 500, 2000] {
            let input = random_integer_array(&mut rng, size, -10_000, 10_000);
            for variant in available_variants() {
                let sorted = (variant.function)(&input);
                assert!(is_sorted(&sorted), "{} output not sorted", variant.name);
                assert!(is_permutation(&input, &sorted), "{} lost elements", variant.name);
            }
        }
    }

    #[test]
    fn test_sorting_sorted_output_is_noop() {
        let mut rng = lab_rng(Some(8));
        let input = random_integer_array(&mut rng, 300, -100, 100);
        for variant in available_variants() {
            let once = (variant.function)(&input);
            let twice = (variant.function)(&once);
            assert_eq!(once, twice, "{}", variant.name);
        }
    }

    #[test]
    fn test_duplicates_and_negatives() {
        let input = [0, -3, 5, -3, 5, 5, 0, -10_000, 10_000];
        let expected = vec![-10_000, -3, -3, 0, 0, 5, 5, 5, 10_000];
        for variant in available_variants() {
            assert_eq!((variant.function)(&input), expected, "{}", variant.name);
        }
    }

    #[test]
    fn test_empty_and_single() {
        for variant in available_variants() {
            assert!((variant.function)(&[]).is_empty());
            assert_eq!((variant.function)(&[42]), vec![42]);
        }
    }

    #[test]
    fn test_reverse_sorted() {
        let input: Vec<i64> = (0..100).rev().collect();
        let expected: Vec<i64> = (0..100).collect();
        for variant in available_variants() {
            assert_eq!((variant.function)(&input), expected, "{}", variant.name);
        }
    }

    #[test]
    fn test_quick_sort_seeded_pivot_is_deterministic() {
        let input = [9, 1, 8, 2, 7, 3, 6, 4, 5];
        let a = quick_sort_with_rng(&input, &mut lab_rng(Some(1)));
        let b = quick_sort_with_rng(&input, &mut lab_rng(Some(99)));
        assert_eq!(a, b);
        assert_eq!(a, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_counting_sort_at_key_range_limit() {
        let max = MAX_KEY_RANGE as i64 - 1;
        assert_eq!(counting_sort(&[max, 0, 5]), vec![0, 5, max]);
    }

    #[test]
    #[should_panic(expected = "counting sort limit")]
    fn test_counting_sort_rejects_wide_key_range() {
        counting_sort(&[0, MAX_KEY_RANGE as i64]);
    }

    #[test]
    #[should_panic(expected = "counting sort limit")]
    fn test_counting_sort_rejects_overflowing_key_range() {
        counting_sort(&[i64::MIN, i64::MAX]);
    }
}
