//! Tests for the pi digit implementations.

#[cfg(test)]
mod tests {
    use crate::error::LabError;
    use crate::math::pi_digits::code::*;

    const PI_100: &str = "3141592653589793238462643383279502884197169399375105820974944592307816406286208998628034825342117067";

    fn known_digit(index: usize) -> u8 {
        PI_100.as_bytes()[index] - b'0'
    }

    #[test]
    fn test_leading_digits() {
        for variant in available_variants() {
            assert_eq!((variant.function)(0).unwrap(), 3, "{}", variant.name);
            assert_eq!((variant.function)(1).unwrap(), 1, "{}", variant.name);
            assert_eq!((variant.function)(2).unwrap(), 4, "{}", variant.name);
        }
    }

    #[test]
    fn test_first_hundred_digits() {
        for variant in available_variants() {
            for index in 0..PI_100.len() {
                assert_eq!(
                    (variant.function)(index as i64).unwrap(),
                    known_digit(index),
                    "{} at index {}",
                    variant.name,
                    index
                );
            }
        }
    }

    #[test]
    fn test_spigot_sequence_matches_known_prefix() {
        let digits: String = pi_digits_spigot(110).iter().map(|d| char::from(b'0' + d)).collect();
        assert_eq!(digits.len(), 110);
        assert!(digits.starts_with(PI_100));
    }

    #[test]
    fn test_variants_agree_past_known_prefix() {
        for index in [150, 250, 300] {
            let bbp = pi_digit_bbp(index).unwrap();
            assert_eq!(pi_digit_legendre(index).unwrap(), bbp, "legendre at {}", index);
            assert_eq!(pi_digit_spigot(index).unwrap(), bbp, "spigot at {}", index);
        }
    }

    #[test]
    fn test_fixed_point_prefix() {
        assert!(pi_fixed_bbp(20).to_string().starts_with("31415926535897932"));
        assert!(pi_fixed_legendre(20).to_string().starts_with("31415926535897932"));
    }

    #[test]
    fn test_negative_index_rejected() {
        for variant in available_variants() {
            let err = (variant.function)(-1).unwrap_err();
            assert!(matches!(err, LabError::NegativeDigitIndex { index: -1 }), "{}", variant.name);
        }
    }

    #[test]
    fn test_spigot_empty() {
        assert!(pi_digits_spigot(0).is_empty());
    }

    #[test]
    fn test_spigot_length_across_run_of_nines() {
        // indices 762..=767 are the six nines of the Feynman point
        for count in 763..=768 {
            let digits = pi_digits_spigot(count);
            assert_eq!(digits.len(), count, "count {}", count);
            assert!(digits[762..].iter().all(|&d| d == 9), "count {}", count);
        }
    }

    #[test]
    fn test_spigot_digits_around_run_of_nines() {
        let digits = pi_digits_spigot(770);
        assert_eq!(&digits[755..770], &[0, 7, 2, 1, 1, 3, 4, 9, 9, 9, 9, 9, 9, 8, 3]);
        assert_eq!(pi_digit_spigot(768).unwrap(), 8);
        assert_eq!(pi_digit_bbp(767).unwrap(), 9);
    }
}
