//! Modulus-11 check digit computation.
//!
//! # Algorithm
//! ```text
//! base digits (12)       → weights 5,4,3,2,9,8,7,6,5,4,3,2 → first check digit
//! base + first digit (13) → weights 6,5,4,3,2,9,8,7,6,5,4,3,2 → second check digit
//!
//! check digit = 11 - (weighted sum % 11), or 0 when the remainder is below 2
//! ```

/// Number of digits in a canonical identifier.
pub const CNPJ_LENGTH: usize = 14;

const FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Compute one check digit over `digits` using `weights`.
///
/// Both slices must have the same length.
fn check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Returns true if `canonical` is exactly 14 ASCII digits with valid check digits.
pub fn verify(canonical: &str) -> bool {
    if canonical.len() != CNPJ_LENGTH || !canonical.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = canonical.bytes().map(|b| u32::from(b - b'0')).collect();

    let first = check_digit(&digits[..12], &FIRST_WEIGHTS);
    if first != digits[12] {
        return false;
    }

    let second = check_digit(&digits[..13], &SECOND_WEIGHTS);
    second == digits[13]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_low_remainder_maps_to_zero() {
        // 1*3 + 4*2 = 11, remainder 0
        let digits = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 4];
        assert_eq!(check_digit(&digits, &FIRST_WEIGHTS), 0);
    }

    #[test]
    fn test_known_identifiers() {
        assert!(verify("19131243000197"));
        assert!(verify("00000000000191"));
        assert!(verify("33000167000101"));
    }

    #[test]
    fn test_wrong_check_digits() {
        assert!(!verify("19131243000198"));
        assert!(!verify("19131243000187"));
    }

    #[test]
    fn test_wrong_length_or_characters() {
        assert!(!verify(""));
        assert!(!verify("1913124300019"));
        assert!(!verify("191312430001970"));
        assert!(!verify("1913124300019a"));
        assert!(!verify("19.131.243/0001-97"));
    }
}
