//! CNPJ identifier normalization and validation.
//!
//! # Data Flow
//! ```text
//! raw user input ("19.131.243/0001-97")
//!     → unmask() (digits only: "19131243000197")
//!     → is_valid() (length + modulus-11 check digits)
//!     → Cnpj (canonical, safe to hand to the store)
//! ```
//!
//! # Design Decisions
//! - Validation is a result, never an error path: `is_valid` returns bool
//! - `Cnpj` can only be built through `FromStr`, so holding one means it is valid
//! - The original input is kept on failure so responses can echo it back

pub mod checksum;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use checksum::CNPJ_LENGTH;

/// Strip every non-digit character from `raw`.
pub fn unmask(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Returns true if `canonical` has exactly 14 digits and valid check digits.
pub fn is_valid(canonical: &str) -> bool {
    checksum::verify(canonical)
}

/// Render a canonical identifier in its punctuated form (`NN.NNN.NNN/NNNN-NN`).
///
/// Returns `None` if `canonical` is not a valid identifier.
pub fn mask(canonical: &str) -> Option<String> {
    is_valid(canonical).then(|| punctuate(canonical))
}

/// Caller guarantees 14 ASCII digits.
fn punctuate(digits: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14],
    )
}

/// Input that failed unmasking or checksum validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid CNPJ: {input}")]
pub struct InvalidCnpj {
    /// The value exactly as the user supplied it.
    pub input: String,
}

/// A validated CNPJ in canonical (digits only) form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Canonical digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Punctuated form for display.
    pub fn masked(&self) -> String {
        punctuate(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = InvalidCnpj;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let canonical = unmask(raw);
        if is_valid(&canonical) {
            Ok(Cnpj(canonical))
        } else {
            Err(InvalidCnpj {
                input: raw.to_string(),
            })
        }
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cnpj {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmask_strips_punctuation() {
        assert_eq!(unmask("19.131.243/0001-97"), "19131243000197");
        assert_eq!(unmask(" 19 131 243 0001 97 "), "19131243000197");
        assert_eq!(unmask("foobar"), "");
        assert_eq!(unmask(""), "");
    }

    #[test]
    fn test_unmask_ignores_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of the scheme
        assert_eq!(unmask("١٢٣"), "");
    }

    #[test]
    fn test_is_valid_requires_canonical_form() {
        assert!(is_valid("19131243000197"));
        assert!(!is_valid("19.131.243/0001-97"));
        assert!(!is_valid("19131243000198"));
    }

    #[test]
    fn test_mask() {
        assert_eq!(
            mask("19131243000197").as_deref(),
            Some("19.131.243/0001-97")
        );
        assert_eq!(mask("19131243000198"), None);
        assert_eq!(mask("123"), None);
    }

    #[test]
    fn test_parse_masked_and_unmasked() {
        let masked: Cnpj = "19.131.243/0001-97".parse().unwrap();
        let unmasked: Cnpj = "19131243000197".parse().unwrap();
        assert_eq!(masked, unmasked);
        assert_eq!(masked.as_str(), "19131243000197");
        assert_eq!(masked.masked(), "19.131.243/0001-97");
        assert_eq!(masked.to_string(), "19131243000197");
    }

    #[test]
    fn test_parse_keeps_original_input_on_failure() {
        let err = "foobar".parse::<Cnpj>().unwrap_err();
        assert_eq!(err.input, "foobar");

        let err = "19.131.243/0001-98".parse::<Cnpj>().unwrap_err();
        assert_eq!(err.input, "19.131.243/0001-98");
    }
}
