//! # Normalize, Hash, Encode
//!
//! The composed pipeline: normalize a raw value for its field kind,
//! SHA-256 the normalized form, and render the digest in the requested
//! encoding. The first failing stage's error is returned unchanged.

use crate::digest::digest;
use crate::encoding::Encoding;
use crate::error::Result;
use crate::field::FieldKind;
use crate::input::FieldInput;
use crate::normalize::{
    normalize, normalize_email, normalize_family_name, normalize_given_name, normalize_phone,
    normalize_postal_code, normalize_region_code,
};

fn hash_normalized(normalized: String, encoding: Encoding) -> Result<String> {
    Ok(digest(normalized)?.encode(encoding))
}

/// Normalize, hash, and encode an email address.
pub fn process_email(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_email(value)?, encoding)
}

/// Normalize, hash, and encode a phone number.
pub fn process_phone(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_phone(value)?, encoding)
}

/// Normalize, hash, and encode a given name.
pub fn process_given_name(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_given_name(value)?, encoding)
}

/// Normalize, hash, and encode a family name.
pub fn process_family_name(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_family_name(value)?, encoding)
}

/// Normalize, hash, and encode a region code.
///
/// Region codes are normally sent in clear text (see
/// [`FieldKind::is_hashed`]); this exists for callers that hash every field.
pub fn process_region_code(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_region_code(value)?, encoding)
}

/// Normalize, hash, and encode a postal code.
pub fn process_postal_code(value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize_postal_code(value)?, encoding)
}

/// Normalize `value` according to `kind`, then hash and encode it.
pub fn process(kind: FieldKind, value: impl FieldInput, encoding: Encoding) -> Result<String> {
    hash_normalized(normalize(kind, value)?, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALEXZ_HEX: &str = "509e933019bb285a134a9334b8bb679dff79d0ce023d529af4bd744d47b4fd8a";

    #[test]
    fn email_hex_known_value() {
        assert_eq!(process_email("alexz@example.com", Encoding::Hex).unwrap(), ALEXZ_HEX);
    }

    #[test]
    fn email_normalized_before_hashing() {
        assert_eq!(
            process_email("  AlexZ@Example.COM ", Encoding::Hex).unwrap(),
            ALEXZ_HEX
        );
    }

    #[test]
    fn email_base64_known_value() {
        assert_eq!(
            process_email("alexz@example.com", Encoding::Base64).unwrap(),
            "UJ6TMBm7KFoTSpM0uLtnnf950M4CPVKa9L10TUe0/Yo="
        );
    }

    #[test]
    fn phone_known_value() {
        assert_eq!(
            process_phone("+1 800-555-0100", Encoding::Hex).unwrap(),
            "fb4f73a6ec5fdb7077d564cdd22c3554b43ce49168550c3b12c547b78c517b30"
        );
    }

    #[test]
    fn names_known_values() {
        assert_eq!(
            process_given_name("Mr. Alex", Encoding::Hex).unwrap(),
            "4135aa9dc1b842a653dea846903ddb95bfb8c5a10c504a7fa16e10bc31d1fdf0"
        );
        assert_eq!(
            process_family_name("Quinn, Jr., DDS", Encoding::Base64).unwrap(),
            "xRLKDFwecb4Z8zVoIeVnMrX7OsiUsNvFhG0LaSAQb7M="
        );
    }

    #[test]
    fn region_code_hashed_after_uppercase() {
        assert_eq!(
            process_region_code(" us ", Encoding::Hex).unwrap(),
            "9b202ecbc6d45c6d8901d989a918878397a3eb9d00e8f48022fc051b19d21a1d"
        );
    }

    #[test]
    fn normalization_errors_propagate_unchanged() {
        let direct = crate::normalize::normalize_region_code("usa").unwrap_err();
        let composed = process_region_code("usa", Encoding::Hex).unwrap_err();
        assert_eq!(direct, composed);
        assert!(process_postal_code(None::<&str>, Encoding::Base64)
            .unwrap_err()
            .is_null_input());
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        for encoding in [Encoding::Hex, Encoding::Base64] {
            assert_eq!(
                process(FieldKind::Email, "alexz@example.com", encoding).unwrap(),
                process_email("alexz@example.com", encoding).unwrap()
            );
            assert_eq!(
                process(FieldKind::PostalCode, " 94045 ", encoding).unwrap(),
                process_postal_code("94045", encoding).unwrap()
            );
        }
    }
}
