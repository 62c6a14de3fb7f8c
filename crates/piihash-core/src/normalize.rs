//! # Field Normalization
//!
//! Canonicalizes raw personal-identifier values so that the same person
//! always produces the same bytes, and therefore the same digest, no
//! matter how the value was typed into the source system.
//!
//! Every function here is pure: it either returns the complete normalized
//! value or fails with [`PiiError`], never a partial result. Re-normalizing
//! a normalized value returns it unchanged.
//!
//! ## Rules
//!
//! | Field        | Rule                                                            |
//! |--------------|-----------------------------------------------------------------|
//! | email        | trim, no inner whitespace, lowercase, gmail dot removal         |
//! | phone number | keep digits only, prefix `+`                                    |
//! | given name   | trim, lowercase, drop one leading honorific                     |
//! | family name  | trim, lowercase, drop trailing suffixes until none remain       |
//! | region code  | trim, uppercase, exactly two letters `A`-`Z`                    |
//! | postal code  | trim                                                            |

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{PiiError, Result};
use crate::field::FieldKind;
use crate::input::FieldInput;

/// Domains whose mailboxes ignore `.` in the local part.
const DOT_INSENSITIVE_DOMAINS: [&str; 2] = ["gmail.com", "googlemail.com"];

/// Leading honorific followed by whitespace or end of string.
const HONORIFIC_PATTERN: &str = r"^(?:mrs|mr|ms|dr)\.(?:\s|$)";

/// Trailing generational or credential suffix, introduced by a comma or
/// by whitespace, optionally followed by one whitespace character.
const SUFFIX_PATTERN: &str =
    r"(?:,\s*|\s+)(?:jr\.|sr\.|2nd|3rd|ii|iii|iv|v|vi|cpa|dc|dds|vm|jd|md|phd)\s?$";

fn honorific_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(HONORIFIC_PATTERN).expect("honorific pattern is valid"))
}

fn suffix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SUFFIX_PATTERN).expect("suffix pattern is valid"))
}

fn reject(kind: FieldKind, reason: &'static str) -> PiiError {
    tracing::trace!(field = %kind, reason, "field value rejected");
    PiiError::invalid(kind.as_str(), reason)
}

/// Resolve the value, trim it, and require that something is left.
fn trimmed<'a>(kind: FieldKind, value: &'a impl FieldInput) -> Result<&'a str> {
    let raw = value
        .value()
        .ok_or_else(|| PiiError::null(kind.as_str()))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(reject(kind, "value is empty"));
    }
    Ok(trimmed)
}

/// Normalize an email address.
///
/// Lowercases the address and, for `gmail.com` / `googlemail.com`,
/// removes every `.` from the local part.
///
/// # Errors
///
/// [`PiiError::NullInput`] when absent; [`PiiError::InvalidFormat`] when
/// empty, containing inner whitespace, not of the form `local@domain`,
/// or when the local part is only dots.
pub fn normalize_email(value: impl FieldInput) -> Result<String> {
    const KIND: FieldKind = FieldKind::Email;
    let email = trimmed(KIND, &value)?;
    if email.chars().any(char::is_whitespace) {
        return Err(reject(KIND, "contains whitespace"));
    }
    let email = email.to_lowercase();

    let mut parts = email.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
            (local, domain)
        }
        _ => return Err(reject(KIND, "expected exactly one '@' between local part and domain")),
    };

    let local = if DOT_INSENSITIVE_DOMAINS.contains(&domain) {
        local.replace('.', "")
    } else {
        local.to_string()
    };
    if local.is_empty() {
        return Err(reject(KIND, "local part is empty"));
    }

    Ok(format!("{local}@{domain}"))
}

/// Normalize a phone number to `+` followed by its digits.
///
/// Every character that is not an ASCII digit is dropped. Country code
/// and length are not checked.
pub fn normalize_phone(value: impl FieldInput) -> Result<String> {
    const KIND: FieldKind = FieldKind::PhoneNumber;
    let phone = trimmed(KIND, &value)?;
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(reject(KIND, "contains no digits"));
    }
    Ok(format!("+{digits}"))
}

/// Normalize a given (first) name.
///
/// Lowercases the name and strips a single leading honorific
/// (`mr.`, `mrs.`, `ms.`, `dr.`). Only one honorific is removed.
pub fn normalize_given_name(value: impl FieldInput) -> Result<String> {
    const KIND: FieldKind = FieldKind::GivenName;
    let name = trimmed(KIND, &value)?.to_lowercase();
    let stripped = honorific_regex().replace(&name, "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return Err(reject(KIND, "contains only an honorific"));
    }
    Ok(stripped.to_string())
}

/// Normalize a family (last) name.
///
/// Lowercases the name and repeatedly strips trailing suffixes such as
/// `jr.`, `iii` or `phd`, so `"Quinn, Jr., DDS"` becomes `"quinn"`. A
/// suffix must be separated by a comma or whitespace: `"Boardds"` keeps
/// its ending.
pub fn normalize_family_name(value: impl FieldInput) -> Result<String> {
    const KIND: FieldKind = FieldKind::FamilyName;
    let mut name = trimmed(KIND, &value)?.to_lowercase();
    while let Some(found) = suffix_regex().find(&name) {
        name.truncate(found.start());
        name.truncate(name.trim_end().len());
    }
    if name.is_empty() {
        return Err(reject(KIND, "contains only suffixes"));
    }
    Ok(name)
}

/// Normalize a region code to two uppercase ASCII letters.
pub fn normalize_region_code(value: impl FieldInput) -> Result<String> {
    const KIND: FieldKind = FieldKind::RegionCode;
    let code = trimmed(KIND, &value)?.to_ascii_uppercase();
    if code.chars().count() != 2 {
        return Err(reject(KIND, "must be exactly two characters"));
    }
    if !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(reject(KIND, "must contain only letters A-Z"));
    }
    Ok(code)
}

/// Normalize a postal code. Only surrounding whitespace is removed;
/// punctuation such as `-` is kept because formats vary by country.
pub fn normalize_postal_code(value: impl FieldInput) -> Result<String> {
    Ok(trimmed(FieldKind::PostalCode, &value)?.to_string())
}

/// Normalize `value` according to `kind`.
pub fn normalize(kind: FieldKind, value: impl FieldInput) -> Result<String> {
    match kind {
        FieldKind::Email => normalize_email(value),
        FieldKind::PhoneNumber => normalize_phone(value),
        FieldKind::GivenName => normalize_given_name(value),
        FieldKind::FamilyName => normalize_family_name(value),
        FieldKind::RegionCode => normalize_region_code(value),
        FieldKind::PostalCode => normalize_postal_code(value),
    }
}
