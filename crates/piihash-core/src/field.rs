//! # Field Kinds
//!
//! The closed set of personal-identifier fields this crate understands.
//! One enum, exhaustive `match` everywhere: adding a field forces every
//! dispatch site to handle it.

use serde::{Deserialize, Serialize};

use crate::error::PiiError;

/// A personal-identifier field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Email address.
    Email,
    /// Telephone number.
    PhoneNumber,
    /// First name.
    GivenName,
    /// Last name.
    FamilyName,
    /// Two-letter ISO 3166-1 region code.
    RegionCode,
    /// Postal or ZIP code.
    PostalCode,
}

impl FieldKind {
    /// All field kinds, in record order.
    pub const ALL: [FieldKind; 6] = [
        Self::Email,
        Self::PhoneNumber,
        Self::GivenName,
        Self::FamilyName,
        Self::RegionCode,
        Self::PostalCode,
    ];

    /// The snake_case field name. Also used as the error subject.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::PhoneNumber => "phone_number",
            Self::GivenName => "given_name",
            Self::FamilyName => "family_name",
            Self::RegionCode => "region_code",
            Self::PostalCode => "postal_code",
        }
    }

    /// Whether the field is hashed before submission.
    ///
    /// Region and postal codes are matched in clear text, so they are
    /// normalized but never digested.
    pub fn is_hashed(&self) -> bool {
        match self {
            Self::Email | Self::PhoneNumber | Self::GivenName | Self::FamilyName => true,
            Self::RegionCode | Self::PostalCode => false,
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = PiiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or(PiiError::invalid("field kind", "unknown field name"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for kind in FieldKind::ALL {
            assert_eq!(kind.as_str().parse::<FieldKind>().unwrap(), kind);
        }
    }

    #[test]
    fn from_str_accepts_kebab_and_case() {
        assert_eq!("Phone-Number".parse::<FieldKind>().unwrap(), FieldKind::PhoneNumber);
        assert_eq!(" EMAIL ".parse::<FieldKind>().unwrap(), FieldKind::Email);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "ssn".parse::<FieldKind>().unwrap_err();
        assert!(err.is_invalid_format());
    }

    #[test]
    fn hashed_fields() {
        let hashed: Vec<_> = FieldKind::ALL.into_iter().filter(FieldKind::is_hashed).collect();
        assert_eq!(
            hashed,
            vec![
                FieldKind::Email,
                FieldKind::PhoneNumber,
                FieldKind::GivenName,
                FieldKind::FamilyName
            ]
        );
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&FieldKind::FamilyName).unwrap();
        assert_eq!(json, "\"family_name\"");
        let back: FieldKind = serde_json::from_str("\"region_code\"").unwrap();
        assert_eq!(back, FieldKind::RegionCode);
    }
}
