//! # Record Hashing
//!
//! Turns one raw customer record into the form an ingestion request
//! carries: identity fields hashed, location fields normalized in clear
//! text.
//!
//! A field that fails normalization is dropped on its own; the rest of
//! the record survives. A record in which no field survives is
//! discarded. Dropped fields are reported by kind only.

use serde::{Deserialize, Serialize};

use crate::encoding::Encoding;
use crate::field::FieldKind;
use crate::normalize::normalize;
use crate::process::process;

/// A customer record as read from a source file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub region_code: Option<String>,
    pub postal_code: Option<String>,
}

impl RawRecord {
    /// The raw value for `kind`, if present.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Email => self.email.as_deref(),
            FieldKind::PhoneNumber => self.phone_number.as_deref(),
            FieldKind::GivenName => self.given_name.as_deref(),
            FieldKind::FamilyName => self.family_name.as_deref(),
            FieldKind::RegionCode => self.region_code.as_deref(),
            FieldKind::PostalCode => self.postal_code.as_deref(),
        }
    }
}

/// A record ready for submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedRecord {
    /// Encoding used for the hashed fields.
    pub encoding: Encoding,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hashed_family_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Fields that were present but rejected.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<FieldKind>,
}

impl HashedRecord {
    /// Build the submission form of `raw`.
    ///
    /// Returns `None` when no field could be kept, either because every
    /// present field was rejected or because the record was empty.
    pub fn from_raw(raw: &RawRecord, encoding: Encoding) -> Option<Self> {
        let mut record = Self {
            encoding,
            ..Self::default()
        };
        let mut kept = 0usize;

        for kind in FieldKind::ALL {
            let Some(value) = raw.get(kind) else {
                continue;
            };
            let result = if kind.is_hashed() {
                process(kind, value, encoding)
            } else {
                normalize(kind, value)
            };
            match result {
                Ok(output) => {
                    *record.slot_mut(kind) = Some(output);
                    kept += 1;
                }
                Err(err) => {
                    tracing::debug!(field = %kind, error = %err, "dropping field from record");
                    record.skipped.push(kind);
                }
            }
        }

        if kept == 0 {
            tracing::debug!(skipped = record.skipped.len(), "discarding record with no usable fields");
            return None;
        }
        Some(record)
    }

    /// The output value for `kind`, if kept.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        match kind {
            FieldKind::Email => self.hashed_email.as_deref(),
            FieldKind::PhoneNumber => self.hashed_phone_number.as_deref(),
            FieldKind::GivenName => self.hashed_given_name.as_deref(),
            FieldKind::FamilyName => self.hashed_family_name.as_deref(),
            FieldKind::RegionCode => self.region_code.as_deref(),
            FieldKind::PostalCode => self.postal_code.as_deref(),
        }
    }

    fn slot_mut(&mut self, kind: FieldKind) -> &mut Option<String> {
        match kind {
            FieldKind::Email => &mut self.hashed_email,
            FieldKind::PhoneNumber => &mut self.hashed_phone_number,
            FieldKind::GivenName => &mut self.hashed_given_name,
            FieldKind::FamilyName => &mut self.hashed_family_name,
            FieldKind::RegionCode => &mut self.region_code,
            FieldKind::PostalCode => &mut self.postal_code,
        }
    }
}
