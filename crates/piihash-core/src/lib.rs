//! # piihash-core — Normalization and Hashing of Personal Identifiers
//!
//! Prepares personally identifiable information for hashed-match data
//! ingestion. The remote matcher compares SHA-256 digests, so the same
//! person must always produce the same bytes: `" Alex@Example.com"` and
//! `"alex@example.com"` have to hash identically.
//!
//! ## Layers
//!
//! 1. **Field normalization** ([`normalize`]) — per-field canonicalization
//!    rules for email, phone number, given name, family name, region code,
//!    and postal code.
//! 2. **Hash and encode** ([`digest`], [`encoding`]) — SHA-256 over the
//!    UTF-8 bytes of the normalized value, rendered as hex or base64.
//! 3. **Composition** ([`process`], [`record`]) — normalize, hash, and
//!    encode in one call, per field or per record.
//!
//! ## Crate Policy
//!
//! - Every operation is pure and synchronous. No I/O, no shared state.
//! - Absent input (`None`) and malformed input are distinct errors.
//! - Errors and log events name the field, never the value.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod encoding;
pub mod error;
pub mod field;
pub mod input;
pub mod normalize;
pub mod process;
pub mod record;

// Re-export primary types for ergonomic imports.
pub use digest::{digest, digest_base64, digest_hex, Sha256Digest, SHA256_LEN};
pub use encoding::{base64_decode, base64_encode, hex_decode, hex_encode, Encoding};
pub use error::{PiiError, Result};
pub use field::FieldKind;
pub use input::{ByteInput, FieldInput};
pub use normalize::{
    normalize, normalize_email, normalize_family_name, normalize_given_name, normalize_phone,
    normalize_postal_code, normalize_region_code,
};
pub use process::{
    process, process_email, process_family_name, process_given_name, process_phone,
    process_postal_code, process_region_code,
};
pub use record::{HashedRecord, RawRecord};
