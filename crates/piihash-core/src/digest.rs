//! # SHA-256 Digest
//!
//! Hashes the UTF-8 bytes of a normalized value with SHA-256.
//!
//! ## Concurrency
//!
//! Each call creates its own hasher and drops it on return. There is no
//! shared hasher state, so digests may be computed from any number of
//! threads at once.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::encoding::{base64_encode, hex_encode, Encoding};
use crate::error::{PiiError, Result};
use crate::input::{ByteInput, FieldInput};

/// Length of a SHA-256 digest in bytes.
pub const SHA256_LEN: usize = 32;

/// A raw 32-byte SHA-256 digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sha256Digest([u8; SHA256_LEN]);

impl Sha256Digest {
    /// Wrap raw digest bytes.
    pub fn from_bytes(bytes: [u8; SHA256_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; SHA256_LEN] {
        &self.0
    }

    /// Render the digest as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Render the digest as standard padded base64.
    pub fn to_base64(&self) -> String {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.encode(self.0)
    }

    /// Render the digest with the selected encoding.
    pub fn encode(&self, encoding: Encoding) -> String {
        match encoding {
            Encoding::Hex => self.to_hex(),
            Encoding::Base64 => self.to_base64(),
        }
    }
}

impl ByteInput for Sha256Digest {
    fn bytes(&self) -> Option<&[u8]> {
        Some(&self.0)
    }
}

impl AsRef<[u8]> for Sha256Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the SHA-256 digest of a string's UTF-8 bytes.
///
/// # Errors
///
/// [`PiiError::NullInput`] when absent; [`PiiError::InvalidFormat`] when
/// the string is empty or only whitespace.
pub fn digest(input: impl FieldInput) -> Result<Sha256Digest> {
    const SUBJECT: &str = "digest input";
    let text = input.value().ok_or(PiiError::null(SUBJECT))?;
    if text.trim().is_empty() {
        return Err(PiiError::invalid(SUBJECT, "text is empty or whitespace"));
    }
    Ok(Sha256Digest(Sha256::digest(text.as_bytes()).into()))
}

/// Digest a string and return the lowercase hex rendering.
pub fn digest_hex(input: impl FieldInput) -> Result<String> {
    hex_encode(digest(input)?)
}

/// Digest a string and return the base64 rendering.
pub fn digest_base64(input: impl FieldInput) -> Result<String> {
    base64_encode(digest(input)?)
}
