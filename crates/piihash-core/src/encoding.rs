//! # Binary-to-Text Encoding
//!
//! Renders digests as hexadecimal or standard padded base64 (RFC 4648),
//! and decodes them back.
//!
//! Hex output is lowercase; hex comparisons and decoding are
//! case-insensitive. Base64 is case-sensitive and must match exactly.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{PiiError, Result};
use crate::input::{ByteInput, FieldInput};

/// Text encoding applied to a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Two hexadecimal characters per byte, most-significant nibble first.
    #[default]
    Hex,
    /// Standard base64 alphabet with `=` padding.
    Base64,
}

impl Encoding {
    /// Returns the encoding identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Base64 => "base64",
        }
    }

    /// Encode `bytes` with this encoding.
    pub fn encode(&self, bytes: impl ByteInput) -> Result<String> {
        match self {
            Self::Hex => hex_encode(bytes),
            Self::Base64 => base64_encode(bytes),
        }
    }

    /// Decode `text` produced by [`Encoding::encode`].
    pub fn decode(&self, text: impl FieldInput) -> Result<Vec<u8>> {
        match self {
            Self::Hex => hex_decode(text),
            Self::Base64 => base64_decode(text),
        }
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Encoding {
    type Err = PiiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err(PiiError::invalid("encoding", "expected 'hex' or 'base64'")),
        }
    }
}

fn non_empty_bytes<'a>(subject: &'static str, bytes: &'a impl ByteInput) -> Result<&'a [u8]> {
    let bytes = bytes.bytes().ok_or(PiiError::null(subject))?;
    if bytes.is_empty() {
        return Err(PiiError::invalid(subject, "byte sequence is empty"));
    }
    Ok(bytes)
}

fn non_empty_text<'a>(subject: &'static str, text: &'a impl FieldInput) -> Result<&'a str> {
    let text = text.value().ok_or(PiiError::null(subject))?;
    if text.is_empty() {
        return Err(PiiError::invalid(subject, "text is empty"));
    }
    Ok(text)
}

/// Encode a non-empty byte sequence as lowercase hexadecimal.
pub fn hex_encode(bytes: impl ByteInput) -> Result<String> {
    Ok(hex::encode(non_empty_bytes("hex input", &bytes)?))
}

/// Encode a non-empty byte sequence as standard padded base64.
pub fn base64_encode(bytes: impl ByteInput) -> Result<String> {
    Ok(STANDARD.encode(non_empty_bytes("base64 input", &bytes)?))
}

/// Decode hexadecimal text in either case.
pub fn hex_decode(text: impl FieldInput) -> Result<Vec<u8>> {
    const SUBJECT: &str = "hex text";
    let text = non_empty_text(SUBJECT, &text)?;
    hex::decode(text).map_err(|_| PiiError::invalid(SUBJECT, "not valid hexadecimal"))
}

/// Decode standard padded base64 text.
pub fn base64_decode(text: impl FieldInput) -> Result<Vec<u8>> {
    const SUBJECT: &str = "base64 text";
    let text = non_empty_text(SUBJECT, &text)?;
    STANDARD
        .decode(text)
        .map_err(|_| PiiError::invalid(SUBJECT, "not valid padded base64"))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn hex_round_trip_any_case(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
            let text = hex_encode(&bytes).unwrap();
            prop_assert_eq!(text.len(), bytes.len() * 2);
            prop_assert_eq!(hex_decode(&text).unwrap(), bytes.clone());
            prop_assert_eq!(hex_decode(text.to_uppercase()).unwrap(), bytes);
        }

        #[test]
        fn base64_round_trip(bytes in prop::collection::vec(any::<u8>(), 1..64)) {
            let text = base64_encode(&bytes).unwrap();
            prop_assert_eq!(text.len() % 4, 0);
            prop_assert_eq!(base64_decode(&text).unwrap(), bytes);
        }
    }
}
