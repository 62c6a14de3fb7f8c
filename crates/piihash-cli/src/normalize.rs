//! # Normalize, Hash, and Digest Subcommands
//!
//! Single-value operations: print the normalized value, the encoded
//! digest of the normalized value, or the encoded digest of a string
//! taken verbatim.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use piihash_core::{digest, normalize, process, Encoding, FieldKind};

use crate::config::CliConfig;

/// Arguments for `piihash normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Field type: email, phone_number, given_name, family_name, region_code, postal_code.
    pub field: FieldKind,

    /// Raw value to normalize.
    pub value: String,
}

/// Arguments for `piihash hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Field type: email, phone_number, given_name, family_name, region_code, postal_code.
    pub field: FieldKind,

    /// Raw value to normalize and hash.
    pub value: String,

    /// Output encoding (hex or base64).
    #[arg(long, short)]
    pub encoding: Option<Encoding>,
}

/// Arguments for `piihash digest`.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// Text to hash as-is, without normalization.
    pub text: String,

    /// Output encoding (hex or base64).
    #[arg(long, short)]
    pub encoding: Option<Encoding>,
}

/// Print the normalized value.
pub fn run_normalize(args: &NormalizeArgs, out: &mut impl Write) -> Result<u8> {
    let normalized = normalize(args.field, &args.value)?;
    writeln!(out, "{normalized}")?;
    Ok(0)
}

/// Print the encoded digest of the normalized value.
pub fn run_hash(args: &HashArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let encoding = config.encoding(args.encoding);
    tracing::debug!(field = %args.field, %encoding, "hashing value");
    let encoded = process(args.field, &args.value, encoding)?;
    writeln!(out, "{encoded}")?;
    Ok(0)
}

/// Print the encoded digest of the text, verbatim.
pub fn run_digest(args: &DigestArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let encoding = config.encoding(args.encoding);
    let encoded = digest(&args.text)?.encode(encoding);
    writeln!(out, "{encoded}")?;
    Ok(0)
}
