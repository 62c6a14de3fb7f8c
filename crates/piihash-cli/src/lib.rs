//! # piihash-cli — Command-Line Front End
//!
//! Thin wrapper over `piihash-core` for ad hoc checks and line-oriented
//! batch jobs.
//!
//! ## Subcommands
//!
//! - `piihash normalize <FIELD> <VALUE>` — print the normalized value.
//! - `piihash hash <FIELD> <VALUE>` — normalize, SHA-256, and encode.
//! - `piihash digest <TEXT>` — SHA-256 and encode a string verbatim.
//! - `piihash batch <FIELD> [--input PATH]` — one value per line.
//! - `piihash record --email .. --region-code ..` — one JSON record.
//!
//! ```bash
//! piihash hash email " AlexZ@Example.com" --encoding base64
//! piihash batch phone_number --input phones.txt --strict
//! ```
//!
//! ## Crate Policy
//!
//! - Handlers write to a caller-supplied writer and return an exit code.
//! - stdout carries results only; logs go to stderr.
//! - Raw values are never logged.

pub mod batch;
pub mod config;
pub mod normalize;
pub mod record;

pub use config::CliConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_modules_are_accessible() {
        let _ = std::any::type_name::<batch::BatchArgs>();
        let _ = std::any::type_name::<normalize::NormalizeArgs>();
        let _ = std::any::type_name::<normalize::HashArgs>();
        let _ = std::any::type_name::<normalize::DigestArgs>();
        let _ = std::any::type_name::<record::RecordArgs>();
    }
}
