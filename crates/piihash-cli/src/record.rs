//! # Record Subcommand
//!
//! Builds one submission record from per-field flags and prints it as
//! JSON. Exits with [`EXIT_RECORD_DISCARDED`] when no field survives.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use piihash_core::{Encoding, HashedRecord, RawRecord};

use crate::config::CliConfig;

/// Exit code for a record in which every field was rejected.
pub const EXIT_RECORD_DISCARDED: u8 = 2;

/// Arguments for `piihash record`.
#[derive(Args, Debug, Default)]
pub struct RecordArgs {
    /// Email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Phone number.
    #[arg(long)]
    pub phone_number: Option<String>,

    /// Given (first) name.
    #[arg(long)]
    pub given_name: Option<String>,

    /// Family (last) name.
    #[arg(long)]
    pub family_name: Option<String>,

    /// Two-letter region code, sent unhashed.
    #[arg(long)]
    pub region_code: Option<String>,

    /// Postal code, sent unhashed.
    #[arg(long)]
    pub postal_code: Option<String>,

    /// Output encoding for hashed fields (hex or base64).
    #[arg(long, short)]
    pub encoding: Option<Encoding>,
}

impl RecordArgs {
    fn to_raw(&self) -> RawRecord {
        RawRecord {
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            given_name: self.given_name.clone(),
            family_name: self.family_name.clone(),
            region_code: self.region_code.clone(),
            postal_code: self.postal_code.clone(),
        }
    }
}

/// Print the hashed record as pretty JSON.
pub fn run_record(args: &RecordArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let encoding = config.encoding(args.encoding);
    match HashedRecord::from_raw(&args.to_raw(), encoding) {
        Some(record) => {
            for kind in &record.skipped {
                tracing::warn!(field = %kind, "field rejected and left out of record");
            }
            serde_json::to_writer_pretty(&mut *out, &record)?;
            writeln!(out)?;
            Ok(0)
        }
        None => {
            tracing::warn!("record discarded: no field could be normalized");
            Ok(EXIT_RECORD_DISCARDED)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_json_record() {
        let args = RecordArgs {
            email: Some("alexz@example.com".into()),
            region_code: Some("us".into()),
            ..RecordArgs::default()
        };
        let mut out = Vec::new();
        assert_eq!(run_record(&args, &CliConfig::default(), &mut out).unwrap(), 0);

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["encoding"], "hex");
        assert_eq!(
            json["hashed_email"],
            "509e933019bb285a134a9334b8bb679dff79d0ce023d529af4bd744d47b4fd8a"
        );
        assert_eq!(json["region_code"], "US");
        assert!(json.get("postal_code").is_none());
    }

    #[test]
    fn discarded_record_exit_code() {
        let args = RecordArgs {
            email: Some("nope".into()),
            ..RecordArgs::default()
        };
        let mut out = Vec::new();
        assert_eq!(
            run_record(&args, &CliConfig::default(), &mut out).unwrap(),
            EXIT_RECORD_DISCARDED
        );
        assert!(out.is_empty());
    }
}
