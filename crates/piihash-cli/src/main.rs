//! # piihash CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads the optional
//! config file, and dispatches to subcommand handlers.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use piihash_cli::batch::{run_batch, BatchArgs};
use piihash_cli::normalize::{run_digest, run_hash, run_normalize, DigestArgs, HashArgs, NormalizeArgs};
use piihash_cli::record::{run_record, RecordArgs};
use piihash_cli::CliConfig;

/// piihash — normalize and hash personal identifiers for hashed-match ingestion.
#[derive(Parser, Debug)]
#[command(name = "piihash", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the normalized form of a value.
    Normalize(NormalizeArgs),

    /// Normalize a value, then print its encoded SHA-256 digest.
    Hash(HashArgs),

    /// Print the encoded SHA-256 digest of a string, without normalization.
    Digest(DigestArgs),

    /// Process one value per line from a file or stdin.
    Batch(BatchArgs),

    /// Build one submission record and print it as JSON.
    Record(RecordArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<u8> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let code = match cli.command {
        Commands::Normalize(args) => run_normalize(&args, &mut out),
        Commands::Hash(args) => run_hash(&args, &config, &mut out),
        Commands::Digest(args) => run_digest(&args, &config, &mut out),
        Commands::Batch(args) => run_batch(&args, &config, &mut out),
        Commands::Record(args) => run_record(&args, &config, &mut out),
    }?;
    out.flush()?;
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use piihash_core::{Encoding, FieldKind};

    #[test]
    fn cli_parse_normalize() {
        let cli = Cli::try_parse_from(["piihash", "normalize", "email", "A@B.com"]).unwrap();
        if let Commands::Normalize(args) = cli.command {
            assert_eq!(args.field, FieldKind::Email);
            assert_eq!(args.value, "A@B.com");
        } else {
            panic!("expected normalize");
        }
    }

    #[test]
    fn cli_parse_hash_with_encoding() {
        let cli = Cli::try_parse_from([
            "piihash",
            "hash",
            "phone-number",
            "+1 800-555-0100",
            "--encoding",
            "base64",
        ])
        .unwrap();
        if let Commands::Hash(args) = cli.command {
            assert_eq!(args.field, FieldKind::PhoneNumber);
            assert_eq!(args.encoding, Some(Encoding::Base64));
        } else {
            panic!("expected hash");
        }
    }

    #[test]
    fn cli_parse_rejects_unknown_encoding() {
        assert!(Cli::try_parse_from(["piihash", "digest", "abc", "-e", "base32"]).is_err());
    }

    #[test]
    fn cli_parse_rejects_unknown_field() {
        assert!(Cli::try_parse_from(["piihash", "normalize", "ssn", "123"]).is_err());
    }

    #[test]
    fn cli_parse_batch_defaults() {
        let cli = Cli::try_parse_from(["piihash", "batch", "postal_code"]).unwrap();
        if let Commands::Batch(args) = cli.command {
            assert_eq!(args.field, FieldKind::PostalCode);
            assert!(args.input.is_none());
            assert!(args.encoding.is_none());
            assert!(!args.strict);
        } else {
            panic!("expected batch");
        }
    }

    #[test]
    fn cli_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "piihash",
            "record",
            "--email",
            "a@example.com",
            "-vv",
            "--config",
            "piihash.yaml",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("piihash.yaml")));
        if let Commands::Record(args) = cli.command {
            assert_eq!(args.email.as_deref(), Some("a@example.com"));
            assert!(args.phone_number.is_none());
        } else {
            panic!("expected record");
        }
    }
}
