//! # Batch Subcommand
//!
//! Processes one raw value per line from a file or stdin. Blank lines
//! and `#` comment lines are ignored. Rejected lines are skipped with a
//! warning that names the line number and field, never the value, unless
//! `--strict` is set.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use piihash_core::{normalize, process, Encoding, FieldKind};

use crate::config::CliConfig;

/// Arguments for `piihash batch`.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Field type of every line.
    pub field: FieldKind,

    /// Input file; reads stdin when omitted.
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output encoding for hashed fields (hex or base64).
    #[arg(long, short)]
    pub encoding: Option<Encoding>,

    /// Stop at the first rejected line instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

/// Line counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub skipped: usize,
}

/// Run the batch subcommand against the configured input.
pub fn run_batch(args: &BatchArgs, config: &CliConfig, out: &mut impl Write) -> Result<u8> {
    let encoding = config.encoding(args.encoding);
    let strict = args.strict || config.strict;

    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            process_lines(args.field, encoding, strict, BufReader::new(file), out)?
        }
        None => {
            let stdin = std::io::stdin();
            process_lines(args.field, encoding, strict, stdin.lock(), out)?
        }
    };

    tracing::info!(
        field = %args.field,
        processed = summary.processed,
        skipped = summary.skipped,
        "batch complete"
    );
    Ok(0)
}

/// Process every value line from `reader`, writing one result per line.
///
/// Hashed fields are normalized, hashed, and encoded; region and postal
/// codes are only normalized.
pub fn process_lines(
    field: FieldKind,
    encoding: Encoding,
    strict: bool,
    reader: impl BufRead,
    out: &mut impl Write,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("failed to read line {line_no}"))?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let result = if field.is_hashed() {
            process(field, &line, encoding)
        } else {
            normalize(field, &line)
        };

        match result {
            Ok(output) => {
                writeln!(out, "{output}")?;
                summary.processed += 1;
            }
            Err(err) if strict => bail!("line {line_no}: {err}"),
            Err(err) => {
                tracing::warn!(line = line_no, field = %field, error = %err, "skipping line");
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
