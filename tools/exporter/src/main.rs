//! CLI tool for exporting offers from a stream of ledger entry changes.
//!
//! Each non-empty input line is one change, encoded as base64 XDR. Offers
//! whose last-modified ledger lies in the requested range are validated and
//! written as JSON lines or CSV.
//!
//! # Usage
//!
//! ```bash
//! # Export ledgers 100..=200 into the default file
//! export_offers --input changes.txt --end-ledger 200 --start-ledger 100
//!
//! # Read from stdin, write CSV to stdout, stop at the first invalid offer
//! cat changes.txt | export_offers -e 200 --stdout --format csv --strict
//! ```

use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{Parser, ValueEnum};
use ledger::prelude::*;
use ledger::transform::select_snapshot;
use tracing::{debug, info, warn};

/// Export offers from ledger entry changes.
///
/// Reads changes from input (file or stdin), keeps offers modified within
/// the ledger range, and writes them to output (file or stdout).
#[derive(Parser, Debug)]
#[command(name = "export_offers")]
#[command(version, about)]
struct Args {
    /// Input file path with one base64 XDR change per line. Reads stdin if not specified.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// First ledger of the range (inclusive).
    #[arg(short, long, default_value_t = 0)]
    start_ledger: u32,

    /// Last ledger of the range (inclusive).
    #[arg(short, long)]
    end_ledger: u32,

    /// Maximum number of offers to export. Negative means no limit.
    #[arg(short, long, default_value_t = -1, allow_negative_numbers = true)]
    limit: i64,

    /// Output file path.
    #[arg(short, long, default_value = "exported_offers.txt")]
    output: PathBuf,

    /// Write to stdout instead of the output file.
    #[arg(long)]
    stdout: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,

    /// Abort on the first offer that fails validation instead of skipping it.
    #[arg(long)]
    strict: bool,
}

/// Supported output formats for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One JSON object per line.
    Json,
    /// CSV with header row.
    Csv,
}

/// Export settings derived from the command line.
#[derive(Debug, Clone, Copy)]
struct ExportOptions {
    start_ledger: u32,
    end_ledger: u32,
    limit: Option<usize>,
    strict: bool,
}

impl ExportOptions {
    fn from_args(args: &Args) -> Result<Self> {
        ensure!(
            args.end_ledger >= args.start_ledger,
            "End ledger ({}) must not be less than start ledger ({})",
            args.end_ledger,
            args.start_ledger
        );
        Ok(Self {
            start_ledger: args.start_ledger,
            end_ledger: args.end_ledger,
            limit: usize::try_from(args.limit).ok(),
            strict: args.strict,
        })
    }

    fn limit_reached(&self, exported: usize) -> bool {
        self.limit.is_some_and(|limit| exported >= limit)
    }

    fn in_range(&self, ledger: u32) -> bool {
        (self.start_ledger..=self.end_ledger).contains(&ledger)
    }
}

/// Outcome counters of one export run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Summary {
    exported: usize,
    skipped: usize,
    filtered: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    let options = ExportOptions::from_args(&args)?;

    // Open input source
    let input: Box<dyn Read> = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdin().lock()),
    };

    // Open output destination
    let output: Box<dyn Write> = if args.stdout {
        Box::new(stdout().lock())
    } else {
        let file = File::create(&args.output)
            .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;
        Box::new(file)
    };

    info!(
        start = options.start_ledger,
        end = options.end_ledger,
        format = ?args.format,
        strict = options.strict,
        "exporting offers"
    );

    let summary = match args.format {
        FormatArg::Json => export::<_, _, JsonLines>(input, output, &options)?,
        FormatArg::Csv => export::<_, _, Csv>(input, output, &options)?,
    };

    info!(
        exported = summary.exported,
        skipped = summary.skipped,
        filtered = summary.filtered,
        "export finished"
    );
    eprintln!(
        "Exported {} offer(s), skipped {}, filtered {}",
        summary.exported, summary.skipped, summary.filtered
    );

    Ok(())
}

/// Streams changes from input to output, one record at a time.
///
/// Changes that are not offers, or whose snapshot lies outside the ledger
/// range, are counted as filtered. Offers that fail validation are skipped
/// with a warning, or abort the export in strict mode.
fn export<R, W, F>(input: R, output: W, options: &ExportOptions) -> Result<Summary>
where
    R: Read,
    W: Write,
    F: OutputFormat,
{
    let mut changes = ChangeReader::new(input).enumerate();
    let mut writer = OfferWriter::<_, F>::new(output);
    let mut summary = Summary::default();

    writer.write_header().context("Failed to write output header")?;

    // The limit is checked before the next line is read.
    while !options.limit_reached(summary.exported) {
        let Some((idx, result)) = changes.next() else {
            break;
        };
        let change = result.with_context(|| format!("Failed to read change #{}", idx + 1))?;

        // A missing snapshot is reported by the transform below.
        if let Ok(entry) = select_snapshot(&change) {
            let ledger = entry.last_modified_ledger_seq;
            if entry.data.entry_type() != LedgerEntryType::Offer || !options.in_range(ledger) {
                debug!(change = idx + 1, ledger, entry_type = %entry.data.entry_type(), "filtered");
                summary.filtered += 1;
                continue;
            }
        }

        match transform_offer(&change) {
            Ok(record) => {
                writer
                    .write(&record)
                    .with_context(|| format!("Failed to write offer {}", record.offer_id()))?;
                summary.exported += 1;
            }
            Err(e) if options.strict => {
                return Err(e).with_context(|| format!("Failed to transform change #{}", idx + 1));
            }
            Err(e) => {
                warn!(
                    change = idx + 1,
                    change_type = change.change_type.as_str(),
                    error = %e,
                    "skipping offer"
                );
                summary.skipped += 1;
            }
        }
    }

    if options.limit_reached(summary.exported) {
        debug!(limit = ?options.limit, "limit reached");
    }

    // Ensure all buffered data is written
    writer.flush().context("Failed to flush output")?;

    Ok(summary)
}
