#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the postal address parser.
//!
//! Uses `indicatif-log-bridge` (via [`postal_cli_utils::init_logger`]) so
//! that `RUST_LOG=postal_address=trace` output and the batch progress bar
//! never fight for the terminal.

mod batch;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use batch::BatchFormat;
use clap::{Parser, Subcommand, ValueEnum};
use postal_address::{Lexicon, LexiconError, LexiconOverlay, PostalAddress};
use postal_cli_utils::{IndicatifProgress, ProgressCallback as _, null_progress};

#[derive(Parser)]
#[command(
    name = "postal_address",
    about = "US postal address parser and standardizer"
)]
struct Cli {
    /// TOML overlay adding confusing cities, street types or designators
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse addresses given as arguments
    Parse {
        /// One or more raw addresses (quote each one)
        #[arg(required = true)]
        addresses: Vec<String>,
        /// Standardize the parsed components
        #[arg(long)]
        standardize: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = ParseFormat::Json)]
        format: ParseFormat,
    },
    /// Parse one address per line from a file or stdin
    Batch {
        /// Input file, or `-` for stdin
        #[arg(long)]
        input: String,
        /// Output file (defaults to stdout)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Standardize the parsed components
        #[arg(long)]
        standardize: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = BatchFormat::Jsonl)]
        format: BatchFormat,
    },
    /// Print the standardized address as postal lines
    Postal {
        /// Raw address
        address: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ParseFormat {
    /// One compact JSON object per line
    Json,
    /// Indented JSON
    Pretty,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = postal_cli_utils::init_logger();
    let cli = Cli::parse();

    let lexicon = load_lexicon(cli.lexicon.as_deref())?;

    match cli.command {
        Commands::Parse {
            addresses,
            standardize,
            format,
        } => {
            let mut out = io::stdout().lock();
            for raw in &addresses {
                let parsed = batch::process(&lexicon, raw, standardize);
                match format {
                    ParseFormat::Json => serde_json::to_writer(&mut out, &parsed)?,
                    ParseFormat::Pretty => serde_json::to_writer_pretty(&mut out, &parsed)?,
                }
                writeln!(out)?;
            }
        }
        Commands::Batch {
            input,
            output,
            standardize,
            format,
        } => {
            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(BufWriter::new(File::create(path)?)),
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };

            let count = if input == "-" {
                let progress = null_progress();
                batch::run(
                    &lexicon,
                    io::stdin().lock(),
                    writer,
                    format,
                    standardize,
                    progress.as_ref(),
                )?
            } else {
                let content = std::fs::read_to_string(&input)?;
                let total = content.lines().filter(|l| !l.trim().is_empty()).count();

                let progress = IndicatifProgress::addresses_bar(&multi, "Parsing addresses");
                progress.set_total(u64::try_from(total).unwrap_or(u64::MAX));
                progress.set_message(input.clone());

                batch::run(
                    &lexicon,
                    content.as_bytes(),
                    writer,
                    format,
                    standardize,
                    progress.as_ref(),
                )?
            };

            log::info!("Processed {count} addresses from {input}");
        }
        Commands::Postal { address } => {
            let standardized = postal_address::parse_and_standardize(&lexicon, &address);
            let postal = PostalAddress::from(&standardized);
            println!("{}", serde_json::to_string_pretty(&postal)?);
        }
    }

    Ok(())
}

/// Builds the standard lexicon, extended with the overlay at `path` if
/// one was given.
fn load_lexicon(path: Option<&Path>) -> Result<Lexicon, LexiconError> {
    let lexicon = Lexicon::standard();
    match path {
        Some(path) => lexicon.with_overlay(&LexiconOverlay::load(path)?),
        None => Ok(lexicon),
    }
}
