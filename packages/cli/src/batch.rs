//! Line-oriented batch parsing.
//!
//! Reads one address per line, skips blank lines and writes either JSON
//! lines or CSV. The CSV header is the nine component tags followed by
//! `INPUT`.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use postal_address::{AddressComponent, AddressParser, AddressStandardizer, Lexicon, ParsedAddress};
use postal_cli_utils::ProgressCallback;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while processing a batch.
#[derive(Debug, Error)]
pub enum BatchError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing a CSV record failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Serializing a JSON line failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output encoding for batch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BatchFormat {
    /// One JSON object per line.
    Jsonl,
    /// CSV with one column per component.
    Csv,
}

/// One JSON line: the input followed by its components.
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(rename = "INPUT")]
    input: &'a str,
    #[serde(flatten)]
    components: &'a ParsedAddress,
}

enum Sink<W: Write> {
    Jsonl(W),
    Csv(csv::Writer<W>),
}

impl<W: Write> Sink<W> {
    fn new(writer: W, format: BatchFormat) -> Result<Self, BatchError> {
        Ok(match format {
            BatchFormat::Jsonl => Self::Jsonl(writer),
            BatchFormat::Csv => {
                let mut writer = csv::Writer::from_writer(writer);
                writer.write_record(
                    AddressComponent::ALL
                        .iter()
                        .map(ToString::to_string)
                        .chain(std::iter::once("INPUT".to_string())),
                )?;
                Self::Csv(writer)
            }
        })
    }

    fn write(&mut self, input: &str, components: &ParsedAddress) -> Result<(), BatchError> {
        match self {
            Self::Jsonl(writer) => {
                serde_json::to_writer(&mut *writer, &JsonRecord { input, components })?;
                writeln!(writer)?;
            }
            Self::Csv(writer) => {
                writer.write_record(
                    AddressComponent::ALL
                        .iter()
                        .map(|c| components.get(*c).unwrap_or_default())
                        .chain(std::iter::once(input)),
                )?;
            }
        }
        Ok(())
    }

    fn finish(self) -> Result<(), BatchError> {
        match self {
            Self::Jsonl(mut writer) => writer.flush()?,
            Self::Csv(mut writer) => writer.flush()?,
        }
        Ok(())
    }
}

/// Parses `raw`, standardizing the result when asked to.
#[must_use]
pub fn process(lexicon: &Lexicon, raw: &str, standardize: bool) -> ParsedAddress {
    let parsed = AddressParser::new(lexicon).parse(raw);
    if standardize {
        AddressStandardizer::new(lexicon).standardize(&parsed)
    } else {
        parsed
    }
}

/// Processes every non-blank line of `reader` and writes the results to
/// `writer`.
///
/// Returns the number of addresses written.
///
/// # Errors
///
/// * If reading a line fails
/// * If writing or encoding a record fails
pub fn run<R: BufRead, W: Write>(
    lexicon: &Lexicon,
    reader: R,
    writer: W,
    format: BatchFormat,
    standardize: bool,
    progress: &dyn ProgressCallback,
) -> Result<u64, BatchError> {
    let mut sink = Sink::new(writer, format)?;
    let mut count = 0u64;

    for line in reader.lines() {
        let line = line?;
        let raw = line.trim();
        if raw.is_empty() {
            continue;
        }

        let parsed = process(lexicon, raw, standardize);
        log::trace!("{raw:?} -> {} components", parsed.len());
        sink.write(raw, &parsed)?;

        count += 1;
        progress.inc(1);
    }

    sink.finish()?;
    progress.finish(format!("Processed {count} addresses"));

    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use postal_cli_utils::NullProgress;

    use super::*;

    const INPUT: &str = "123 Avenue of art, philadelphia pa 12345\n\n   \n2462 Thunder Mountain Way, Unit: 903\n";

    #[derive(Default)]
    struct CountingProgress {
        count: AtomicU64,
    }

    impl ProgressCallback for CountingProgress {
        fn set_total(&self, _total: u64) {}
        fn inc(&self, delta: u64) {
            self.count.fetch_add(delta, Ordering::Relaxed);
        }
        fn set_message(&self, _msg: String) {}
        fn finish(&self, _msg: String) {}
    }

    fn run_to_string(format: BatchFormat, standardize: bool) -> (u64, String) {
        let lexicon = Lexicon::standard();
        let mut output = Vec::new();
        let count = run(
            &lexicon,
            INPUT.as_bytes(),
            &mut output,
            format,
            standardize,
            &NullProgress,
        )
        .unwrap();
        (count, String::from_utf8(output).unwrap())
    }

    #[test]
    fn writes_json_lines_and_skips_blank_lines() {
        let (count, output) = run_to_string(BatchFormat::Jsonl, false);
        assert_eq!(count, 2);

        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);

        assert_eq!(lines[0]["INPUT"], "123 Avenue of art, philadelphia pa 12345");
        assert_eq!(lines[0]["NUMBER"], "123");
        assert_eq!(lines[0]["STREET"], "Avenue of art");
        assert_eq!(lines[0]["ZIP"], "12345");
        assert!(lines[0].get("TYPE").is_none());

        assert_eq!(lines[1]["LINE2"], "Unit: 903");
    }

    #[test]
    fn writes_csv_with_component_header() {
        let (count, output) = run_to_string(BatchFormat::Csv, true);
        assert_eq!(count, 2);
        assert_eq!(
            output.lines().next(),
            Some("NAME,NUMBER,PREDIR,STREET,TYPE,LINE2,CITY,STATE,ZIP,INPUT")
        );

        let mut reader = csv::Reader::from_reader(output.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
        assert_eq!(rows.len(), 2);

        let second = &rows[1];
        assert_eq!(&second[1], "2462");
        assert_eq!(&second[3], "THUNDER MOUNTAIN");
        assert_eq!(&second[4], "WAY");
        assert_eq!(&second[5], "UNIT 903");
        assert_eq!(&second[6], "");
        assert_eq!(&second[9], "2462 Thunder Mountain Way, Unit: 903");
    }

    #[test]
    fn reports_progress_per_address() {
        let lexicon = Lexicon::standard();
        let progress = CountingProgress::default();
        run(
            &lexicon,
            INPUT.as_bytes(),
            std::io::sink(),
            BatchFormat::Jsonl,
            false,
            &progress,
        )
        .unwrap();
        assert_eq!(progress.count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn standardizes_on_request() {
        let lexicon = Lexicon::standard();
        let parsed = process(&lexicon, "1 Main St, Kansas City, Missouri", true);
        assert_eq!(parsed.get(AddressComponent::State), Some("MO"));
        assert_eq!(parsed.get(AddressComponent::City), Some("KANSAS CITY"));

        let parsed = process(&lexicon, "1 Main St, Kansas City, Missouri", false);
        assert_eq!(parsed.get(AddressComponent::State), Some("Missouri"));
    }
}
