//! Input, output and formatting helpers for the tickbar CLI.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use tickbar_lib::prelude::*;
use tickbar_lib::TimestampStyle;

/// Path that selects stdin.
const STDIN: &str = "-";

/// Output format for candles.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Csv => Self::Csv,
            Format::Json => Self::Json,
            Format::Ndjson => Self::Ndjson,
            Format::Text => Self::Text,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", OutputFormat::from(*self))
    }
}

/// Read the whole input into memory. `-` reads stdin.
pub(crate) fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == STDIN {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .read_to_end(&mut buffer)
            .context("Failed to read stdin")?;
        return Ok(buffer);
    }

    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Open the output file, or stdout when no path is given.
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Write candles in the specified format.
pub(crate) fn write_candles<W: Write + Send>(
    candles: &[Candle],
    writer: W,
    format: Format,
    nanos: bool,
) -> Result<()> {
    match format {
        Format::Csv => {
            let timestamps = if nanos {
                TimestampStyle::Nanos
            } else {
                TimestampStyle::Rfc3339
            };
            let formatter = CsvFormatter::new().with_timestamps(timestamps);
            formatter.write_candles(candles, writer)?;
        }
        other => OutputFormat::from(other).write_candles(candles, writer)?,
    }

    Ok(())
}
