//! Output format abstraction.

use std::io::Write;
use thiserror::Error;
use tickbar_aggregate::Candle;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    #[default]
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Human-readable text.
    Text,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Text => "txt",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Csv, Self::Json, Self::Ndjson, Self::Text]
    }

    /// Writes candles in this format using the formatter's default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        writer: W,
    ) -> Result<(), FormatError> {
        match self {
            Self::Csv => crate::CsvFormatter::new().write_candles(candles, writer),
            Self::Json => crate::JsonFormatter::new().write_candles(candles, writer),
            Self::Ndjson => crate::JsonFormatter::ndjson().write_candles(candles, writer),
            Self::Text => crate::TextFormatter::new().write_candles(candles, writer),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Text => "text",
            other => other.extension(),
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes candles to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}
