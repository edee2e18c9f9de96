//! CSV output format.

use chrono::SecondsFormat;
use std::io::Write;
use tickbar_aggregate::Candle;

use crate::{FormatError, Formatter};

/// How candle open times are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimestampStyle {
    /// RFC 3339 in UTC, e.g. `2023-01-01T00:00:00Z`.
    #[default]
    Rfc3339,
    /// Raw nanoseconds since the Unix epoch.
    Nanos,
}

/// CSV formatter.
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Field delimiter (default: comma).
    delimiter: char,
    /// Whether to include header row.
    include_header: bool,
    /// Rendering of `open_time`.
    timestamps: TimestampStyle,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvFormatter {
    /// Creates a new CSV formatter with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
            timestamps: TimestampStyle::Rfc3339,
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets whether to include a header row.
    #[must_use]
    pub const fn with_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Sets how open times are rendered.
    #[must_use]
    pub const fn with_timestamps(mut self, style: TimestampStyle) -> Self {
        self.timestamps = style;
        self
    }

    /// Creates a tab-separated values (TSV) formatter.
    #[must_use]
    pub const fn tsv() -> Self {
        Self::new().with_delimiter('\t')
    }

    fn open_time(&self, candle: &Candle) -> String {
        match self.timestamps {
            TimestampStyle::Rfc3339 => candle
                .open_time
                .to_datetime()
                .to_rfc3339_opts(SecondsFormat::AutoSi, true),
            TimestampStyle::Nanos => candle.open_time.to_string(),
        }
    }
}

impl Formatter for CsvFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        let d = self.delimiter;

        if self.include_header {
            writeln!(
                writer,
                "open_time{d}open{d}high{d}low{d}close{d}volume{d}tick_count"
            )?;
        }

        for candle in candles {
            writeln!(
                writer,
                "{}{d}{}{d}{}{d}{}{d}{}{d}{}{d}{}",
                self.open_time(candle),
                candle.open,
                candle.high,
                candle.low,
                candle.close,
                candle.volume,
                candle.tick_count
            )?;
        }

        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        if self.delimiter == '\t' { "tsv" } else { "csv" }
    }
}
