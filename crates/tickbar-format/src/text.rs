//! Human-readable text output.

use std::io::Write;
use tickbar_aggregate::Candle;

use crate::{FormatError, Formatter};

/// Writes one `Candle(OpenTime: ..., O: ..., H: ..., L: ..., C: ..., V: ...)`
/// line per candle, with the open time in UTC.
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    show_tick_count: bool,
}

impl TextFormatter {
    /// Creates a text formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            show_tick_count: false,
        }
    }

    /// Appends the number of ticks in each candle.
    #[must_use]
    pub const fn with_tick_count(mut self, show: bool) -> Self {
        self.show_tick_count = show;
        self
    }
}

impl Formatter for TextFormatter {
    fn write_candles<W: Write + Send>(
        &self,
        candles: &[Candle],
        mut writer: W,
    ) -> Result<(), FormatError> {
        for candle in candles {
            write!(
                writer,
                "Candle(OpenTime: {}, O: {}, H: {}, L: {}, C: {}, V: {}",
                candle.open_time.to_datetime().format("%Y-%m-%d %H:%M:%S"),
                candle.open,
                candle.high,
                candle.low,
                candle.close,
                candle.volume
            )?;
            if self.show_tick_count {
                write!(writer, ", N: {}", candle.tick_count)?;
            }
            writeln!(writer, ")")?;
        }
        writer.flush()?;
        Ok(())
    }

    fn extension(&self) -> &str {
        "txt"
    }
}
