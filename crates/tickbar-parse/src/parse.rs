//! Tick record parsing.

use thiserror::Error;
use tickbar_types::{Location, RecordError, Tick, UnixNanos};

use crate::Lines;

/// Field separator within a record.
pub const DELIMITER: u8 = b',';

/// A record that failed to parse, with its position in the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{location}: {source}")]
pub struct ParseError {
    /// Where the faulty record starts.
    pub location: Location,
    /// What was wrong with it.
    pub source: RecordError,
}

/// Parses a single `timestamp,price,volume` record.
///
/// The record format is:
/// - integer nanoseconds since the Unix epoch
/// - floating-point price
/// - integer volume
///
/// Each field must parse completely; surrounding whitespace is not trimmed.
/// Anything after the second delimiter belongs to the volume field, so extra
/// columns are reported as an invalid volume.
///
/// # Errors
///
/// Returns [`RecordError::MalformedRecord`] if the line has fewer than two
/// delimiters, or the matching `Invalid*` variant for the first field that
/// does not parse. Non-finite prices are rejected.
pub fn parse_line(line: &[u8]) -> Result<Tick, RecordError> {
    let mut fields = line.splitn(3, |&b| b == DELIMITER);
    let (Some(timestamp), Some(price), Some(volume)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(RecordError::MalformedRecord {
            fields: delimiter_count(line) + 1,
        });
    };

    let timestamp = parse_field::<i64>(timestamp).ok_or_else(|| {
        RecordError::InvalidTimestamp(String::from_utf8_lossy(timestamp).into_owned())
    })?;

    let price = parse_field::<f64>(price)
        .filter(|p| p.is_finite())
        .ok_or_else(|| RecordError::InvalidPrice(String::from_utf8_lossy(price).into_owned()))?;

    let volume = parse_field::<i64>(volume)
        .ok_or_else(|| RecordError::InvalidVolume(String::from_utf8_lossy(volume).into_owned()))?;

    Ok(Tick::new(UnixNanos::new(timestamp), price, volume))
}

/// Parses every non-empty line of `buffer`.
///
/// Yields ticks in buffer order together with their location. Parsing does
/// not stop at the first error; callers decide whether to abort.
pub fn parse_ticks(buffer: &[u8]) -> impl Iterator<Item = Result<(Location, Tick), ParseError>> + '_ {
    Lines::new(buffer).map(|record| {
        parse_line(record.bytes)
            .map(|tick| (record.location, tick))
            .map_err(|source| ParseError {
                location: record.location,
                source,
            })
    })
}

/// Parses a whole field, rejecting non-UTF-8 bytes and partial parses.
#[inline]
fn parse_field<T: std::str::FromStr>(field: &[u8]) -> Option<T> {
    std::str::from_utf8(field).ok()?.parse().ok()
}

fn delimiter_count(line: &[u8]) -> usize {
    line.iter().filter(|&&b| b == DELIMITER).count()
}
