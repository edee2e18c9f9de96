//! Aggregation settings.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tickbar_types::BarDuration;

/// What to do with a tick that is earlier than the open candle's start.
///
/// Input is required to be sorted by timestamp; this only decides how a
/// violation is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderingPolicy {
    /// Abort the pass with [`RecordError::UnsortedInput`](tickbar_types::RecordError::UnsortedInput).
    #[default]
    Strict,
    /// Fold the tick into the current candle and log a warning.
    Lenient,
}

impl OrderingPolicy {
    /// Returns the policy as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for OrderingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OrderingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" | "reject" => Ok(Self::Strict),
            "lenient" | "best-effort" => Ok(Self::Lenient),
            _ => Err(format!(
                "invalid ordering policy '{s}', expected one of: strict, lenient"
            )),
        }
    }
}

/// Configuration for an aggregator, fixed for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatorConfig {
    /// Candle width.
    pub bar_duration: BarDuration,
    /// Handling of out-of-order ticks.
    #[serde(default)]
    pub ordering: OrderingPolicy,
}

impl AggregatorConfig {
    /// Creates a strict configuration for the given bar duration.
    #[must_use]
    pub const fn new(bar_duration: BarDuration) -> Self {
        Self {
            bar_duration,
            ordering: OrderingPolicy::Strict,
        }
    }

    /// Sets the bar duration.
    #[must_use]
    pub const fn with_bar_duration(mut self, bar_duration: BarDuration) -> Self {
        self.bar_duration = bar_duration;
        self
    }

    /// Sets the ordering policy.
    #[must_use]
    pub const fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self::new(BarDuration::ONE_MINUTE)
    }
}

impl From<BarDuration> for AggregatorConfig {
    fn from(bar_duration: BarDuration) -> Self {
        Self::new(bar_duration)
    }
}
