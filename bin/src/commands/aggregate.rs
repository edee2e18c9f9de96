//! Aggregate command implementation.
//!
//! Reads a tick file into memory, folds it into candles and writes them in
//! the requested format.

use crate::display::{Format, open_output, read_input, write_candles};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tickbar_lib::prelude::*;
use tracing::info;

/// Settings for one `aggregate` invocation.
pub(crate) struct AggregateOptions {
    pub(crate) input: PathBuf,
    pub(crate) bar: Option<String>,
    pub(crate) format: Format,
    pub(crate) output: Option<PathBuf>,
    pub(crate) lenient: bool,
    pub(crate) config: Option<PathBuf>,
    pub(crate) nanos: bool,
    pub(crate) quiet: bool,
}

/// Load aggregator settings from a JSON file, or the defaults.
pub(crate) fn load_config(path: Option<&Path>) -> Result<AggregatorConfig> {
    let Some(path) = path else {
        return Ok(AggregatorConfig::default());
    };

    let file =
        File::open(path).with_context(|| format!("Failed to open config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config {}", path.display()))
}

/// Apply command-line overrides on top of file settings.
pub(crate) fn resolve_config(options: &AggregateOptions) -> Result<AggregatorConfig> {
    let mut config = load_config(options.config.as_deref())?;

    if let Some(bar) = &options.bar {
        let bar_duration = bar
            .parse::<BarDuration>()
            .with_context(|| format!("Invalid bar width: {bar}"))?;
        config = config.with_bar_duration(bar_duration);
    }
    if options.lenient {
        config = config.with_ordering(OrderingPolicy::Lenient);
    }

    Ok(config)
}

/// Aggregate ticks from a file or stdin into candles.
pub(crate) fn aggregate(options: &AggregateOptions) -> Result<()> {
    let config = resolve_config(options)?;
    let buffer = read_input(&options.input)?;

    info!(
        input = %options.input.display(),
        bytes = buffer.len(),
        bar = %config.bar_duration,
        ordering = %config.ordering,
        "aggregating"
    );

    let candles = match Aggregator::new(config).aggregate(&buffer) {
        Ok(candles) => candles,
        Err(error) => {
            info!(
                complete = error.partial().len(),
                "candles completed before the failure"
            );
            return Err(error)
                .with_context(|| format!("Failed to aggregate {}", options.input.display()));
        }
    };

    let writer = open_output(options.output.as_deref())?;
    write_candles(&candles, writer, options.format, options.nanos)?;

    if let Some(output) = &options.output
        && !options.quiet
    {
        println!("Wrote {} candles to {}", candles.len(), output.display());
    }

    Ok(())
}
