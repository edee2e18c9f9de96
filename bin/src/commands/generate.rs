//! Generate command implementation.

use crate::display::open_output;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::Path;
use tickbar_lib::{TickGenerator, write_tick};
use tracing::debug;

/// Ticks written between progress bar updates.
const PROGRESS_CHUNK: usize = 10_000;

/// Write `count` synthetic ticks to a file or stdout.
pub(crate) fn generate(count: usize, output: Option<&Path>, seed: u64, quiet: bool) -> Result<()> {
    let generator = TickGenerator::new().with_seed(seed);
    let mut writer = open_output(output)?;

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ticks ({percent}%) {msg}")?
                .progress_chars("=>-"),
        );
        pb
    };

    let mut bytes = 0;
    for (i, tick) in generator.ticks().take(count).enumerate() {
        bytes += write_tick(&mut writer, &tick).context("Failed to write tick")?;
        if (i + 1) % PROGRESS_CHUNK == 0 {
            progress.inc(PROGRESS_CHUNK as u64);
        }
    }
    writer.flush().context("Failed to flush output")?;

    progress.set_position(count as u64);
    progress.finish_with_message(format!("{bytes} bytes"));
    debug!(count, seed, bytes, "generated ticks");

    if let Some(output) = output
        && !quiet
    {
        println!("Output written to: {}", output.display());
    }

    Ok(())
}
