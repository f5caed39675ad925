use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::fs::{self, File};
use std::io::{BufWriter, IsTerminal};
use tracing::info;

use crate::batch::{convert_reader, BatchOptions, BatchSummary, RowOutcome};

/// Batches smaller than this finish before a progress bar is worth drawing
pub const PROGRESS_MIN_ROWS: usize = 5000;

/// Progress bar for a batch, hidden for small batches or when stderr is not a terminal
pub fn progress_bar(expected_rows: usize, stderr_is_terminal: bool) -> ProgressBar {
    if !stderr_is_terminal || expected_rows < PROGRESS_MIN_ROWS {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::with_draw_target(Some(expected_rows as u64), ProgressDrawTarget::stderr());
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} rows {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb
}

pub fn execute(
    input: &str,
    output: &str,
    options: &BatchOptions,
    max_errors_shown: usize,
) -> Result<BatchSummary> {
    info!("Converting {} to {}", input, output);

    let data = fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?;

    // Line count less the header; quoted newlines only make this an overestimate
    let expected_rows = data.iter().filter(|&&b| b == b'\n').count().saturating_sub(1);
    let pb = progress_bar(expected_rows, std::io::stderr().is_terminal());

    let batch = convert_reader(data.as_slice(), options, |row| {
        pb.inc(1);
        if let RowOutcome::Failed(_) = row.outcome {
            pb.set_message(format!("(last error at row {})", row.row_number));
        }
    })
    .with_context(|| format!("Failed to process CSV: {}", input))?;

    pb.finish_and_clear();

    // Nothing is created until every row has been read
    let file =
        File::create(output).with_context(|| format!("Failed to create output file: {}", output))?;
    batch
        .write_to(BufWriter::new(file))
        .with_context(|| format!("Failed to write output file: {}", output))?;

    let summary = batch.summary();
    info!(
        "Converted {} rows ({} errors, {} blank)",
        summary.converted, summary.failed, summary.blank
    );

    println!("\n=== Conversion Summary ===");
    println!("Input file:              {}", input);
    println!("Output file:             {}", output);
    println!("Rows processed:          {}", summary.total);
    println!(
        "Successfully converted:  {}",
        summary.converted.to_string().green()
    );
    if summary.failed > 0 {
        println!("Errors:                  {}", summary.failed.to_string().red());
    } else {
        println!("Errors:                  {}", summary.failed);
    }
    if summary.blank > 0 {
        println!("Blank Kantec cells:      {}", summary.blank);
    }

    if summary.failed > 0 {
        println!("\n=== Errors ===");
        for row in batch.failures().take(max_errors_shown) {
            if let RowOutcome::Failed(e) = &row.outcome {
                println!("  - Row {}: {} - {}", row.row_number, row.kantec, e);
            }
        }
        if summary.failed > max_errors_shown {
            println!(
                "  ... and {} more errors",
                summary.failed - max_errors_shown
            );
        }
    }

    println!("\n{} Output saved to: {}", "✓".green(), output);

    Ok(summary)
}
