//! Main entry point for the zerosum CLI application.
//!
//! Loads an integer sequence from the command line, a local file or an
//! HTTP URL, and prints every zero-sum subarray found in it.

use anyhow::Result;
use clap::Parser;
use std::io::Write;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use zerosum::io::{self, SequenceSource};
use zerosum::subarray::report;
use zerosum::{Cli, InlineSource, ZeroSumFinder, checked_count};

/// Application entry point.
///
/// Parses command-line arguments, picks an input source and runs the scan.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let source: Box<dyn SequenceSource> = match &cli.file {
        Some(location) => io::open_source(location)?,
        None if cli.values.is_empty() => Box::new(InlineSource::example()),
        None => Box::new(InlineSource::new(cli.values.clone())),
    };

    run(source.as_ref(), &cli).await
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise the level follows `-v`/`-q`.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the sequence, validate the count and report the ranges.
///
/// # Arguments
///
/// * `source` - Where the sequence comes from
/// * `cli` - Parsed command-line arguments
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if loading fails or the
/// requested count is invalid.
async fn run(source: &dyn SequenceSource, cli: &Cli) -> Result<()> {
    let sequence = source.read_sequence().await?;
    info!(source = %source.describe(), len = sequence.len(), "loaded sequence");

    let n = match cli.count {
        Some(requested) => checked_count(requested, sequence.len())?,
        None => sequence.len(),
    };

    let finder = ZeroSumFinder::new(&sequence).with_policy(cli.policy());
    debug!(n, policy = ?finder.policy(), "scanning");
    let ranges = finder.find(n)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let found = if cli.count_only {
        let found = ranges.count();
        writeln!(out, "{}", found)?;
        found
    } else {
        report::write_report(&mut out, ranges)?
    };
    out.flush()?;

    if !cli.is_quiet() {
        if !cli.count_only {
            eprintln!("\n{} zero-sum subarray(s) in {} element(s)", found, n);
        }

        // Display network transfer statistics for HTTP sources
        if let Some(transferred) = source.transferred_bytes() {
            eprintln!("Total bytes transferred: {}", format_size(transferred));
        }
    }

    Ok(())
}

/// Format a byte size into a human-readable string.
///
/// Automatically selects the appropriate unit (bytes, KB, MB) based on the
/// size magnitude.
fn format_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 bytes");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(1048576), "1.00 MB");
    }
}
