use clap::Parser;

use crate::subarray::ReportPolicy;

#[derive(Parser, Debug)]
#[command(name = "zerosum")]
#[command(version)]
#[command(about = "Find contiguous subarrays that sum to zero", long_about = None)]
#[command(after_help = "Examples:\n  \
  zerosum                          scan the built-in example [1, 4, 20, 3, 10, 5]\n  \
  zerosum 1 -1 4 -4 2              scan values given on the command line\n  \
  zerosum -f data.txt -n 100       scan the first 100 values of data.txt\n  \
  zerosum -a -f https://example.com/seq.txt   report every zero-sum subarray")]
pub struct Cli {
    /// Integer values to scan (default: built-in example)
    #[arg(value_name = "VALUES", allow_negative_numbers = true, conflicts_with = "file")]
    pub values: Vec<i64>,

    /// Read values from a file path or HTTP URL
    #[arg(short = 'f', long = "file", value_name = "SOURCE")]
    pub file: Option<String>,

    /// Only scan the first COUNT values
    #[arg(short = 'n', long = "count", value_name = "COUNT", allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Report every zero-sum subarray, not only consecutive recurrences
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Print only the number of subarrays found
    #[arg(short = 'c', long = "count-only")]
    pub count_only: bool,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Verbose logging (-vv => more)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn policy(&self) -> ReportPolicy {
        if self.all {
            ReportPolicy::Exhaustive
        } else {
            ReportPolicy::Chained
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    pub fn is_very_quiet(&self) -> bool {
        self.quiet > 1
    }

    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.is_very_quiet() {
            return "off";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
