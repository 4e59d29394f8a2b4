//! Zero-sum subarray search.
//!
//! ## Architecture
//!
//! - [`structures`]: result ranges and the reporting policy
//! - [`finder`]: the single-pass prefix-sum scan
//! - [`report`]: turning ranges into text lines
//! - [`error`]: argument validation errors
//!
//! ## Algorithm
//!
//! A range `start..=end` sums to zero exactly when the prefix sum before
//! `start` equals the prefix sum through `end`. The finder keeps a table of
//! prefix sums seen so far and reports a range whenever the running sum
//! repeats, giving O(n) time and O(n) extra space.
//!
//! ## Reporting Policies
//!
//! - [`ReportPolicy::Chained`] keeps only the latest index per prefix sum.
//!   When a sum occurs three or more times, only ranges between consecutive
//!   occurrences are reported.
//! - [`ReportPolicy::Exhaustive`] keeps every index and reports all zero-sum
//!   ranges. Output can be quadratic in the input length.

pub mod error;
pub mod finder;
pub mod report;
pub mod structures;

pub use error::SubarrayError;
pub use finder::{ZeroSumFinder, ZeroSumSubarrays, checked_count, find_zero_sum_subarrays};
pub use structures::{ReportPolicy, SubarrayRange};
