//! # zerosum
//!
//! Find contiguous subarrays of an integer sequence that sum to zero.
//!
//! The search is a single pass over the input that keeps a table from each
//! prefix sum seen so far to where it was seen. Whenever the running sum
//! repeats, the elements in between sum to zero. This takes O(n) time and
//! O(n) extra space instead of checking every pair of indices.
//!
//! ## Features
//!
//! - Lazy iterator over zero-sum ranges, ordered by end index
//! - Two reporting policies: consecutive recurrences only (default) or every range
//! - Overflow-free prefix sums over the full `i64` range
//! - Input from command-line values, local files or HTTP URLs
//!
//! ## Example
//!
//! ```
//! use zerosum::{ZeroSumFinder, subarray::report};
//!
//! let seq = [1, -1, 4, -4, 2];
//! for range in ZeroSumFinder::new(&seq).find(seq.len())? {
//!     println!("{}", report::describe(&range));
//! }
//! # Ok::<(), zerosum::SubarrayError>(())
//! ```

pub mod cli;
pub mod io;
pub mod subarray;

pub use cli::Cli;
pub use io::{HttpSource, InlineSource, LocalFileSource, SequenceSource};
pub use subarray::{
    ReportPolicy, SubarrayError, SubarrayRange, ZeroSumFinder, ZeroSumSubarrays, checked_count,
    find_zero_sum_subarrays,
};
