//! Text rendering for found ranges, kept apart from the search itself.

use std::io::{self, Write};

use super::structures::SubarrayRange;

/// Render one range as a human-readable line (without trailing newline).
pub fn describe(range: &SubarrayRange) -> String {
    format!("Subarray with sum 0 from index {} to {}", range.start, range.end)
}

/// Write one line per range and return how many lines were written.
///
/// Ranges are written as they are pulled from `ranges`, so a lazy iterator
/// is reported incrementally.
pub fn write_report<W, I>(writer: &mut W, ranges: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = SubarrayRange>,
{
    let mut written = 0;
    for range in ranges {
        writeln!(writer, "{}", describe(&range))?;
        written += 1;
    }
    Ok(written)
}
