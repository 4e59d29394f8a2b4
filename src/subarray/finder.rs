//! Single-pass zero-sum subarray search.
//!
//! The finder walks the sequence once, keeping a running prefix sum and a
//! table from each prefix sum seen so far to where it was seen. When the
//! running sum at index `i` was already seen, the elements between the two
//! occurrences sum to zero.
//!
//! Instead of the usual `0 -> -1` seed for the empty prefix, the table stores
//! the index at which a range following that prefix would *start*, so the
//! seed becomes `0 -> 0` and no signed index is needed.

use std::collections::{HashMap, VecDeque};
use std::iter::FusedIterator;

use super::error::SubarrayError;
use super::structures::{ReportPolicy, SubarrayRange};

/// Entry point for zero-sum subarray queries over a borrowed sequence.
///
/// ## Example
///
/// ```
/// use zerosum::{SubarrayRange, ZeroSumFinder};
///
/// let seq = [1, -1, 4, -4, 2];
/// let found: Vec<_> = ZeroSumFinder::new(&seq).find(seq.len())?.collect();
/// assert_eq!(found, vec![SubarrayRange::new(0, 1), SubarrayRange::new(2, 3)]);
/// # Ok::<(), zerosum::SubarrayError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ZeroSumFinder<'a> {
    sequence: &'a [i64],
    policy: ReportPolicy,
}

impl<'a> ZeroSumFinder<'a> {
    pub fn new(sequence: &'a [i64]) -> Self {
        Self {
            sequence,
            policy: ReportPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ReportPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ReportPolicy {
        self.policy
    }

    /// Scan the first `n` elements of the sequence.
    ///
    /// Returns a lazy iterator over the zero-sum ranges, ordered by their
    /// end index. Nothing is computed until the iterator is advanced.
    ///
    /// # Errors
    ///
    /// Returns [`SubarrayError::InvalidArgument`] if `n` exceeds the
    /// sequence length.
    pub fn find(&self, n: usize) -> Result<ZeroSumSubarrays<'a>, SubarrayError> {
        if n > self.sequence.len() {
            return Err(SubarrayError::count_exceeds_length(n, self.sequence.len()));
        }
        Ok(ZeroSumSubarrays::new(&self.sequence[..n], self.policy))
    }
}

/// Collect every range reported for the first `n` elements of `sequence`
/// under the default [`ReportPolicy::Chained`] policy.
pub fn find_zero_sum_subarrays(
    sequence: &[i64],
    n: usize,
) -> Result<Vec<SubarrayRange>, SubarrayError> {
    Ok(ZeroSumFinder::new(sequence).find(n)?.collect())
}

/// Turn a caller-supplied signed count into a usable element count.
///
/// # Errors
///
/// Returns [`SubarrayError::InvalidArgument`] for negative counts and for
/// counts larger than `available`.
pub fn checked_count(requested: i64, available: usize) -> Result<usize, SubarrayError> {
    let n = usize::try_from(requested).map_err(|_| SubarrayError::negative_count(requested))?;
    if n > available {
        return Err(SubarrayError::count_exceeds_length(n, available));
    }
    Ok(n)
}

/// Prefix sum -> start index of the range that would follow it.
#[derive(Debug)]
enum PrefixTable {
    /// Most recent start per sum.
    Latest(HashMap<i128, usize>),
    /// Every start per sum, ascending.
    All(HashMap<i128, Vec<usize>>),
}

impl PrefixTable {
    fn seeded(policy: ReportPolicy, capacity: usize) -> Self {
        match policy {
            ReportPolicy::Chained => {
                let mut starts = HashMap::with_capacity(capacity + 1);
                starts.insert(0, 0);
                PrefixTable::Latest(starts)
            }
            ReportPolicy::Exhaustive => {
                let mut starts = HashMap::with_capacity(capacity + 1);
                starts.insert(0, vec![0]);
                PrefixTable::All(starts)
            }
        }
    }
}

/// Lazy iterator over zero-sum ranges, created by [`ZeroSumFinder::find`].
///
/// Owns its prefix-sum table; the table is dropped with the iterator.
#[derive(Debug)]
pub struct ZeroSumSubarrays<'a> {
    sequence: &'a [i64],
    index: usize,
    /// i128 so that sums of i64 elements cannot overflow.
    running_sum: i128,
    table: PrefixTable,
    /// Ranges found at the current index but not yet yielded.
    pending: VecDeque<SubarrayRange>,
}

impl<'a> ZeroSumSubarrays<'a> {
    fn new(sequence: &'a [i64], policy: ReportPolicy) -> Self {
        Self {
            sequence,
            index: 0,
            running_sum: 0,
            table: PrefixTable::seeded(policy, sequence.len()),
            pending: VecDeque::new(),
        }
    }

    /// Number of input elements consumed so far.
    pub fn scanned(&self) -> usize {
        self.index
    }
}

impl Iterator for ZeroSumSubarrays<'_> {
    type Item = SubarrayRange;

    fn next(&mut self) -> Option<SubarrayRange> {
        loop {
            if let Some(range) = self.pending.pop_front() {
                return Some(range);
            }

            let end = self.index;
            let value = *self.sequence.get(end)?;
            self.index += 1;
            self.running_sum += i128::from(value);

            match &mut self.table {
                PrefixTable::Latest(starts) => {
                    // Overwrite unconditionally; the previous entry, if any,
                    // anchors the range ending here.
                    if let Some(start) = starts.insert(self.running_sum, end + 1) {
                        return Some(SubarrayRange::new(start, end));
                    }
                }
                PrefixTable::All(starts) => {
                    let group = starts.entry(self.running_sum).or_default();
                    self.pending
                        .extend(group.iter().map(|&start| SubarrayRange::new(start, end)));
                    group.push(end + 1);
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.sequence.len() - self.index;
        match self.table {
            PrefixTable::Latest(_) => (self.pending.len(), Some(self.pending.len() + remaining)),
            PrefixTable::All(_) => (self.pending.len(), None),
        }
    }
}

impl FusedIterator for ZeroSumSubarrays<'_> {}
