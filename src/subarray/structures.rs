use std::ops::RangeInclusive;

/// A contiguous zero-sum range of the input, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubarrayRange {
    pub start: usize,
    pub end: usize,
}

impl SubarrayRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {} past end {}", start, end);
        Self { start, end }
    }

    /// Number of elements covered by the range (never zero).
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Always `false`: a range covers at least one element.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn as_range(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }

    /// Borrow the covered elements from the sequence the range was found in.
    ///
    /// Panics if the range does not fit `sequence`.
    pub fn slice<'a>(&self, sequence: &'a [i64]) -> &'a [i64] {
        &sequence[self.as_range()]
    }
}

impl From<SubarrayRange> for (usize, usize) {
    fn from(range: SubarrayRange) -> Self {
        (range.start, range.end)
    }
}

/// How repeated prefix sums are turned into reported ranges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportPolicy {
    /// Keep only the most recent index per prefix sum. A recurring sum
    /// reports one range, anchored at its previous occurrence.
    #[default]
    Chained,
    /// Keep every index per prefix sum and report each pair within a group.
    Exhaustive,
}
