//! Ordered feed-range table with first-match-wins lookup.
//!
//! The table never sorts, deduplicates or otherwise touches the records it
//! is built from. Lookups are a linear scan in collection order; when two
//! records overlap the earlier one wins. Overlaps are a data-quality
//! problem reported through [`RangeTable::overlaps`], not an error.

use serde::{Deserialize, Serialize};

use crate::constants::sentinels;
use crate::coverage::{compute_coverage, CoverageReport};
use crate::feed_range::FeedRange;

/// Read-only collection of feed ranges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RangeTable {
    ranges: Vec<FeedRange>,
}

impl RangeTable {
    pub fn new(ranges: Vec<FeedRange>) -> Self {
        Self { ranges }
    }

    /// All records in their original order.
    pub fn records(&self) -> &[FeedRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// First record covering `week`, if any.
    pub fn lookup(&self, week: u32) -> Option<&FeedRange> {
        self.ranges.iter().find(|r| r.covers(week))
    }

    /// Every record intersecting `[week_start, week_end]`, in original order.
    pub fn lookup_overlapping(&self, week_start: u32, week_end: u32) -> Vec<&FeedRange> {
        self.ranges
            .iter()
            .filter(|r| r.intersects(week_start, week_end))
            .collect()
    }

    /// Coverage of `[1, total_weeks]`.
    pub fn validate_coverage(&self, total_weeks: u32) -> CoverageReport {
        compute_coverage(&self.ranges, total_weeks)
    }

    /// Pairs of records sharing at least one week, earlier record first.
    pub fn overlaps(&self) -> Vec<(&FeedRange, &FeedRange)> {
        let mut pairs = Vec::new();
        for (i, a) in self.ranges.iter().enumerate() {
            for b in &self.ranges[i + 1..] {
                if a.overlaps(b) {
                    pairs.push((a, b));
                }
            }
        }
        pairs
    }

    // ── Per-week field accessors ────────────────────────────────────────

    pub fn product(&self, week: u32) -> &str {
        self.lookup(week)
            .map_or(sentinels::UNDEFINED_PRODUCT, |r| r.product.as_str())
    }

    pub fn protein(&self, week: u32) -> f64 {
        self.lookup(week)
            .map_or(sentinels::NO_PROTEIN, |r| r.protein_percent)
    }

    pub fn granularity(&self, week: u32) -> &str {
        self.lookup(week)
            .map_or(sentinels::NO_GRANULARITY, |r| r.granularity.as_str())
    }

    pub fn price(&self, week: u32) -> f64 {
        self.lookup(week)
            .map_or(sentinels::NO_PRICE, |r| r.price_per_thousand)
    }

    pub fn note(&self, week: u32) -> &str {
        self.lookup(week)
            .map_or(sentinels::NO_NOTE, |r| r.note.as_str())
    }

    /// Product name for each week in `1..=weeks`.
    pub fn products(&self, weeks: u32) -> Vec<&str> {
        (1..=weeks).map(|week| self.product(week)).collect()
    }

    /// Matching record (or `None`) for each week in `1..=weeks`.
    pub fn details(&self, weeks: u32) -> Vec<Option<&FeedRange>> {
        (1..=weeks).map(|week| self.lookup(week)).collect()
    }
}

impl From<Vec<FeedRange>> for RangeTable {
    fn from(ranges: Vec<FeedRange>) -> Self {
        Self::new(ranges)
    }
}

impl FromIterator<FeedRange> for RangeTable {
    fn from_iter<I: IntoIterator<Item = FeedRange>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
