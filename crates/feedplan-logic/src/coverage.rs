//! Week coverage diagnostics.
//!
//! Coverage is the union of all record intervals clipped to
//! `[1, total_weeks]`. Gaps are reported, never fixed: a week with no
//! feed range simply gets sentinel values in the projected table.

use serde::{Deserialize, Serialize};

use crate::feed_range::FeedRange;

/// Result of a coverage check over `[1, total_weeks]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub total_weeks: u32,
    pub covered_weeks: u32,
    /// Weeks with no matching record, ascending.
    pub uncovered_weeks: Vec<u32>,
    /// `covered / total × 100`; 100.0 when `total_weeks` is 0.
    pub coverage_percent: f64,
    pub complete: bool,
}

/// Compute coverage of `[1, total_weeks]` by `ranges`.
///
/// An empty span is vacuously complete and reported as 100% covered.
/// Work is proportional to the number of ranges plus uncovered weeks,
/// never to `total_weeks` itself.
pub fn compute_coverage(ranges: &[FeedRange], total_weeks: u32) -> CoverageReport {
    if total_weeks == 0 {
        return CoverageReport {
            total_weeks: 0,
            covered_weeks: 0,
            uncovered_weeks: Vec::new(),
            coverage_percent: 100.0,
            complete: true,
        };
    }

    let mut spans: Vec<(u32, u32)> = ranges
        .iter()
        .map(|range| (range.week_start.max(1), range.week_end.min(total_weeks)))
        .filter(|(lo, hi)| lo <= hi)
        .collect();
    spans.sort_unstable();

    // walk merged spans; `next` is the first week not yet accounted for
    let mut uncovered_weeks: Vec<u32> = Vec::new();
    let mut next: u64 = 1;
    for (lo, hi) in spans {
        if u64::from(lo) > next {
            uncovered_weeks.extend(next as u32..lo);
        }
        next = next.max(u64::from(hi) + 1);
    }
    if next <= u64::from(total_weeks) {
        uncovered_weeks.extend(next as u32..=total_weeks);
    }
    let covered_weeks = total_weeks - uncovered_weeks.len() as u32;

    CoverageReport {
        total_weeks,
        covered_weeks,
        coverage_percent: covered_weeks as f64 * 100.0 / total_weeks as f64,
        complete: uncovered_weeks.is_empty(),
        uncovered_weeks,
    }
}

/// Collapse ascending week numbers into inclusive `(start, end)` runs.
///
/// `[4, 5, 6, 9]` becomes `[(4, 6), (9, 9)]`.
pub fn gap_runs(weeks: &[u32]) -> Vec<(u32, u32)> {
    let mut runs: Vec<(u32, u32)> = Vec::new();
    for &week in weeks {
        match runs.last_mut() {
            Some((_, end)) if week == *end + 1 => *end = week,
            _ => runs.push((week, week)),
        }
    }
    runs
}
