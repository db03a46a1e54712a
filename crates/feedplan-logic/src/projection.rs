//! Weekly growth projection.
//!
//! Daily growth starts at 0.79 g/day in week 1 and rises 0.01 g/day every
//! week. Each week's final weight is its initial weight plus seven days of
//! growth; the next week starts from that final weight.
//!
//! Stored values are rounded to two decimals, and the *rounded* final
//! weight is what the next week starts from, so rounding error carries
//! forward instead of being corrected. Existing schedules depend on that
//! exact output.

use serde::{Deserialize, Serialize};

use crate::constants::growth::{DAYS_PER_WEEK, INITIAL_DAILY_GROWTH, WEEKLY_GROWTH_STEP};
use crate::constants::sentinels;
use crate::error::ProjectionError;
use crate::range_table::RangeTable;

/// One projected week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekRow {
    /// 1-based week number.
    pub week: u32,
    /// Weight at the start of the week (g).
    pub weight_in: f64,
    /// Weight at the end of the week (g).
    pub weight_out: f64,
    /// Growth during the week (g/day).
    pub daily_growth: f64,
    pub product: String,
    pub protein_percent: f64,
    pub granularity: String,
}

/// Unrounded daily growth rate for a 1-based week.
pub fn growth_rate(week: u32) -> f64 {
    INITIAL_DAILY_GROWTH + week.saturating_sub(1) as f64 * WEEKLY_GROWTH_STEP
}

/// Round to two decimal places.
///
/// Rounds the exact binary value (as `{:.2}` does), not `value * 100`,
/// which picks up representation error: 0.015 is stored just below the
/// tie and must round down to 0.01.
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Project `week_count` weeks of growth from `initial_weight_grams`,
/// attaching the feed range that covers each week.
///
/// Fails without producing any rows when the initial weight is not a
/// positive finite number or `week_count` is zero.
pub fn project(
    initial_weight_grams: f64,
    week_count: u32,
    table: &RangeTable,
) -> Result<Vec<WeekRow>, ProjectionError> {
    if !initial_weight_grams.is_finite() || initial_weight_grams <= 0.0 {
        return Err(ProjectionError::invalid(
            "initial_weight_grams",
            format!("must be a positive number of grams, got {initial_weight_grams}"),
        ));
    }
    if week_count < 1 {
        return Err(ProjectionError::invalid(
            "week_count",
            "must be at least 1",
        ));
    }

    let mut rows = Vec::with_capacity(week_count as usize);
    let mut weight = initial_weight_grams;

    for week in 1..=week_count {
        let rate = growth_rate(week);
        let weight_out = round2(weight + rate * DAYS_PER_WEEK);

        let (product, protein_percent, granularity) = match table.lookup(week) {
            Some(range) => (
                range.product.clone(),
                range.protein_percent,
                range.granularity.clone(),
            ),
            None => (
                sentinels::UNDEFINED_PRODUCT.to_string(),
                sentinels::NO_PROTEIN,
                sentinels::NO_GRANULARITY.to_string(),
            ),
        };

        rows.push(WeekRow {
            week,
            weight_in: round2(weight),
            weight_out,
            daily_growth: round2(rate),
            product,
            protein_percent,
            granularity,
        });

        weight = weight_out;
    }

    Ok(rows)
}

/// `(week, daily_growth)` pairs, the series behind the growth chart.
pub fn growth_series(rows: &[WeekRow]) -> Vec<(u32, f64)> {
    rows.iter().map(|r| (r.week, r.daily_growth)).collect()
}

/// Final weight of the last projected week.
pub fn final_weight(rows: &[WeekRow]) -> Option<f64> {
    rows.last().map(|r| r.weight_out)
}

/// Contiguous runs of weeks fed the same product: `(product, first, last)`.
pub fn feeding_phases(rows: &[WeekRow]) -> Vec<(&str, u32, u32)> {
    let mut phases: Vec<(&str, u32, u32)> = Vec::new();
    for row in rows {
        match phases.last_mut() {
            Some((product, _, last)) if *product == row.product && *last + 1 == row.week => {
                *last = row.week;
            }
            _ => phases.push((row.product.as_str(), row.week, row.week)),
        }
    }
    phases
}
