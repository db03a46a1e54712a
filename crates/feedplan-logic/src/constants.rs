//! Schedule constants — growth ramp, cycle length, sentinel values.
//!
//! The growth ramp is fixed for the tilapia / net-tank scenario and is not
//! derived from any cultivation parameter.

pub mod growth {
    /// Daily growth during week 1 (g/day).
    pub const INITIAL_DAILY_GROWTH: f64 = 0.79;
    /// Increase of the daily growth rate from one week to the next (g/day).
    pub const WEEKLY_GROWTH_STEP: f64 = 0.01;
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

pub mod schedule {
    /// Length of a full grow-out cycle in weeks.
    pub const DEFAULT_WEEKS: u32 = 57;
    /// Longest schedule the harness will project (ten years).
    pub const MAX_WEEKS: u32 = 520;
}

/// Values written into a week row when no feed range covers the week.
pub mod sentinels {
    pub const UNDEFINED_PRODUCT: &str = "undefined";
    pub const NO_PROTEIN: f64 = 0.0;
    pub const NO_GRANULARITY: &str = "N/A";
    pub const NO_PRICE: f64 = 0.0;
    pub const NO_NOTE: &str = "";
}
