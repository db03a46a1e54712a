//! Cultivation parameters for a net-tank batch.
//!
//! This is the data model behind the parameter form a front end shows
//! before a schedule is generated, plus list-style validation so a form
//! can show every problem at once.
//!
//! ```
//! use feedplan_logic::cultivation::{validate_params, CultivationParams};
//!
//! let params = CultivationParams {
//!     fledgling_weight_grams: 1.5,
//!     survival_percent: 92.0,
//!     ..CultivationParams::default()
//! };
//! assert!(validate_params(&params).is_empty());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ProjectionError;
use crate::projection::{project, WeekRow};
use crate::range_table::RangeTable;

/// Smallest fledgling weight the form accepts (g).
pub const MIN_FLEDGLING_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Species {
    #[default]
    Tilapia,
}

impl Species {
    pub fn label(self) -> &'static str {
        match self {
            Species::Tilapia => "Tilápia",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CultivationSystem {
    #[default]
    NetTank,
}

impl CultivationSystem {
    pub fn label(self) -> &'static str {
        match self {
            CultivationSystem::NetTank => "Tanque-Rede",
        }
    }
}

/// Parameters describing one cultivation batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CultivationParams {
    pub species: Species,
    pub system: CultivationSystem,
    /// Stocking density (fish/m³).
    pub density_per_m3: f64,
    /// Expected final survival (%).
    pub survival_percent: f64,
    /// Fledgling weight at stocking (g).
    pub fledgling_weight_grams: f64,
    /// Share of nutrition coming from commercial feed (%).
    pub feed_share_percent: f64,
    pub fish_count: u32,
    /// Fledgling price per thousand (BRL).
    pub fledgling_price_per_thousand: f64,
    /// Water temperature (°C).
    pub temperature_celsius: f64,
}

impl Default for CultivationParams {
    fn default() -> Self {
        Self {
            species: Species::Tilapia,
            system: CultivationSystem::NetTank,
            density_per_m3: 0.0,
            survival_percent: 0.0,
            fledgling_weight_grams: MIN_FLEDGLING_WEIGHT,
            feed_share_percent: 0.0,
            fish_count: 0,
            fledgling_price_per_thousand: 0.0,
            temperature_celsius: 0.0,
        }
    }
}

impl CultivationParams {
    /// Project the weekly schedule for this batch.
    pub fn schedule(
        &self,
        table: &RangeTable,
        weeks: u32,
    ) -> Result<Vec<WeekRow>, ProjectionError> {
        project(self.fledgling_weight_grams, weeks, table)
    }
}

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("survival must be between 0 and 100%, got {0}")]
    SurvivalOutOfRange(f64),
    #[error("feed share must be between 0 and 100%, got {0}")]
    FeedShareOutOfRange(f64),
    #[error("fledgling weight must be at least 0.1 g, got {0}")]
    FledglingTooSmall(f64),
    #[error("stocking density cannot be negative, got {0}")]
    NegativeDensity(f64),
    #[error("fledgling price cannot be negative, got {0}")]
    NegativePrice(f64),
    #[error("temperature must be a finite number")]
    NonFiniteTemperature,
}

fn in_percent_range(value: f64) -> bool {
    (0.0..=100.0).contains(&value)
}

/// Validate cultivation parameters, returning all errors found.
pub fn validate_params(params: &CultivationParams) -> Vec<ParamError> {
    let mut errors = Vec::new();

    if !in_percent_range(params.survival_percent) {
        errors.push(ParamError::SurvivalOutOfRange(params.survival_percent));
    }
    if !in_percent_range(params.feed_share_percent) {
        errors.push(ParamError::FeedShareOutOfRange(params.feed_share_percent));
    }
    let fledgling = params.fledgling_weight_grams;
    if fledgling.is_nan() || fledgling < MIN_FLEDGLING_WEIGHT {
        errors.push(ParamError::FledglingTooSmall(fledgling));
    }
    if params.density_per_m3.is_nan() || params.density_per_m3 < 0.0 {
        errors.push(ParamError::NegativeDensity(params.density_per_m3));
    }
    let price = params.fledgling_price_per_thousand;
    if price.is_nan() || price < 0.0 {
        errors.push(ParamError::NegativePrice(price));
    }
    if !params.temperature_celsius.is_finite() {
        errors.push(ParamError::NonFiniteTemperature);
    }

    errors
}
