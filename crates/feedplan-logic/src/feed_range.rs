//! A single feed rule: which product is fed over an inclusive week interval.
//!
//! Records are persisted with the catalog's Portuguese keys
//! (`semanas_inicio`, `produto`, ...). Optional fields fall back to the
//! same sentinel values a week row uses when nothing matches.

use serde::{Deserialize, Serialize};

use crate::constants::sentinels;

/// One feed-range record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedRange {
    /// Opaque identifier, only used for reporting.
    #[serde(default)]
    pub id: u32,
    /// First week covered (inclusive, 1-based).
    #[serde(rename = "semanas_inicio")]
    pub week_start: u32,
    /// Last week covered (inclusive).
    #[serde(rename = "semanas_fim")]
    pub week_end: u32,
    /// Display name of the feed product.
    #[serde(rename = "produto")]
    pub product: String,
    /// Crude protein content, 0–100.
    #[serde(rename = "proteina", default)]
    pub protein_percent: f64,
    /// Pellet / grain size label.
    #[serde(rename = "granulometria", default = "default_granularity")]
    pub granularity: String,
    /// Price per thousand (BRL).
    #[serde(rename = "preco", default)]
    pub price_per_thousand: f64,
    #[serde(rename = "observacao", default)]
    pub note: String,
}

fn default_granularity() -> String {
    sentinels::NO_GRANULARITY.to_string()
}

impl FeedRange {
    /// Create a record with only the required fields set.
    pub fn new(id: u32, week_start: u32, week_end: u32, product: impl Into<String>) -> Self {
        Self {
            id,
            week_start,
            week_end,
            product: product.into(),
            protein_percent: sentinels::NO_PROTEIN,
            granularity: default_granularity(),
            price_per_thousand: sentinels::NO_PRICE,
            note: sentinels::NO_NOTE.to_string(),
        }
    }

    pub fn with_protein(mut self, percent: f64) -> Self {
        self.protein_percent = percent;
        self
    }

    pub fn with_granularity(mut self, granularity: impl Into<String>) -> Self {
        self.granularity = granularity.into();
        self
    }

    pub fn with_price(mut self, price_per_thousand: f64) -> Self {
        self.price_per_thousand = price_per_thousand;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Whether `week` falls inside `[week_start, week_end]`.
    pub fn covers(&self, week: u32) -> bool {
        self.week_start <= week && week <= self.week_end
    }

    /// Whether this record intersects the closed interval `[start, end]`.
    pub fn intersects(&self, start: u32, end: u32) -> bool {
        self.week_start <= end && self.week_end >= start
    }

    /// Whether two records share at least one week.
    pub fn overlaps(&self, other: &FeedRange) -> bool {
        self.is_well_formed()
            && other.is_well_formed()
            && self.intersects(other.week_start, other.week_end)
    }

    /// `week_start ≤ week_end`, both ≥ 1.
    pub fn is_well_formed(&self) -> bool {
        self.week_start >= 1 && self.week_start <= self.week_end
    }

    /// Number of weeks in the interval (0 for a reversed interval).
    pub fn span(&self) -> u32 {
        if self.week_start > self.week_end {
            0
        } else {
            self.week_end - self.week_start + 1
        }
    }
}
