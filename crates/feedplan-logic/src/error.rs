//! Error types for projection and catalog loading.
//!
//! A week with no matching feed range is not an error; it is reported
//! through coverage and filled with sentinel values.

use std::path::PathBuf;

use thiserror::Error;

/// Out-of-domain input to the growth projection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl ProjectionError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Failure to read or decode a persisted feed catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
