//! Persisted feed catalog — the JSON document feed ranges are loaded from.
//!
//! ```json
//! {
//!   "versao": "2.1",
//!   "ultima_atualizacao": "2024-03-01",
//!   "configuracoes": [
//!     { "id": 1, "semanas_inicio": 1, "semanas_fim": 2, "produto": "Starter 55", ... }
//!   ]
//! }
//! ```
//!
//! Two loading flavours exist: [`load_catalog`] surfaces every failure to the
//! caller, [`load_catalog_or_empty`] logs the failure and hands back an empty
//! catalog so a schedule can still be produced (with sentinel feed values).

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::feed_range::FeedRange;
use crate::range_table::RangeTable;

/// Feed catalog document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedCatalog {
    #[serde(rename = "versao", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(
        rename = "ultima_atualizacao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<String>,
    /// Feed ranges in file order.
    #[serde(rename = "configuracoes", default)]
    pub ranges: Vec<FeedRange>,
}

impl FeedCatalog {
    pub fn new(ranges: Vec<FeedRange>) -> Self {
        Self {
            ranges,
            ..Self::default()
        }
    }

    /// Build a lookup table over a copy of the ranges.
    pub fn range_table(&self) -> RangeTable {
        RangeTable::new(self.ranges.clone())
    }

    pub fn into_range_table(self) -> RangeTable {
        RangeTable::new(self.ranges)
    }
}

/// Parse a catalog from a JSON string.
pub fn parse_catalog(json: &str) -> Result<FeedCatalog, CatalogError> {
    Ok(serde_json::from_str(json)?)
}

/// Read a catalog from any JSON source.
pub fn read_catalog<R: Read>(reader: R) -> Result<FeedCatalog, CatalogError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<FeedCatalog, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let catalog = read_catalog(BufReader::new(file))?;
    log::info!(
        "Feed catalog loaded: {} ({} ranges)",
        path.display(),
        catalog.ranges.len()
    );
    Ok(catalog)
}

/// Load a catalog file, falling back to an empty catalog on any failure.
pub fn load_catalog_or_empty(path: impl AsRef<Path>) -> FeedCatalog {
    match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(e) => {
            log::error!("{}", e);
            FeedCatalog::default()
        }
    }
}

/// Write a catalog as pretty-printed JSON.
pub fn write_catalog<W: Write>(writer: W, catalog: &FeedCatalog) -> Result<(), CatalogError> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, catalog)?;
    writer.flush()?;
    Ok(())
}
