//! Pure feeding-schedule logic for tilapia net-tank cultivation.
//!
//! This crate contains the weekly growth projection and the feed-range
//! lookup that decides which product is fed in which week. Functions take
//! plain data and return results, so everything here is unit-testable and
//! usable from the headless harness or any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Persisted feed catalog document, JSON reader/writer |
//! | [`constants`] | Growth ramp, default cycle length, sentinel values |
//! | [`coverage`] | Week coverage / gap diagnostics over a range collection |
//! | [`cultivation`] | Cultivation parameters and their validation |
//! | [`error`] | Projection and catalog error types |
//! | [`feed_range`] | A single feed rule covering an inclusive week interval |
//! | [`projection`] | Weekly growth projection joined against the range table |
//! | [`range_table`] | Ordered, first-match-wins lookup over feed ranges |
//! | [`report`] | Plain-text catalog and schedule rendering, BRL formatting |
//!
//! ```
//! use feedplan_logic::feed_range::FeedRange;
//! use feedplan_logic::projection::project;
//! use feedplan_logic::range_table::RangeTable;
//!
//! let table = RangeTable::new(vec![FeedRange::new(1, 1, 3, "Starter")]);
//! let rows = project(1.0, 4, &table).unwrap();
//! assert_eq!(rows[0].product, "Starter");
//! assert_eq!(rows[3].product, "undefined");
//! ```

pub mod catalog;
pub mod constants;
pub mod coverage;
pub mod cultivation;
pub mod error;
pub mod feed_range;
pub mod projection;
pub mod range_table;
pub mod report;

pub use error::{CatalogError, ProjectionError};
