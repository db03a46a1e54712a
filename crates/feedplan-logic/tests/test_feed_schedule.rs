//! Integration tests for the feeding schedule pipeline.
//!
//! Exercises: catalog JSON → RangeTable → coverage check → projection
//! → rendered report.
//!
//! All tests are pure logic apart from the temp-file loader checks.

use feedplan_logic::catalog::{load_catalog, parse_catalog, write_catalog, FeedCatalog};
use feedplan_logic::constants::schedule::DEFAULT_WEEKS;
use feedplan_logic::feed_range::FeedRange;
use feedplan_logic::projection::{project, round2};
use feedplan_logic::range_table::RangeTable;
use feedplan_logic::report::render_catalog_report;
use feedplan_logic::ProjectionError;
use proptest::prelude::*;

const BUNDLED_CATALOG: &str = include_str!("../../../data/feed_ranges.json");

// ── Helpers ────────────────────────────────────────────────────────────

fn bundled_table() -> RangeTable {
    parse_catalog(BUNDLED_CATALOG)
        .expect("bundled catalog parses")
        .into_range_table()
}

fn arb_range() -> impl Strategy<Value = FeedRange> {
    (1u32..60, 0u32..15, 0u32..1000).prop_map(|(start, len, id)| {
        FeedRange::new(id, start, start + len, format!("P{id}"))
    })
}

fn arb_table() -> impl Strategy<Value = RangeTable> {
    prop::collection::vec(arb_range(), 0..20).prop_map(RangeTable::new)
}

// ── Scenarios ──────────────────────────────────────────────────────────

#[test]
fn one_week_without_ranges() {
    let rows = project(1.0, 1, &RangeTable::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].week, 1);
    assert!((rows[0].weight_in - 1.0).abs() < 1e-9);
    assert!((rows[0].weight_out - 6.53).abs() < 1e-9);
    assert!((rows[0].daily_growth - 0.79).abs() < 1e-9);
    assert_eq!(rows[0].product, "undefined");
    assert_eq!(rows[0].protein_percent, 0.0);
    assert_eq!(rows[0].granularity, "N/A");
}

#[test]
fn coverage_of_single_starter_range() {
    let table = RangeTable::new(vec![FeedRange::new(1, 1, 3, "Starter")
        .with_protein(45.0)
        .with_granularity("fine")]);
    let report = table.validate_coverage(5);
    assert_eq!(report.covered_weeks, 3);
    assert_eq!(report.uncovered_weeks, vec![4, 5]);
    assert!(!report.complete);
    assert!((report.coverage_percent - 60.0).abs() < 1e-9);
}

#[test]
fn invalid_parameters_produce_no_rows() {
    let table = bundled_table();
    let err = project(1.0, 0, &table).unwrap_err();
    assert!(matches!(err, ProjectionError::InvalidParameter { .. }));
    assert!(project(-0.5, 10, &table).is_err());
    assert!(err.to_string().contains("week_count"));
}

// ── Bundled catalog ────────────────────────────────────────────────────

#[test]
fn bundled_catalog_covers_full_cycle() {
    let table = bundled_table();
    let report = table.validate_coverage(DEFAULT_WEEKS);
    assert!(report.complete, "gaps: {:?}", report.uncovered_weeks);
    assert_eq!(report.covered_weeks, DEFAULT_WEEKS);
    assert!(table.overlaps().is_empty());
}

#[test]
fn full_cycle_projection() {
    let table = bundled_table();
    let rows = project(1.0, DEFAULT_WEEKS, &table).unwrap();
    assert_eq!(rows.len(), DEFAULT_WEEKS as usize);
    assert!(rows.iter().all(|r| r.product != "undefined"));
    assert!((rows[56].daily_growth - 1.35).abs() < 1e-9);
    assert!((rows[0].weight_out - 6.53).abs() < 1e-9);
    assert!((rows[1].weight_out - 12.13).abs() < 1e-9);
    assert!((rows[56].weight_in - 418.48).abs() < 1e-9);
    assert!((rows[56].weight_out - 427.93).abs() < 1e-9);
}

#[test]
fn full_cycle_projection_from_three_decimal_fledgling() {
    // 0.015 is stored just below the tie: week 1 shows 0.01 and every
    // later week stays one cent under the 0.02 trajectory
    let rows = project(0.015, DEFAULT_WEEKS, &bundled_table()).unwrap();
    assert!((rows[0].weight_in - 0.01).abs() < 1e-9);
    assert!((rows[0].weight_out - 5.54).abs() < 1e-9);
    assert!((rows[1].weight_out - 11.14).abs() < 1e-9);
    assert!((rows[56].weight_in - 417.49).abs() < 1e-9);
    assert!((rows[56].weight_out - 426.94).abs() < 1e-9);

    let rows = project(2.345, DEFAULT_WEEKS, &bundled_table()).unwrap();
    assert!((rows[0].weight_in - 2.35).abs() < 1e-9);
    assert!((rows[0].weight_out - 7.88).abs() < 1e-9);
    assert!((rows[56].weight_out - 429.28).abs() < 1e-9);
}

#[test]
fn catalog_survives_disk_round_trip() {
    let catalog = parse_catalog(BUNDLED_CATALOG).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feed_ranges.json");
    let file = std::fs::File::create(&path).unwrap();
    write_catalog(file, &catalog).unwrap();

    let loaded: FeedCatalog = load_catalog(&path).unwrap();
    assert_eq!(loaded, catalog);
    assert_eq!(loaded.range_table().product(30), "Engorda 32");
}

#[test]
fn report_for_bundled_catalog() {
    let catalog = parse_catalog(BUNDLED_CATALOG).unwrap();
    let report = render_catalog_report(&catalog, DEFAULT_WEEKS);
    assert!(report.contains("Coverage: 100.0%"));
    assert!(report.contains("Weeks covered: 57/57"));
    assert!(report.contains("Total records: 7"));
}

// ── Properties ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn growth_rate_is_rounded_ramp(week_count in 1u32..120, initial in 0.1f64..500.0) {
        let rows = project(initial, week_count, &RangeTable::default()).unwrap();
        for (i, row) in rows.iter().enumerate() {
            let expected = round2(0.79 + i as f64 * 0.01);
            prop_assert!((row.daily_growth - expected).abs() < 1e-9);
            if i > 0 {
                prop_assert!(row.daily_growth > rows[i - 1].daily_growth);
            }
        }
    }

    #[test]
    fn weight_never_decreases(week_count in 1u32..120, initial in 0.1f64..500.0) {
        let rows = project(initial, week_count, &RangeTable::default()).unwrap();
        for (i, row) in rows.iter().enumerate() {
            prop_assert!(row.weight_out >= row.weight_in);
            prop_assert_eq!(row.week, i as u32 + 1);
            if i > 0 {
                prop_assert_eq!(row.weight_in, rows[i - 1].weight_out);
            }
        }
    }

    #[test]
    fn projection_is_idempotent(table in arb_table(), week_count in 1u32..80, initial in 0.1f64..50.0) {
        let first = project(initial, week_count, &table).unwrap();
        let second = project(initial, week_count, &table).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn coverage_counts_add_up(table in arb_table(), total in 1u32..100) {
        let report = table.validate_coverage(total);
        prop_assert_eq!(report.covered_weeks + report.uncovered_weeks.len() as u32, total);
        prop_assert_eq!(report.complete, report.uncovered_weeks.is_empty());
        prop_assert!(report.uncovered_weeks.windows(2).all(|w| w[0] < w[1]));
        for week in &report.uncovered_weeks {
            prop_assert!(table.lookup(*week).is_none());
        }
    }

    #[test]
    fn overlap_query_matches_definition(table in arb_table(), a in 1u32..80, len in 0u32..20) {
        let b = a + len;
        let hits = table.lookup_overlapping(a, b);
        let expected: Vec<&FeedRange> = table
            .records()
            .iter()
            .filter(|r| r.week_start <= b && r.week_end >= a)
            .collect();
        prop_assert_eq!(hits, expected);
    }

    #[test]
    fn lookup_returns_first_match(table in arb_table(), week in 1u32..80) {
        let first = table.records().iter().find(|r| r.week_start <= week && week <= r.week_end);
        prop_assert_eq!(table.lookup(week), first);
    }
}
