//! Feedplan Headless Schedule Harness
//!
//! Loads a feed catalog, checks week coverage, projects the weekly growth
//! and feeding table and prints it. Runs entirely in-process — no UI.
//!
//! Usage:
//!   cargo run -p feedplan-simtest
//!   cargo run -p feedplan-simtest -- --fledgling 1.5 --weeks 30 --report
//!   cargo run -p feedplan-simtest -- --data path/to/feed_ranges.json --json

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use feedplan_logic::catalog::{load_catalog, parse_catalog};
use feedplan_logic::constants::schedule::{DEFAULT_WEEKS, MAX_WEEKS};
use feedplan_logic::cultivation::{validate_params, CultivationParams};
use feedplan_logic::projection::{feeding_phases, final_weight};
use feedplan_logic::range_table::RangeTable;
use feedplan_logic::report::{
    format_brl, format_week_runs, render_catalog_report, render_schedule,
};
use tracing_subscriber::EnvFilter;

// ── Bundled catalog (used when no --data is given) ──────────────────────
const BUNDLED_CATALOG: &str = include_str!("../../../data/feed_ranges.json");

#[derive(Debug, Parser)]
#[command(name = "feedplan", about = "Weekly tilapia net-tank feeding schedule")]
struct Cli {
    /// Feed catalog JSON file (defaults to the bundled catalog).
    #[arg(long)]
    data: Option<PathBuf>,

    /// Number of weeks to project.
    #[arg(
        long,
        default_value_t = DEFAULT_WEEKS,
        value_parser = clap::value_parser!(u32).range(1..=MAX_WEEKS as i64)
    )]
    weeks: u32,

    /// Fledgling weight at stocking (g).
    #[arg(long)]
    fledgling: Option<f64>,

    /// Number of fish stocked.
    #[arg(long, default_value_t = 0)]
    fish: u32,

    /// Fledgling price per thousand (BRL).
    #[arg(long, default_value_t = 0.0)]
    price: f64,

    /// Print the catalog report before the schedule.
    #[arg(long)]
    report: bool,

    /// Emit the schedule as JSON instead of a table.
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr (overridden by RUST_LOG).
    #[arg(long, short)]
    verbose: bool,
}

// ── Logging ─────────────────────────────────────────────────────────────

/// `RUST_LOG` wins over `--verbose`. The library logs through the `log`
/// facade; the subscriber picks those records up as well.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let catalog = match &cli.data {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading feed catalog {}", path.display()))?,
        None => parse_catalog(BUNDLED_CATALOG).context("parsing bundled feed catalog")?,
    };
    tracing::debug!(
        "catalog version {} with {} ranges",
        catalog.version.as_deref().unwrap_or("N/A"),
        catalog.ranges.len()
    );

    let table = catalog.range_table();
    check_coverage(&table, cli.weeks);

    let defaults = CultivationParams::default();
    let params = CultivationParams {
        fledgling_weight_grams: cli.fledgling.unwrap_or(defaults.fledgling_weight_grams),
        fish_count: cli.fish,
        fledgling_price_per_thousand: cli.price,
        ..defaults
    };
    let errors = validate_params(&params);
    if !errors.is_empty() {
        for e in &errors {
            tracing::error!("{}", e);
        }
        bail!("{} invalid cultivation parameter(s)", errors.len());
    }

    if cli.report {
        print!("{}", render_catalog_report(&catalog, cli.weeks));
        println!();
    }

    let rows = params.schedule(&table, cli.weeks)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "=== Feeding Schedule: {} / {} ===\n",
        params.species.label(),
        params.system.label()
    );
    print!("{}", render_schedule(&rows));

    println!();
    for (product, first, last) in feeding_phases(&rows) {
        println!("  weeks {:>2}-{:<2}  {}", first, last, product);
    }
    if let Some(weight) = final_weight(&rows) {
        println!("\nFinal weight after {} weeks: {:.2} g", cli.weeks, weight);
    }
    if params.fish_count > 0 {
        println!(
            "Fledglings: {} at {} per thousand",
            params.fish_count,
            format_brl(params.fledgling_price_per_thousand)
        );
    }

    Ok(())
}

/// Warn about gaps; a gap is not fatal, affected weeks get sentinel values.
fn check_coverage(table: &RangeTable, weeks: u32) {
    let coverage = table.validate_coverage(weeks);
    if !coverage.complete {
        tracing::warn!(
            "Feed catalog incomplete ({:.1}% of {} weeks). Weeks without coverage: {}",
            coverage.coverage_percent,
            weeks,
            format_week_runs(&coverage.uncovered_weeks)
        );
    }
    for (a, b) in table.overlaps() {
        tracing::warn!(
            "Feed ranges {} and {} overlap; weeks {}-{} use {}",
            a.id,
            b.id,
            a.week_start.max(b.week_start),
            a.week_end.min(b.week_end),
            a.product
        );
    }
}
