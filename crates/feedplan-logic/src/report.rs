//! Plain-text rendering of feed catalogs and projected schedules.

use std::fmt::{self, Write};

use crate::catalog::FeedCatalog;
use crate::coverage::gap_runs;
use crate::projection::WeekRow;

const RULE_WIDTH: usize = 80;

/// Format a value as Brazilian reais: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    // -0.004 rounds to 0,00 and prints without a sign
    let sign = if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };
    format!("R$ {sign}{grouped},{frac_part}")
}

/// Full catalog report: header, coverage over `weeks`, then every record.
pub fn render_catalog_report(catalog: &FeedCatalog, weeks: u32) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_catalog_report(&mut out, catalog, weeks);
    out
}

pub fn write_catalog_report<W: Write>(
    out: &mut W,
    catalog: &FeedCatalog,
    weeks: u32,
) -> fmt::Result {
    let rule = "=".repeat(RULE_WIDTH);
    let table = catalog.range_table();
    let coverage = table.validate_coverage(weeks);

    writeln!(out, "{rule}")?;
    writeln!(out, "FEED CATALOG REPORT")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "Version: {}",
        catalog.version.as_deref().unwrap_or("N/A")
    )?;
    writeln!(
        out,
        "Last updated: {}",
        catalog.last_updated.as_deref().unwrap_or("N/A")
    )?;
    writeln!(out, "Total records: {}", catalog.ranges.len())?;

    writeln!(out)?;
    writeln!(out, "Coverage: {:.1}%", coverage.coverage_percent)?;
    writeln!(
        out,
        "Weeks covered: {}/{}",
        coverage.covered_weeks, coverage.total_weeks
    )?;
    if coverage.complete {
        writeln!(out, "All weeks have a feed product defined.")?;
    } else {
        writeln!(
            out,
            "Weeks without coverage: {}",
            format_week_runs(&coverage.uncovered_weeks)
        )?;
    }

    let overlaps = table.overlaps();
    if !overlaps.is_empty() {
        writeln!(out, "Overlapping records (first listed wins):")?;
        for (a, b) in overlaps {
            writeln!(
                out,
                "  ID {} (weeks {}-{}) / ID {} (weeks {}-{})",
                a.id, a.week_start, a.week_end, b.id, b.week_start, b.week_end
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Records:")?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for range in &catalog.ranges {
        writeln!(
            out,
            "ID {}: Weeks {}-{}",
            range.id, range.week_start, range.week_end
        )?;
        writeln!(out, "  Product: {}", range.product)?;
        writeln!(
            out,
            "  Protein: {}% | Granularity: {}",
            range.protein_percent, range.granularity
        )?;
        writeln!(
            out,
            "  Price: {} | {}",
            format_brl(range.price_per_thousand),
            range.note
        )?;
        writeln!(out)?;
    }
    writeln!(out, "{rule}")
}

/// `[4, 5, 6, 9]` → `"4-6, 9"`.
pub fn format_week_runs(weeks: &[u32]) -> String {
    gap_runs(weeks)
        .iter()
        .map(|&(start, end)| {
            if start == end {
                start.to_string()
            } else {
                format!("{start}-{end}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Fixed-width table of projected weeks.
pub fn render_schedule(rows: &[WeekRow]) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_schedule(&mut out, rows);
    out
}

pub fn write_schedule<W: Write>(out: &mut W, rows: &[WeekRow]) -> fmt::Result {
    writeln!(
        out,
        "{:>4}  {:>8}  {:>8}  {:>12}  {:<28}  {:>7}  {:<12}",
        "Week", "In (g)", "Out (g)", "Grow (g/day)", "Product", "Prot %", "Granularity"
    )?;
    for r in rows {
        writeln!(
            out,
            "{:>4}  {:>8.2}  {:>8.2}  {:>12.2}  {:<28}  {:>7}  {:<12}",
            r.week,
            r.weight_in,
            r.weight_out,
            r.daily_growth,
            r.product,
            format!("{}%", r.protein_percent),
            r.granularity
        )?;
    }
    Ok(())
}
