//! Plain-text rendering of report outcomes.
//!
//! These strings are what tool callers see. Percentages carry two decimals
//! and a `%` suffix, positions two decimals, counts are whole numbers.

use crate::models::{
    ComparisonRow, DateRange, Interval, Metric, NormalizedTable, Outcome, PeriodComparison, TopPage,
    TrendBucket,
};

pub const NO_SITES: &str = "No verified sites found.";
pub const NO_DATA: &str = "No data found for the specified parameters.";
pub const NO_DATA_EITHER_PERIOD: &str = "No data found for the specified parameters in either period.";

const RULE_WIDTH: usize = 80;
const PAGE_WIDTH: usize = 50;

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

pub fn sites(outcome: &Outcome<Vec<String>>) -> String {
    match outcome {
        Outcome::NoData => NO_SITES.to_string(),
        Outcome::Data(sites) => sites
            .iter()
            .map(|s| format!("- {}", s))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

// ---------------------------------------------------------------------------
// Raw analytics table
// ---------------------------------------------------------------------------

pub fn analytics(outcome: &Outcome<NormalizedTable>) -> String {
    let table = match outcome {
        Outcome::NoData => return NO_DATA.to_string(),
        Outcome::Data(table) => table,
    };

    let mut headers: Vec<&str> = table.dimensions.iter().map(|d| d.as_str()).collect();
    headers.extend(["clicks", "impressions", "ctr", "position"]);

    let rule_len = headers.iter().map(|h| h.len()).sum::<usize>() + 3 * headers.len();
    let mut lines = vec![headers.join(" | "), "-".repeat(rule_len)];

    for record in &table.records {
        let mut cells: Vec<String> = record.keys.iter().flatten().cloned().collect();
        cells.push(record.clicks.to_string());
        cells.push(record.impressions.to_string());
        cells.push(percent(record.ctr));
        cells.push(format!("{:.2}", record.position));
        lines.push(cells.join(" | "));
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Period comparison
// ---------------------------------------------------------------------------

const COMPARISON_COLUMNS: [&str; 15] = [
    "clicks_current",
    "clicks_previous",
    "clicks_change",
    "clicks_change_pct",
    "impressions_current",
    "impressions_previous",
    "impressions_change",
    "impressions_change_pct",
    "ctr_current",
    "ctr_previous",
    "ctr_change",
    "ctr_change_pct",
    "position_current",
    "position_previous",
    "position_change",
];

pub fn comparison(outcome: &Outcome<PeriodComparison>) -> String {
    let cmp = match outcome {
        Outcome::NoData => return NO_DATA_EITHER_PERIOD.to_string(),
        Outcome::Data(cmp) => cmp,
    };

    let mut lines = vec![
        "Comparison between:".to_string(),
        format!("Current period: {} to {}", cmp.current.start, cmp.current.end),
        format!("Previous period: {} to {}", cmp.previous.start, cmp.previous.end),
        String::new(),
    ];

    if cmp.is_totals() {
        lines.push("Overall Metrics:".to_string());
        if let Some(row) = cmp.rows.first() {
            lines.extend(overall_lines(row));
        }
        return lines.join("\n");
    }

    let headers: Vec<String> = cmp
        .dimensions
        .iter()
        .map(|d| d.as_str().to_string())
        .chain(COMPARISON_COLUMNS.iter().map(|c| c.to_string()))
        .collect();
    let rows: Vec<Vec<String>> = cmp.rows.iter().map(comparison_cells).collect();
    lines.push(aligned_table(&headers, &rows));

    lines.join("\n")
}

fn overall_lines(row: &ComparisonRow) -> Vec<String> {
    vec![
        format!(
            "Clicks: {} vs {} ({}, {:.2}%)",
            row.clicks_current, row.clicks_previous, row.clicks_change, row.clicks_change_pct
        ),
        format!(
            "Impressions: {} vs {} ({}, {:.2}%)",
            row.impressions_current,
            row.impressions_previous,
            row.impressions_change,
            row.impressions_change_pct
        ),
        format!(
            "CTR: {} vs {} ({}, {:.2}%)",
            percent(row.ctr_current),
            percent(row.ctr_previous),
            percent(row.ctr_change),
            row.ctr_change_pct
        ),
        format!(
            "Position: {:.2} vs {:.2} ({:.2})",
            row.position_current, row.position_previous, row.position_change
        ),
    ]
}

fn comparison_cells(row: &ComparisonRow) -> Vec<String> {
    let mut cells: Vec<String> = row
        .keys
        .iter()
        .map(|k| k.clone().unwrap_or_default())
        .collect();
    cells.extend([
        row.clicks_current.to_string(),
        row.clicks_previous.to_string(),
        row.clicks_change.to_string(),
        format!("{:.2}%", row.clicks_change_pct),
        row.impressions_current.to_string(),
        row.impressions_previous.to_string(),
        row.impressions_change.to_string(),
        format!("{:.2}%", row.impressions_change_pct),
        percent(row.ctr_current),
        percent(row.ctr_previous),
        percent(row.ctr_change),
        format!("{:.2}%", row.ctr_change_pct),
        format!("{:.2}", row.position_current),
        format!("{:.2}", row.position_previous),
        format!("{:.2}", row.position_change),
    ]);
    cells
}

/// Right-aligned columns separated by two spaces.
fn aligned_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:>w$}", c, w = *w))
            .collect::<Vec<_>>()
            .join("  ")
    };

    std::iter::once(line(headers))
        .chain(rows.iter().map(|r| line(r.as_slice())))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Top pages
// ---------------------------------------------------------------------------

pub fn top_pages(outcome: &Outcome<Vec<TopPage>>, range: &DateRange, metric: Metric, limit: usize) -> String {
    let pages = match outcome {
        Outcome::NoData => return NO_DATA.to_string(),
        Outcome::Data(pages) => pages,
    };

    let mut lines = vec![
        format!(
            "Top {} Pages by {} ({} to {}):",
            limit,
            metric.caption(),
            range.start,
            range.end
        ),
        "-".repeat(RULE_WIDTH),
        format!(
            "{:<50} | {:<10} | {:<12} | {:<8} | {:<8}",
            "Page", "Clicks", "Impressions", "CTR", "Position"
        ),
        "-".repeat(RULE_WIDTH),
    ];

    for page in pages {
        let name: String = page.page.chars().take(PAGE_WIDTH).collect();
        lines.push(format!(
            "{:<50} | {:<10.0} | {:<12.0} | {:<8.2}% | {:<8.2}",
            name,
            page.clicks,
            page.impressions,
            page.ctr * 100.0,
            page.position
        ));
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Trends
// ---------------------------------------------------------------------------

pub fn trends(outcome: &Outcome<Vec<TrendBucket>>, range: &DateRange, interval: Interval) -> String {
    let buckets = match outcome {
        Outcome::NoData => return NO_DATA.to_string(),
        Outcome::Data(buckets) => buckets,
    };

    let mut lines = vec![
        format!(
            "Search Trends by {} ({} to {}):",
            interval.caption(),
            range.start,
            range.end
        ),
        "-".repeat(RULE_WIDTH),
        format!(
            "{:<12} | {:<10} | {:<12} | {:<8} | {:<8}",
            "Date", "Clicks", "Impressions", "CTR", "Position"
        ),
        "-".repeat(RULE_WIDTH),
    ];

    for bucket in buckets {
        lines.push(format!(
            "{:<12} | {:<10} | {:<12} | {:<8.2}% | {:<8.2}",
            bucket.start.format("%Y-%m-%d").to_string(),
            bucket.clicks,
            bucket.impressions,
            bucket.ctr * 100.0,
            bucket.position
        ));
    }

    lines.join("\n")
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A `[0,1]` ratio as a percentage with two decimals.
fn percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}
