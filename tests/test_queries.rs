//! Tests for the query interfaces against a canned `SearchApi`.

mod common;

use common::{row, FakeApi};
use search_console_sdk::models::{
    DateRange, Dimension, Interval, Metric, Outcome, SearchType,
};
use search_console_sdk::queries::{AnalyticsParams, ComparisonParams};
use search_console_sdk::{render, SearchConsoleError};

const SITE: &str = "sc-domain:example.com";

// ---------------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------------

#[test]
fn sites_are_listed_in_api_order() {
    let (console, _) = FakeApi::new()
        .with_sites(&["https://www.example.com/", "sc-domain:example.org"])
        .into_console();

    let outcome = console.sites().list().unwrap();
    assert_eq!(
        outcome,
        Outcome::Data(vec![
            "https://www.example.com/".to_string(),
            "sc-domain:example.org".to_string()
        ])
    );
    assert_eq!(
        render::sites(&outcome),
        "- https://www.example.com/\n- sc-domain:example.org"
    );
}

#[test]
fn no_sites_is_no_data() {
    let (console, _) = FakeApi::new().into_console();
    let outcome = console.sites().list().unwrap();
    assert!(outcome.is_no_data());
    assert_eq!(render::sites(&outcome), "No verified sites found.");
}

// ---------------------------------------------------------------------------
// Raw analytics
// ---------------------------------------------------------------------------

#[test]
fn analytics_sends_requested_fields() {
    let (console, log) = FakeApi::new()
        .respond("2024-01-01", vec![row(&["rust", "MOBILE"], 12.0, 300.0, 0.04, 3.456)])
        .into_console();

    let params = AnalyticsParams::new(SITE, "2024-01-01", "2024-01-31")
        .dimensions(&[Dimension::Query, Dimension::Device])
        .search_type(SearchType::Image)
        .row_limit(50);
    let outcome = console.analytics().query(&params).unwrap();

    let requests = log.lock().unwrap();
    assert_eq!(requests.len(), 1);
    let (site, request) = &requests[0];
    assert_eq!(site, SITE);
    assert_eq!(request.start_date, "2024-01-01");
    assert_eq!(request.end_date, "2024-01-31");
    assert_eq!(request.dimensions, vec![Dimension::Query, Dimension::Device]);
    assert_eq!(request.search_type, SearchType::Image);
    assert_eq!(request.row_limit, 50);

    let table = outcome.data().unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.records[0].clicks, 12);
}

#[test]
fn analytics_request_serializes_in_api_casing() {
    let (console, log) = FakeApi::new().into_console();
    let params = AnalyticsParams::new(SITE, "2024-01-01", "2024-01-31")
        .search_type(SearchType::GoogleNews);
    console.analytics().query(&params).unwrap();

    let body = serde_json::to_value(&log.lock().unwrap()[0].1).unwrap();
    assert_eq!(body["startDate"], "2024-01-01");
    assert_eq!(body["searchType"], "googleNews");
    assert_eq!(body["rowLimit"], 1000);
    assert_eq!(body["dimensions"], serde_json::json!([]));
}

#[test]
fn analytics_renders_pipe_table() {
    let (console, _) = FakeApi::new()
        .respond("2024-01-01", vec![row(&["rust"], 12.0, 300.0, 0.04, 3.456)])
        .into_console();
    let params = AnalyticsParams::new(SITE, "2024-01-01", "2024-01-31").dimensions(&[Dimension::Query]);

    let text = render::analytics(&console.analytics().query(&params).unwrap());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "query | clicks | impressions | ctr | position");
    assert_eq!(lines[1], "-".repeat(48));
    assert_eq!(lines[2], "rust | 12 | 300 | 4.00% | 3.46");
}

#[test]
fn analytics_without_rows_is_no_data() {
    let (console, _) = FakeApi::new().into_console();
    let params = AnalyticsParams::new(SITE, "2024-01-01", "2024-01-31");
    let outcome = console.analytics().query(&params).unwrap();
    assert!(outcome.is_no_data());
    assert_eq!(
        render::analytics(&outcome),
        "No data found for the specified parameters."
    );
}

#[test]
fn out_of_range_row_limit_is_rejected_before_any_request() {
    let (console, log) = FakeApi::new().into_console();
    for limit in [0, 25_001] {
        let params = AnalyticsParams::new(SITE, "2024-01-01", "2024-01-31").row_limit(limit);
        let err = console.analytics().query(&params).unwrap_err();
        assert!(matches!(err, SearchConsoleError::InvalidArgument(_)));
        assert_eq!(err.to_string(), "row_limit must be between 1 and 25000");
    }
    assert!(log.lock().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

fn comparison_params() -> ComparisonParams {
    ComparisonParams::new(
        SITE,
        DateRange::new("2024-02-01", "2024-02-29"),
        DateRange::new("2024-01-01", "2024-01-31"),
    )
}

#[test]
fn comparison_queries_current_then_previous() {
    let (console, log) = FakeApi::new()
        .respond("2024-02-01", vec![row(&[], 40.0, 1000.0, 0.04, 5.0)])
        .respond("2024-01-01", vec![row(&[], 20.0, 800.0, 0.025, 6.5)])
        .into_console();

    let outcome = console.comparison().compare(&comparison_params()).unwrap();

    let starts: Vec<String> = log
        .lock()
        .unwrap()
        .iter()
        .map(|(_, r)| r.start_date.clone())
        .collect();
    assert_eq!(starts, vec!["2024-02-01", "2024-01-01"]);

    let text = render::comparison(&outcome);
    let expected = [
        "Comparison between:",
        "Current period: 2024-02-01 to 2024-02-29",
        "Previous period: 2024-01-01 to 2024-01-31",
        "",
        "Overall Metrics:",
        "Clicks: 40 vs 20 (20, 100.00%)",
        "Impressions: 1000 vs 800 (200, 25.00%)",
        "CTR: 4.00% vs 2.50% (1.50%, 60.00%)",
        "Position: 5.00 vs 6.50 (1.50)",
    ];
    assert_eq!(text, expected.join("\n"));
}

#[test]
fn comparison_by_dimension_renders_aligned_table() {
    let (console, _) = FakeApi::new()
        .respond("2024-02-01", vec![row(&["/docs"], 8.0, 80.0, 0.1, 2.0)])
        .respond("2024-01-01", vec![row(&["/blog"], 4.0, 40.0, 0.1, 3.0)])
        .into_console();
    let params = comparison_params().dimensions(&[Dimension::Page]);

    let text = render::comparison(&console.comparison().compare(&params).unwrap());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 7);
    assert!(lines[4].trim_start().starts_with("page  clicks_current"));
    assert!(lines[5].trim_start().starts_with("/docs"));
    assert!(lines[6].trim_start().starts_with("/blog"));
    // right-aligned columns share a width
    assert_eq!(lines[4].len(), lines[5].len());
}

#[test]
fn comparison_with_no_rows_in_either_period() {
    let (console, log) = FakeApi::new().into_console();
    let outcome = console.comparison().compare(&comparison_params()).unwrap();
    assert!(outcome.is_no_data());
    assert_eq!(log.lock().unwrap().len(), 2);
    assert_eq!(
        render::comparison(&outcome),
        "No data found for the specified parameters in either period."
    );
}

// ---------------------------------------------------------------------------
// Top content
// ---------------------------------------------------------------------------

fn page_rows() -> FakeApi {
    FakeApi::new().respond(
        "2024-03-01",
        vec![
            row(&["/a"], 5.0, 50.0, 0.1, 8.0),
            row(&["/b"], 9.0, 90.0, 0.1, 4.0),
            row(&["/c"], 1.0, 10.0, 0.1, 2.0),
        ],
    )
}

fn pages(outcome: Outcome<Vec<search_console_sdk::models::TopPage>>) -> Vec<String> {
    outcome.data().unwrap().into_iter().map(|p| p.page).collect()
}

#[test]
fn top_pages_by_clicks_descend_and_respect_limit() {
    let (console, log) = page_rows().into_console();
    let range = DateRange::new("2024-03-01", "2024-03-31");

    let outcome = console.top_content().top_pages(SITE, &range, Metric::Clicks, 2).unwrap();
    assert_eq!(pages(outcome), vec!["/b", "/a"]);

    let requests = log.lock().unwrap();
    let request = &requests[0].1;
    assert_eq!(request.dimensions, vec![Dimension::Page]);
    assert_eq!(request.search_type, SearchType::Web);
    assert_eq!(request.row_limit, 1000);
}

#[test]
fn top_pages_by_position_ascend() {
    let (console, _) = page_rows().into_console();
    let range = DateRange::new("2024-03-01", "2024-03-31");
    let outcome = console.top_content().top_pages(SITE, &range, Metric::Position, 10).unwrap();
    assert_eq!(pages(outcome), vec!["/c", "/b", "/a"]);
}

#[test]
fn top_pages_render_fixed_width_rows() {
    let (console, _) = page_rows().into_console();
    let range = DateRange::new("2024-03-01", "2024-03-31");
    let outcome = console.top_content().top_pages(SITE, &range, Metric::Ctr, 1).unwrap();

    let text = render::top_pages(&outcome, &range, Metric::Ctr, 1);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Top 1 Pages by Ctr (2024-03-01 to 2024-03-31):");
    assert_eq!(lines[1], "-".repeat(80));
    assert!(lines[2].starts_with("Page"));
    assert!(lines[4].starts_with("/a "));
    assert!(lines[4].contains("| 10.00   % |"));
    assert_eq!(lines.len(), 5);
}

#[test]
fn top_pages_truncates_long_urls() {
    let long = format!("/{}", "x".repeat(80));
    let (console, _) = FakeApi::new()
        .respond("2024-03-01", vec![row(&[long.as_str()], 1.0, 1.0, 1.0, 1.0)])
        .into_console();
    let range = DateRange::new("2024-03-01", "2024-03-31");
    let outcome = console.top_content().top_pages(SITE, &range, Metric::Clicks, 10).unwrap();

    let text = render::top_pages(&outcome, &range, Metric::Clicks, 10);
    let last = text.lines().last().unwrap();
    assert!(last.starts_with(&long[..50]));
    assert_eq!(&last[50..53], " | ");
}

// ---------------------------------------------------------------------------
// Trends
// ---------------------------------------------------------------------------

#[test]
fn monthly_trends_are_bucketed_and_rendered() {
    let (console, log) = FakeApi::new()
        .respond(
            "2024-01-01",
            vec![
                row(&["2024-02-03"], 4.0, 40.0, 0.1, 2.0),
                row(&["2024-01-05"], 2.0, 20.0, 0.1, 3.0),
                row(&["2024-01-20"], 4.0, 40.0, 0.1, 5.0),
            ],
        )
        .into_console();
    let range = DateRange::new("2024-01-01", "2024-02-29");

    let outcome = console.trends().trends(SITE, &range, Interval::Month).unwrap();
    assert_eq!(log.lock().unwrap()[0].1.dimensions, vec![Dimension::Date]);

    let text = render::trends(&outcome, &range, Interval::Month);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Search Trends by Month (2024-01-01 to 2024-02-29):");
    assert!(lines[2].starts_with("Date         | Clicks"));
    assert!(lines[4].starts_with("2024-01-01   | 6          | 60           | 10.00   % | 4.00"));
    assert!(lines[5].starts_with("2024-02-01   | 4 "));
    assert_eq!(lines.len(), 6);
}

#[test]
fn trends_without_rows_is_no_data() {
    let (console, _) = FakeApi::new().into_console();
    let range = DateRange::new("2024-01-01", "2024-01-31");
    let outcome = console.trends().trends(SITE, &range, Interval::Week).unwrap();
    assert!(outcome.is_no_data());
    assert_eq!(
        render::trends(&outcome, &range, Interval::Week),
        "No data found for the specified parameters."
    );
}

#[test]
fn trends_with_unparsable_date_fails() {
    let (console, _) = FakeApi::new()
        .respond("2024-01-01", vec![row(&["not-a-date"], 1.0, 10.0, 0.1, 2.0)])
        .into_console();
    let range = DateRange::new("2024-01-01", "2024-01-31");

    let err = console.trends().trends(SITE, &range, Interval::Week).unwrap_err();
    assert!(matches!(err, SearchConsoleError::InvalidDate(_)));
    assert!(err.to_tool_text().starts_with("Error: Invalid date:"));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn api_errors_propagate() {
    let (console, _) = FakeApi::new()
        .failing(403, "User does not have sufficient permission")
        .into_console();

    let err = console.sites().list().unwrap_err();
    assert!(matches!(err, SearchConsoleError::Api { status: 403, .. }));

    let range = DateRange::new("2024-01-01", "2024-01-31");
    let err = console.trends().trends(SITE, &range, Interval::Day).unwrap_err();
    assert_eq!(
        err.to_tool_text(),
        "Error: Search Console API error (403): User does not have sufficient permission"
    );
}
