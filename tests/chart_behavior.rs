//! Behavior-driven tests for the trend command path: provider JSON in,
//! rendered chart out.

use tickergraph_core::{chart, history, HistoryError, Symbol};

fn acme() -> Symbol {
    Symbol::parse("ACME").expect("valid symbol")
}

#[test]
fn provider_json_becomes_a_dated_chart_with_a_scale_and_caption() {
    // Given: a chart payload the provider would return, out of date order
    let body = r#"[
        {"date": "2024-03-05", "low": 9.0, "close": 9.5, "high": 20.0},
        {"date": "2024-03-01", "low": 10.0, "close": 12.0, "high": 15.0},
        {"date": "2024-03-04", "low": 11.0, "close": 11.0, "high": 11.0}
    ]"#;

    // When: the user charts it at a fixed width
    let series = history::parse_series(&acme(), body).expect("series");
    let price_len = "9.50".len();
    let rendered =
        chart::render(&series, 80 + chart::fixed_overhead(price_len), price_len).expect("chart");

    // Then: rows come out in ascending date order with the range labels
    let dates: Vec<&str> = rendered
        .lines()
        .filter(|line| line.starts_with("2024-"))
        .map(|line| &line[..10])
        .collect();
    assert_eq!(dates, vec!["2024-03-01", "2024-03-04", "2024-03-05"]);
    assert!(rendered.contains("9.00"));
    assert!(rendered.contains("20.00"));
    assert!(rendered.contains("each column represents $"));
}

#[test]
fn days_without_usable_prices_are_dropped_not_fatal() {
    // Given: a payload mixing complete days with null and missing fields
    let body = r#"[
        {"date": "2024-03-01", "low": 10.0, "close": 12.0, "high": 15.0},
        {"date": "2024-03-04", "low": null, "close": 12.5, "high": 15.5},
        {"date": "2024-03-05", "close": 13.0},
        {"date": "2024-03-06", "low": 11.0, "close": 12.8, "high": 14.0}
    ]"#;

    // When: the payload is parsed
    let series = history::parse_series(&acme(), body).expect("series");

    // Then: only the two complete days chart
    assert_eq!(series.bars().len(), 2);
}

#[test]
fn a_payload_with_no_usable_days_reports_no_data() {
    let body = r#"[{"date": "2024-03-01", "close": 12.0}]"#;
    assert!(matches!(
        history::parse_series(&acme(), body),
        Err(HistoryError::NoData)
    ));
}
