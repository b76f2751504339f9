use glamping_api::types::{StatisticsStep, StatisticsType};
use glamping_api::{FilterMap, ListQuery, Query, StatisticsQuery};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com/api/reserves").unwrap()
}

#[test]
fn list_query_defaults_to_first_page() {
    let url = ListQuery::default().add_to_url(&base_url());
    assert_eq!(url.query(), Some("page=1"));
}

#[test]
fn list_query_with_filters() {
    let url = ListQuery::default()
        .with_page(4)
        .with_filter("dateFrom", "2024-01-01")
        .with_filter("dateTo", "2024-01-31")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("page=4"));
    assert!(query.contains("dateFrom=2024-01-01"));
    assert!(query.contains("dateTo=2024-01-31"));
}

#[test]
fn list_query_encodes_filter_values() {
    let url = ListQuery::default()
        .with_filter("email", "ana+admin@example.com")
        .with_filter("title", "Forest Cabin")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("email=ana%2Badmin%40example.com"));
    assert!(query.contains("title=Forest+Cabin"));
}

#[test]
fn with_filters_replaces_previous_filters() {
    let filters: FilterMap = [("status", "PAID")].into_iter().collect();
    let url = ListQuery::default()
        .with_filter("title", "stale")
        .with_filters(filters)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("status=PAID"));
    assert!(!query.contains("title"));
}

#[test]
fn filter_map_keys_are_sorted() {
    let filters: FilterMap = [("zeta", "1"), ("alpha", "2")].into_iter().collect();
    let keys: Vec<&str> = filters.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["alpha", "zeta"]);
}

#[test]
fn statistics_query_parameters() {
    let url = StatisticsQuery::default()
        .with_step(StatisticsStep::Week)
        .with_type(StatisticsType::Accumulated)
        .add_to_url(&Url::parse("https://example.com/api/statistics/net-sales").unwrap());
    assert_eq!(url.query(), Some("step=week&type=accumulated"));
}

#[test]
fn statistics_query_defaults() {
    let url = StatisticsQuery::default()
        .add_to_url(&Url::parse("https://example.com/api/statistics/net-sales").unwrap());
    assert_eq!(url.query(), Some("step=month&type=period"));
}
