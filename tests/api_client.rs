mod common;

use common::{MockApi, MockResponse};
use datadeck::api::ApiClient;
use datadeck::catalog::Resource;
use datadeck::fetch::run_fetch;
use datadeck::query::{Filter, PageSize, QueryState};
use serde_json::{json, Value};

fn query(page: u64, page_size: PageSize, filter: Option<Filter>) -> QueryState {
    QueryState {
        page,
        page_size,
        filter,
        ..QueryState::default()
    }
}

#[tokio::test]
async fn listing_fetch_sends_limit_and_skip() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        json!({
            "users": [{"id": 11, "firstName": "Emily"}, {"id": 12, "firstName": "Liam"}],
            "total": 208
        })
        .to_string(),
    ))
    .await;

    let client = ApiClient::new(mock.base_url());
    let page = run_fetch(&client, Resource::Users, &query(3, PageSize::Ten, None))
        .await
        .unwrap();

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 208);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/users");
    assert_eq!(requests[0].query_value("limit"), Some("10"));
    assert_eq!(requests[0].query_value("skip"), Some("20"));
}

#[tokio::test]
async fn upstream_error_message_is_surfaced() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::error(404, "Products not found"))
        .await;

    let client = ApiClient::new(mock.base_url());
    let err = run_fetch(&client, Resource::Products, &query(1, PageSize::Five, None))
        .await
        .unwrap_err();

    assert_eq!(err.display_message(), "Products not found");
}

#[tokio::test]
async fn status_reason_is_used_when_body_has_no_message() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse {
        status: 503,
        body: "{}".to_string(),
    })
    .await;

    let client = ApiClient::new(mock.base_url());
    let err = run_fetch(&client, Resource::Users, &query(1, PageSize::Five, None))
        .await
        .unwrap_err();

    assert_eq!(err.display_message(), "503 Service Unavailable");
}

#[tokio::test]
async fn numeric_filter_fetches_full_batch_and_filters_locally() {
    let mock = MockApi::start().await;
    let users: Vec<Value> = (0..12)
        .map(|id| json!({"id": id, "age": if id % 2 == 0 { 30 } else { 31 }}))
        .collect();
    mock.enqueue(MockResponse::json(
        json!({"users": users, "total": 12}).to_string(),
    ))
    .await;

    let client = ApiClient::new(mock.base_url());
    let filter = Some(Filter::new("age", "30"));
    let page = run_fetch(&client, Resource::Users, &query(1, PageSize::Five, filter))
        .await
        .unwrap();

    assert_eq!(page.total, 6);
    assert_eq!(page.items.len(), 5);
    assert!(page
        .items
        .iter()
        .all(|item| item.get("age").and_then(Value::as_u64) == Some(30)));

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].query_value("limit"), Some("0"));
    assert_eq!(requests[0].query_value("skip"), None);
}

#[tokio::test]
async fn text_filter_uses_search_endpoint_with_field_recheck() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        json!({
            "users": [
                {"id": 1, "firstName": "John", "lastName": "Doe"},
                {"id": 2, "firstName": "Jane", "lastName": "Johnson"}
            ],
            "total": 2
        })
        .to_string(),
    ))
    .await;

    let client = ApiClient::new(mock.base_url());
    let filter = Some(Filter::new("firstName", "john"));
    let page = run_fetch(&client, Resource::Users, &query(1, PageSize::Five, filter))
        .await
        .unwrap();

    // "Johnson" matched upstream across all fields; the field-scoped
    // re-check keeps only the item whose firstName contains the term.
    assert_eq!(page.total, 1);
    assert_eq!(
        page.items[0].get("firstName").and_then(Value::as_str),
        Some("John")
    );

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/users/search");
    assert_eq!(requests[0].query_value("q"), Some("john"));
}

#[tokio::test]
async fn category_filter_uses_category_endpoint_with_safety_recheck() {
    let mock = MockApi::start().await;
    mock.enqueue(MockResponse::json(
        json!({
            "products": [
                {"id": 1, "category": "laptops"},
                {"id": 2, "category": "Laptops"},
                {"id": 3, "category": "smartphones"}
            ],
            "total": 3
        })
        .to_string(),
    ))
    .await;

    let client = ApiClient::new(mock.base_url());
    let filter = Some(Filter::new("category", "laptops"));
    let page = run_fetch(&client, Resource::Products, &query(1, PageSize::Five, filter))
        .await
        .unwrap();

    assert_eq!(page.total, 2);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/products/category/laptops");
}

#[tokio::test]
async fn transport_error_produces_a_display_string() {
    // Nothing listens on this port.
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = run_fetch(&client, Resource::Users, &query(1, PageSize::Five, None))
        .await
        .unwrap_err();

    assert!(!err.display_message().is_empty());
}
