use datadeck::catalog::Resource;
use datadeck::fetch::{plan, Reconcile};
use datadeck::query::{Filter, PageSize, QueryState};

fn query(page: u64, page_size: PageSize, filter: Option<Filter>) -> QueryState {
    QueryState {
        page,
        page_size,
        filter,
        ..QueryState::default()
    }
}

fn query_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[test]
fn no_filter_uses_listing_with_limit_and_skip() {
    let plan = plan(Resource::Users, &query(3, PageSize::Ten, None));

    assert_eq!(plan.path, "/users");
    assert_eq!(query_value(&plan.query, "limit"), Some("10"));
    assert_eq!(query_value(&plan.query, "skip"), Some("20"));
    assert_eq!(plan.reconcile, Reconcile::Upstream);
}

#[test]
fn first_page_skips_nothing() {
    let plan = plan(Resource::Products, &query(1, PageSize::Five, None));

    assert_eq!(query_value(&plan.query, "limit"), Some("5"));
    assert_eq!(query_value(&plan.query, "skip"), Some("0"));
}

#[test]
fn numeric_field_scans_the_full_collection() {
    let filter = Some(Filter::new("age", "30"));
    let plan = plan(Resource::Users, &query(1, PageSize::Five, filter));

    assert_eq!(plan.path, "/users");
    assert_eq!(query_value(&plan.query, "limit"), Some("0"));
    assert_eq!(query_value(&plan.query, "skip"), None);
    assert_eq!(
        plan.reconcile,
        Reconcile::NumericEq {
            field: "age".to_string(),
            value: "30".to_string(),
        }
    );
}

#[test]
fn product_price_is_numeric_too() {
    let filter = Some(Filter::new("price", "9.99"));
    let plan = plan(Resource::Products, &query(1, PageSize::Five, filter));

    assert!(matches!(plan.reconcile, Reconcile::NumericEq { .. }));
    assert_eq!(plan.path, "/products");
}

#[test]
fn category_filter_routes_to_category_endpoint() {
    let filter = Some(Filter::new("category", "Laptops"));
    let plan = plan(Resource::Products, &query(1, PageSize::Five, filter));

    assert_eq!(plan.path, "/products/category/laptops");
    assert_eq!(query_value(&plan.query, "limit"), Some("0"));
    assert_eq!(
        plan.reconcile,
        Reconcile::CategoryEq {
            field: "category".to_string(),
            slug: "laptops".to_string(),
        }
    );
}

#[test]
fn category_field_on_users_is_plain_text() {
    // Users have no category axis; a filter on that name goes to search.
    let filter = Some(Filter::new("category", "laptops"));
    let plan = plan(Resource::Users, &query(1, PageSize::Five, filter));

    assert_eq!(plan.path, "/users/search");
}

#[test]
fn text_filter_routes_to_search_endpoint() {
    let filter = Some(Filter::new("firstName", "John"));
    let plan = plan(Resource::Users, &query(2, PageSize::Ten, filter));

    assert_eq!(plan.path, "/users/search");
    assert_eq!(query_value(&plan.query, "q"), Some("John"));
    assert_eq!(query_value(&plan.query, "limit"), Some("0"));
    assert_eq!(
        plan.reconcile,
        Reconcile::FieldContains {
            field: "firstName".to_string(),
            term: "John".to_string(),
        }
    );
}
