//! Derive the concrete upstream request for a query.
//!
//! The upstream API cannot express every filter the UI offers, so a plan
//! pairs the endpoint and query string with the local reconcile pass that
//! closes the gap:
//!
//! - no filter: plain listing, upstream paginates via `limit`/`skip`
//! - numeric field: full unfiltered batch, exact equality applied locally
//! - category axis: category-scoped listing plus a local equality re-check
//! - free-text field: search endpoint plus a field-scoped local re-check

use crate::catalog::Resource;
use crate::query::QueryState;

/// `limit=0` asks the upstream for the full collection. Used whenever the
/// reconcile pass filters and paginates locally, so totals are exact.
const FULL_BATCH: &str = "0";

/// Local pass to run over the fetched batch.
#[derive(Clone, Debug, PartialEq)]
pub enum Reconcile {
    /// Upstream already returned exactly the requested page.
    Upstream,
    /// Keep items whose `field` is numerically equal to the parsed filter
    /// value, then paginate locally.
    NumericEq { field: String, value: String },
    /// Re-check case-insensitive category equality, then paginate locally.
    CategoryEq { field: String, slug: String },
    /// Re-check that `field` itself contains the term case-insensitively
    /// (the upstream search endpoint matches across all fields), then
    /// paginate locally.
    FieldContains { field: String, term: String },
}

/// One planned upstream request.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchPlan {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub reconcile: Reconcile,
}

pub fn plan(resource: Resource, query: &QueryState) -> FetchPlan {
    let Some(filter) = &query.filter else {
        return listing_plan(resource, query);
    };

    if resource.is_numeric_field(&filter.field) {
        return FetchPlan {
            path: resource.listing_path().to_string(),
            query: vec![("limit".to_string(), FULL_BATCH.to_string())],
            reconcile: Reconcile::NumericEq {
                field: filter.field.clone(),
                value: filter.value.clone(),
            },
        };
    }

    if let Some(axis) = resource.category_axis() {
        if filter.field == axis {
            let slug = filter.value.trim().to_lowercase();
            let path = resource
                .category_path(&slug)
                .unwrap_or_else(|| resource.listing_path().to_string());
            return FetchPlan {
                path,
                query: vec![("limit".to_string(), FULL_BATCH.to_string())],
                reconcile: Reconcile::CategoryEq {
                    field: axis.to_string(),
                    slug,
                },
            };
        }
    }

    FetchPlan {
        path: resource.search_path().to_string(),
        query: vec![
            ("q".to_string(), filter.value.clone()),
            ("limit".to_string(), FULL_BATCH.to_string()),
        ],
        reconcile: Reconcile::FieldContains {
            field: filter.field.clone(),
            term: filter.value.clone(),
        },
    }
}

fn listing_plan(resource: Resource, query: &QueryState) -> FetchPlan {
    let limit = query.page_size.as_u64();
    let skip = (query.page - 1) * limit;
    FetchPlan {
        path: resource.listing_path().to_string(),
        query: vec![
            ("limit".to_string(), limit.to_string()),
            ("skip".to_string(), skip.to_string()),
        ],
        reconcile: Reconcile::Upstream,
    }
}
