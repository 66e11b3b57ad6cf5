//! Fetch-and-reconcile: derive one upstream request from the query state,
//! issue it, and reshape the response into a uniform [`ResultPage`].

mod controller;
mod plan;
mod reconcile;

pub use controller::FetchController;
pub use plan::{plan, FetchPlan, Reconcile};
pub use reconcile::{extract_page, reconcile};

use crate::api::{ApiClient, ApiError, ResultPage};
use crate::catalog::Resource;
use crate::query::QueryState;

/// Run one fetch for the given resource and query: plan the request, issue
/// it, and apply the local reconcile pass. Single attempt, no retry.
pub async fn run_fetch(
    client: &ApiClient,
    resource: Resource,
    query: &QueryState,
) -> Result<ResultPage, ApiError> {
    let plan = plan::plan(resource, query);
    let body = client.get_json(&plan.path, &plan.query).await?;
    let (items, upstream_total) = reconcile::extract_page(&body, resource.item_key());
    Ok(reconcile::reconcile(
        &plan.reconcile,
        items,
        upstream_total,
        query.page,
        query.page_size,
    ))
}
