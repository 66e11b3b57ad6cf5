//! Local reconcile pass over a fetched batch.

use serde_json::Value;

use crate::api::{Item, ResultPage};
use crate::fetch::plan::Reconcile;
use crate::query::PageSize;
use crate::search::value_text;

/// Pull the item list and upstream total out of a response body. Missing or
/// malformed keys degrade to an empty page, never an error.
pub fn extract_page(body: &Value, item_key: &str) -> (Vec<Item>, u64) {
    let items = body
        .get(item_key)
        .and_then(Value::as_array)
        .map(|values| {
            values
                .iter()
                .filter_map(Value::as_object)
                .cloned()
                .collect()
        })
        .unwrap_or_default();
    let total = body.get("total").and_then(Value::as_u64).unwrap_or(0);
    (items, total)
}

/// Apply the plan's local pass: filter, recompute the total as the
/// post-filter count, and paginate locally where upstream could not.
pub fn reconcile(
    pass: &Reconcile,
    items: Vec<Item>,
    upstream_total: u64,
    page: u64,
    page_size: PageSize,
) -> ResultPage {
    match pass {
        Reconcile::Upstream => ResultPage {
            items,
            total: upstream_total,
        },
        Reconcile::NumericEq { field, value } => {
            paginated(items, page, page_size, |item| {
                numeric_eq(item, field, value)
            })
        }
        Reconcile::CategoryEq { field, slug } => {
            paginated(items, page, page_size, |item| {
                field_str(item, field)
                    .map(|s| s.eq_ignore_ascii_case(slug))
                    .unwrap_or(false)
            })
        }
        Reconcile::FieldContains { field, term } => {
            let needle = term.to_lowercase();
            paginated(items, page, page_size, |item| {
                item.get(field.as_str())
                    .and_then(value_text)
                    .map(|text| text.to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        }
    }
}

fn paginated<F>(items: Vec<Item>, page: u64, page_size: PageSize, keep: F) -> ResultPage
where
    F: Fn(&Item) -> bool,
{
    let matched: Vec<Item> = items.into_iter().filter(|item| keep(item)).collect();
    let total = matched.len() as u64;
    let per_page = page_size.as_u64() as usize;
    let offset = (page.saturating_sub(1) as usize).saturating_mul(per_page);
    let items = matched.into_iter().skip(offset).take(per_page).collect();
    ResultPage { items, total }
}

/// Exact numeric equality between a field and the raw filter text. An
/// unparseable filter value matches nothing.
fn numeric_eq(item: &Item, field: &str, raw: &str) -> bool {
    let Ok(wanted) = raw.trim().parse::<f64>() else {
        return false;
    };
    item.get(field)
        .and_then(Value::as_f64)
        .map(|actual| actual == wanted)
        .unwrap_or(false)
}

fn field_str<'a>(item: &'a Item, field: &str) -> Option<&'a str> {
    item.get(field).and_then(Value::as_str)
}
