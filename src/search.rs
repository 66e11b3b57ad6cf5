//! Client-side search overlay.
//!
//! Narrows the already-fetched page at render time. Never persisted and
//! never sent upstream; totals and page counts are unaffected.

use serde_json::Value;

use crate::api::Item;

/// String form of a field value for matching and display. Nulls have no
/// string form and never match.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Case-insensitive substring match against every field value of `item`.
/// An empty query matches everything.
pub fn matches(item: &Item, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    item.values().any(|value| {
        value_text(value)
            .map(|text| text.to_lowercase().contains(&needle))
            .unwrap_or(false)
    })
}

/// The subset of `items` matching `query`, in order.
pub fn overlay<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items.iter().filter(|item| matches(item, query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: serde_json::Value) -> Item {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn empty_query_is_identity() {
        let items = vec![item(json!({"a": 1})), item(json!({"a": 2}))];
        assert_eq!(overlay(&items, "").len(), 2);
    }

    #[test]
    fn match_is_case_insensitive_across_fields() {
        let it = item(json!({"firstName": "Emily", "age": 28}));
        assert!(matches(&it, "emi"));
        assert!(matches(&it, "28"));
        assert!(!matches(&it, "29"));
    }

    #[test]
    fn null_values_never_match() {
        let it = item(json!({"brand": null}));
        assert!(!matches(&it, "null"));
    }
}
