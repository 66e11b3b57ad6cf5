use serde_json::Value;

/// A single fetched item. The upstream API dictates the shape; the
/// application treats it as an opaque field-to-value mapping and never
/// validates or normalizes the schema.
pub type Item = serde_json::Map<String, Value>;

/// One reconciled page of results.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ResultPage {
    /// Items for the requested page, in upstream order.
    pub items: Vec<Item>,
    /// Total matching items across the whole collection, after any local
    /// filter pass.
    pub total: u64,
}
