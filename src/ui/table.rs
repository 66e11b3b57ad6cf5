use ratatui::layout::Constraint;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Cell, Row, Table};
use serde_json::Value;

use crate::api::Item;
use crate::catalog::{CellKind, Resource};
use crate::search::value_text;
use crate::ui::theme::ACCENT;

/// Build the data table for the current page. `items` is the
/// search-narrowed subset in upstream order.
pub fn data_table<'a>(resource: Resource, items: &[&Item]) -> Table<'a> {
    let columns = resource.columns();

    let header = Row::new(
        columns
            .iter()
            .map(|column| Cell::from(column.label))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = items
        .iter()
        .map(|item| {
            Row::new(
                columns
                    .iter()
                    .map(|column| Cell::from(cell_text(item, column.key, column.kind)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths = columns.iter().map(|_| Constraint::Fill(1));

    Table::new(rows, widths).header(header).column_spacing(1)
}

fn cell_text(item: &Item, key: &str, kind: CellKind) -> String {
    let value = item.get(key);
    match kind {
        CellKind::Text => value
            .and_then(value_text)
            .unwrap_or_else(|| "-".to_string()),
        CellKind::Presence => match value {
            Some(Value::Null) | None => "No".to_string(),
            Some(Value::String(s)) if s.is_empty() => "No".to_string(),
            Some(_) => "Yes".to_string(),
        },
        CellKind::Count => value
            .and_then(Value::as_array)
            .map(|array| array.len().to_string())
            .unwrap_or_else(|| "-".to_string()),
    }
}
