//! Text rendering for command results

use serde::Serialize;
use serde_json::Value;

/// Result of a command, before rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A collection, shown as a table unless JSON is requested
    Table(Value),
    /// A single record, always pretty JSON
    Json(Value),
    /// Plain text
    Text(String),
}

impl Output {
    pub fn table<T: Serialize>(rows: &T) -> Result<Self, serde_json::Error> {
        Ok(Output::Table(serde_json::to_value(rows)?))
    }

    pub fn json<T: Serialize>(record: &T) -> Result<Self, serde_json::Error> {
        Ok(Output::Json(serde_json::to_value(record)?))
    }

    /// Render to the final text, without a trailing newline
    pub fn render(&self, force_json: bool) -> Result<String, serde_json::Error> {
        match self {
            Output::Table(rows) if force_json => render_json(rows),
            Output::Table(rows) => Ok(render_table(rows)),
            Output::Json(value) => render_json(value),
            Output::Text(text) => Ok(text.clone()),
        }
    }
}

pub fn render_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render an array of objects as an aligned table. Columns come from the
/// keys of the first row.
pub fn render_table(rows: &Value) -> String {
    let rows = match rows.as_array() {
        Some(rows) if !rows.is_empty() => rows,
        _ => return "No data found".to_string(),
    };

    let headers: Vec<&str> = rows[0]
        .as_object()
        .map(|first| first.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| headers.iter().map(|h| cell(row.get(*h))).collect())
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, value) in widths.iter_mut().zip(row) {
            *width = (*width).max(value.chars().count());
        }
    }

    let mut lines = Vec::with_capacity(cells.len() + 2);
    lines.push(join_padded(headers.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &cells {
        lines.push(join_padded(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn join_padded<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(value, width)| format!("{:<width$}", value, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
