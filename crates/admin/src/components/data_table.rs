//! Data table component.
//!
//! A table is described by an ordered list of [`TableColumn`]s, each with a
//! header label and a dotted field path into the row (`category.category_name`).
//! Rows are the JSON form of an entity plus optional pre-rendered
//! fragments (row actions) keyed by a synthetic field name.
//!
//! Path resolution never fails: a missing segment anywhere along the path
//! renders a blank cell.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;
use serde_json::Value;

/// Placeholder shown while the collection is being fetched.
pub const LOADING_TEXT: &str = "Loading rows...";

/// A dot-delimited path into a JSON row.
///
/// Object segments are looked up by key, array segments by numeric index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse a path such as `product.category.category_name`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    /// The path as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Descend into `row`, returning `None` as soon as a segment is absent.
    #[must_use]
    pub fn resolve<'a>(&self, row: &'a Value) -> Option<&'a Value> {
        self.segments
            .iter()
            .try_fold(row, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment
                    .parse::<usize>()
                    .ok()
                    .and_then(|index| items.get(index)),
                _ => None,
            })
    }
}

/// Column definition for a data table.
#[derive(Debug, Clone)]
pub struct TableColumn {
    /// Field path resolved against each row.
    pub key: FieldPath,
    /// Display label for the column header.
    pub label: String,
}

impl TableColumn {
    /// Create a new column.
    #[must_use]
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: FieldPath::parse(key),
            label: label.to_string(),
        }
    }
}

/// One input row: entity data plus caller-supplied fragments.
#[derive(Debug, Clone, Default)]
pub struct TableRow {
    data: Value,
    fragments: BTreeMap<String, String>,
}

impl TableRow {
    /// Build a row from any serializable record.
    #[must_use]
    pub fn from_record<T: Serialize>(record: &T) -> Self {
        let data = serde_json::to_value(record).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to serialize table row");
            Value::Null
        });
        Self {
            data,
            fragments: BTreeMap::new(),
        }
    }

    /// Attach a pre-rendered fragment under a synthetic field name.
    #[must_use]
    pub fn with_fragment(mut self, key: &str, fragment: String) -> Self {
        self.fragments.insert(key.to_string(), fragment);
        self
    }

    /// The row's data.
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    fn cell(&self, path: &FieldPath) -> Cell {
        if let Some(fragment) = self.fragments.get(path.as_str()) {
            return Cell::Fragment(fragment.clone());
        }
        path.resolve(&self.data).map_or(Cell::Blank, Cell::from_value)
    }
}

/// A rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// Missing or null value.
    Blank,
    /// Plain text, escaped on HTML output.
    Text(String),
    /// Pre-rendered markup, emitted as-is.
    Fragment(String),
}

impl Cell {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => Self::Blank,
            Value::String(text) => Self::Text(text.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Whether the content must be emitted without escaping.
    #[must_use]
    pub const fn is_fragment(&self) -> bool {
        matches!(self, Self::Fragment(_))
    }

    /// The cell content; empty for blank cells.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Blank => "",
            Self::Text(text) | Self::Fragment(text) => text,
        }
    }
}

/// Configuration for a data table.
#[derive(Debug, Clone)]
pub struct DataTableConfig {
    /// Unique table identifier.
    pub table_id: String,
    /// Column definitions.
    pub columns: Vec<TableColumn>,
    /// Text for the empty state.
    pub empty_title: String,
}

impl DataTableConfig {
    /// Create a new data table configuration.
    #[must_use]
    pub fn new(table_id: &str) -> Self {
        Self {
            table_id: table_id.to_string(),
            columns: vec![],
            empty_title: "No items found".to_string(),
        }
    }

    /// Add a column.
    #[must_use]
    pub fn column(mut self, column: TableColumn) -> Self {
        self.columns.push(column);
        self
    }

    /// Set the empty state text.
    #[must_use]
    pub fn empty_state(mut self, title: &str) -> Self {
        self.empty_title = title.to_string();
        self
    }

    /// Resolve every column of every row.
    ///
    /// When `loading` is set a placeholder row is shown above the data rows.
    #[must_use]
    pub fn render(&self, rows: &[TableRow], loading: bool) -> RenderedTable {
        RenderedTable {
            table_id: self.table_id.clone(),
            headers: self.columns.iter().map(|c| c.label.clone()).collect(),
            rows: rows
                .iter()
                .map(|row| self.columns.iter().map(|c| row.cell(&c.key)).collect())
                .collect(),
            loading,
            empty_title: self.empty_title.clone(),
        }
    }
}

/// A table ready for output.
#[derive(Debug, Clone)]
pub struct RenderedTable {
    pub table_id: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub loading: bool,
    pub empty_title: String,
}

impl RenderedTable {
    /// Number of columns, for `colspan` on placeholder rows.
    #[must_use]
    pub fn width(&self) -> usize {
        self.headers.len().max(1)
    }

    /// Whether the empty state should be shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && !self.loading
    }

    /// Render as aligned plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.content().chars().count());
            }
        }

        let mut out = String::new();
        let line = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let _ = writeln!(out, "{}", line(self.headers.iter().map(String::as_str).collect()));
        let rule: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        let _ = writeln!(out, "{}", "-".repeat(rule));

        if self.loading {
            let _ = writeln!(out, "{LOADING_TEXT}");
        }
        for row in &self.rows {
            let _ = writeln!(out, "{}", line(row.iter().map(Cell::content).collect()));
        }
        if self.is_empty() {
            let _ = writeln!(out, "{}", self.empty_title);
        }
        out
    }
}
