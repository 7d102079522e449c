use serde::{Deserialize, Serialize};

use super::{check_column, SortRequest};
use crate::error::Result;

/// One table row: display strings, one per column.
pub type Row = Vec<String>;

/// A table of display strings, as handed over by the rendering layer.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Column titles, never sorted with the body
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub header: Option<Row>,
    /// Body rows
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { header: None, rows }
    }

    pub fn with_header(header: Row, rows: Vec<Row>) -> Self {
        Self {
            header: Some(header),
            rows,
        }
    }

    /// Widest row in the body.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Sort the body rows in place. The header stays put.
    ///
    /// # Errors
    /// See [`SortRequest::sort_rows`].
    pub fn sort(&mut self, request: &SortRequest) -> Result<()> {
        request.sort_rows(&mut self.rows)
    }

    /// Distinct values of one column, in first-seen order.
    ///
    /// # Errors
    /// Returns [`crate::error::CellsortError::ColumnOutOfRange`] if a row lacks the column.
    pub fn group_keys(&self, column: usize) -> Result<Vec<String>> {
        check_column(&self.rows, column)?;
        let mut keys: Vec<String> = Vec::new();
        for cell in self.rows.iter().filter_map(|r| r.get(column)) {
            if !keys.contains(cell) {
                keys.push(cell.clone());
            }
        }
        Ok(keys)
    }
}
