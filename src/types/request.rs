use serde::{Deserialize, Serialize};

use super::Row;
use crate::error::{CellsortError, Result};
use crate::sorter::{sort_groups, sort_rows};

/// What a sort operation orders by.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Rows ordered by the cell at this 0-based column index
    Column(usize),
    /// A flat list of group labels
    Group,
}

/// A single sort operation: key plus direction.
///
/// Issued per sort and never stored.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SortRequest {
    pub key: SortKey,
    #[serde(default = "default_ascending")]
    pub ascending: bool,
}

fn default_ascending() -> bool {
    true
}

impl SortRequest {
    pub fn column(column: usize, ascending: bool) -> Self {
        Self {
            key: SortKey::Column(column),
            ascending,
        }
    }

    pub fn group(ascending: bool) -> Self {
        Self {
            key: SortKey::Group,
            ascending,
        }
    }

    /// Sort rows in place by the requested column.
    ///
    /// # Errors
    /// Returns [`CellsortError::ColumnOutOfRange`] if any row lacks the column,
    /// or [`CellsortError::InvalidRequest`] for a group request.
    pub fn sort_rows(&self, rows: &mut [Row]) -> Result<()> {
        let SortKey::Column(column) = self.key else {
            return Err(CellsortError::InvalidRequest(
                "group requests sort labels, not rows".to_string(),
            ));
        };
        check_column(rows, column)?;
        sort_rows(rows, column, self.ascending);
        Ok(())
    }

    /// Sort group labels in place. The key's column, if any, is ignored.
    pub fn sort_groups<S: AsRef<str>>(&self, groups: &mut [S]) {
        sort_groups(groups, self.ascending);
    }
}

/// Ensure every row has a cell at `column`.
///
/// # Errors
/// Returns [`CellsortError::ColumnOutOfRange`] naming the first short row.
pub fn check_column(rows: &[Row], column: usize) -> Result<()> {
    match rows.iter().position(|r| column >= r.len()) {
        Some(row) => Err(CellsortError::ColumnOutOfRange {
            column,
            row,
            width: rows.get(row).map_or(0, Vec::len),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    #[test]
    fn test_request_json_shape() {
        let req: SortRequest = serde_json::from_str(r#"{"key":{"column":2}}"#).unwrap();
        assert_eq!(req, SortRequest::column(2, true));

        let req: SortRequest = serde_json::from_str(r#"{"key":"group","ascending":false}"#).unwrap();
        assert_eq!(req, SortRequest::group(false));

        let json = serde_json::to_string(&SortRequest::column(1, false)).unwrap();
        assert_eq!(json, r#"{"key":{"column":1},"ascending":false}"#);
    }

    #[test]
    fn test_check_column_reports_short_row() {
        let rows = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        assert!(check_column(&rows, 0).is_ok());
        match check_column(&rows, 1) {
            Err(CellsortError::ColumnOutOfRange { column, row, width }) => {
                assert_eq!((column, row, width), (1, 1, 1));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_group_request_rejects_rows() {
        let mut rows = vec![vec!["a".to_string()]];
        assert!(matches!(
            SortRequest::group(true).sort_rows(&mut rows),
            Err(CellsortError::InvalidRequest(_))
        ));
    }
}
