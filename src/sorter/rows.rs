use super::Sortable;
use crate::compare::less;
use crate::types::Row;

/// Sorts rows by the cell at one column index.
///
/// Every row must have a cell at `column`; a short row is a caller bug and
/// panics on comparison.
#[derive(Debug)]
pub struct RowSorter<'a> {
    rows: &'a mut [Row],
    column: usize,
    ascending: bool,
}

impl<'a> RowSorter<'a> {
    pub fn new(rows: &'a mut [Row], column: usize, ascending: bool) -> Self {
        Self {
            rows,
            column,
            ascending,
        }
    }
}

impl Sortable for RowSorter<'_> {
    fn len(&self) -> usize {
        self.rows.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    #[allow(clippy::indexing_slicing)] // Column validity is the caller's precondition
    fn is_less(&self, i: usize, j: usize) -> bool {
        less(
            self.ascending,
            &self.rows[i][self.column],
            &self.rows[j][self.column],
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_compares_configured_column() {
        let mut rows = vec![row(&["b", "10"]), row(&["a", "9"])];
        let sorter = RowSorter::new(&mut rows, 1, true);
        assert!(!sorter.is_less(0, 1));
        assert!(sorter.is_less(1, 0));
    }

    #[test]
    fn test_swap_moves_whole_rows() {
        let mut rows = vec![row(&["x", "1"]), row(&["y", "2"])];
        let mut sorter = RowSorter::new(&mut rows, 0, true);
        sorter.swap(0, 1);
        assert_eq!(sorter.len(), 2);
        assert_eq!(rows[0], row(&["y", "2"]));
        assert_eq!(rows[1], row(&["x", "1"]));
    }

    #[test]
    #[should_panic]
    fn test_missing_column_panics() {
        let mut rows = vec![row(&["a"]), row(&["b"])];
        let sorter = RowSorter::new(&mut rows, 3, true);
        sorter.is_less(0, 1);
    }
}
