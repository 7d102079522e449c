//! Shared helpers for cellsort integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use cellsort::sorter::Sortable;
use cellsort::Row;

/// Route `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Build rows from string literals.
pub fn rows(cells: &[&[&str]]) -> Vec<Row> {
    cells
        .iter()
        .map(|r| r.iter().map(ToString::to_string).collect())
        .collect()
}

/// Cells of one column, top to bottom.
pub fn column<'a>(rows: &'a [Row], index: usize) -> Vec<&'a str> {
    rows.iter().map(|r| r[index].as_str()).collect()
}

/// Owned labels from string literals.
pub fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

/// Wraps a `Sortable` and counts the swaps issued through it.
pub struct SwapCounter<S> {
    pub inner: S,
    pub swaps: usize,
}

impl<S: Sortable> SwapCounter<S> {
    pub fn new(inner: S) -> Self {
        Self { inner, swaps: 0 }
    }
}

impl<S: Sortable> Sortable for SwapCounter<S> {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.swaps += 1;
        self.inner.swap(i, j);
    }

    fn is_less(&self, i: usize, j: usize) -> bool {
        self.inner.is_less(i, j)
    }
}
