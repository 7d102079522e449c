//! In-place sorting over a length/swap/less capability.
//!
//! [`RowSorter`] and [`GroupSorter`] expose a row table or a flat list of
//! labels through [`Sortable`]; [`sort`] reorders any `Sortable` in place
//! using only those three operations.
//!
//! The cell comparator is not a strict weak order (ascending treats ties as
//! "less", and per-pair type inference can break transitivity on mixed
//! columns), so `slice::sort_by` is not an option: it may panic on such
//! comparators. The driver here tolerates any answer from `is_less`, never
//! touches an index outside `0..len()`, and always terminates.

mod groups;
mod rows;

pub use groups::GroupSorter;
pub use rows::RowSorter;

use crate::types::Row;

/// Insertion-sorted block length before merging starts.
const BLOCK_SIZE: usize = 20;

/// A collection an in-place comparison sort can operate on.
pub trait Sortable {
    /// Number of elements.
    fn len(&self) -> usize;

    /// Exchange elements `i` and `j`.
    fn swap(&mut self, i: usize, j: usize);

    /// True when element `i` must sort before element `j`.
    fn is_less(&self, i: usize, j: usize) -> bool;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sort `data` in place.
///
/// Blocks of [`BLOCK_SIZE`] are insertion sorted, then merged pairwise with
/// rotation-based merges of doubling width. No allocation. Input that is
/// already in order with distinct keys is left untouched.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();

    let mut start = 0;
    while start < n {
        let end = n.min(start + BLOCK_SIZE);
        insertion_sort(data, start, end);
        start = end;
    }

    let mut width = BLOCK_SIZE;
    while width < n {
        let mut a = 0;
        while a + width < n {
            let m = a + width;
            let b = n.min(m + width);
            sym_merge(data, a, m, b);
            a = b;
        }
        width *= 2;
    }
}

/// Sort rows in place by one column.
///
/// # Panics
/// Panics if `column` is out of range for any compared row.
pub fn sort_rows(rows: &mut [Row], column: usize, ascending: bool) {
    log::debug!(
        "sorting {} rows by column {column} ({})",
        rows.len(),
        direction(ascending)
    );
    sort(&mut RowSorter::new(rows, column, ascending));
}

/// Sort a flat list of labels in place.
pub fn sort_groups<S: AsRef<str>>(groups: &mut [S], ascending: bool) {
    log::debug!("sorting {} groups ({})", groups.len(), direction(ascending));
    sort(&mut GroupSorter::new(groups, ascending));
}

fn direction(ascending: bool) -> &'static str {
    if ascending {
        "ascending"
    } else {
        "descending"
    }
}

fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in (a + 1)..b {
        let mut j = i;
        while j > a && data.is_less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merge the sorted runs `[a, m)` and `[m, b)`.
///
/// Recursive SymMerge (Kim & Kutzner): binary search for a split point,
/// rotate the middle, recurse on both sides. Recursion depth is logarithmic.
fn sym_merge<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    if m - a == 1 {
        // Single left element: find its slot in [m, b) and bubble it there.
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = i + (j - i) / 2;
            if data.is_less(h, a) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i.saturating_sub(1) {
            data.swap(k, k + 1);
        }
        return;
    }

    if b - m == 1 {
        // Single right element: find its slot in [a, m) and bubble it there.
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = i + (j - i) / 2;
            if data.is_less(m, h) {
                j = h;
            } else {
                i = h + 1;
            }
        }
        let mut k = m;
        while k > i {
            data.swap(k, k - 1);
            k -= 1;
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;
    while start < r {
        let c = start + (r - start) / 2;
        if data.is_less(p - c, c) {
            r = c;
        } else {
            start = c + 1;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(data, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b);
    }
}

/// Swap `[a, a + len)` with `[b, b + len)`.
fn swap_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, len: usize) {
    for i in 0..len {
        data.swap(a + i, b + i);
    }
}

/// Rotate `[a, b)` so that `[m, b)` comes before `[a, m)`.
fn rotate<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;
    while i != j {
        if i > j {
            swap_range(data, m - i, m, j);
            i -= j;
        } else {
            swap_range(data, m - i, m + j - i, i);
            j -= i;
        }
    }
    swap_range(data, m - i, m, i);
}
