//! cellsort - type-sniffing sort engine for tables of display strings
//!
//! Sorts rows whose cells are pre-formatted strings ("250m", "128Mi",
//! "3h12m", "42", "node-7") by inferring, per compared pair, whether the
//! cells are resource quantities, durations, integers, or plain text:
//! - Quantities compare by exact value regardless of suffix
//! - Durations compare by total nanoseconds
//! - Integers compare numerically
//! - Everything else compares in natural order ("item2" < "item10")
//!
//! # Usage (Rust)
//!
//! ```rust,ignore
//! let mut rows = vec![
//!     vec!["web".to_string(), "1Gi".to_string()],
//!     vec!["db".to_string(), "512Mi".to_string()],
//! ];
//! cellsort::sorter::sort_rows(&mut rows, 1, true);
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { SortableTable } from 'cellsort';
//! await init();
//! const table = new SortableTable(JSON.stringify(rows));
//! table.sort(2, true);
//! render(JSON.parse(table.rows_json()));
//! ```

// Comparison
pub mod compare;
pub mod duration;
pub mod natural;
pub mod quantity;

// Sorting
pub mod sorter;
pub mod types;

pub mod csv;
pub mod error;
pub mod wasm;

use wasm_bindgen::prelude::*;

pub use compare::less;
pub use types::*;
pub use wasm::SortableTable;

/// Sort a JSON array of rows by one column and return the sorted JSON.
///
/// # Errors
/// Returns an error if the JSON is not an array of string arrays or if a
/// row lacks the column.
pub fn sort_rows_in_json(rows_json: &str, column: usize, ascending: bool) -> error::Result<String> {
    let mut rows: Vec<Row> = serde_json::from_str(rows_json)?;
    SortRequest::column(column, ascending).sort_rows(&mut rows)?;
    Ok(serde_json::to_string(&rows)?)
}

/// Sort a JSON array of group labels and return the sorted JSON.
///
/// # Errors
/// Returns an error if the JSON is not an array of strings.
pub fn sort_groups_in_json(groups_json: &str, ascending: bool) -> error::Result<String> {
    let mut groups: Vec<String> = serde_json::from_str(groups_json)?;
    SortRequest::group(ascending).sort_groups(&mut groups);
    Ok(serde_json::to_string(&groups)?)
}

/// Sort a JSON array of rows by one column (WASM entry point).
///
/// # Errors
/// Returns an error if the JSON is invalid or the column is out of range.
#[wasm_bindgen]
pub fn sort_rows_json(rows_json: &str, column: usize, ascending: bool) -> Result<String, JsValue> {
    sort_rows_in_json(rows_json, column, ascending).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Sort a JSON array of group labels (WASM entry point).
///
/// # Errors
/// Returns an error if the JSON is invalid.
#[wasm_bindgen]
pub fn sort_groups_json(groups_json: &str, ascending: bool) -> Result<String, JsValue> {
    sort_groups_in_json(groups_json, ascending).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// True when cell `a` sorts before cell `b` in the given direction.
#[must_use]
#[wasm_bindgen]
pub fn compare_cells(a: &str, b: &str, ascending: bool) -> bool {
    less(ascending, a, b)
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
