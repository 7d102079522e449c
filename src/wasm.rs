//! `SortableTable` - the WASM-exported table handle used by the browser UI.
//!
//! The UI hands over rows once, then re-sorts on every column-header click
//! and reads the rows back. Sort errors (bad column) come back as JS
//! exceptions; comparison never fails.

use wasm_bindgen::prelude::*;

use crate::types::{Row, SortRequest, Table};

#[wasm_bindgen]
#[derive(Debug)]
pub struct SortableTable {
    table: Table,
}

#[wasm_bindgen]
impl SortableTable {
    /// Create a table from a JSON array of rows (`[["a","1"],["b","2"]]`).
    #[wasm_bindgen(constructor)]
    pub fn new(rows_json: &str) -> Result<SortableTable, JsValue> {
        console_error_panic_hook::set_once();
        let rows: Vec<Row> = serde_json::from_str(rows_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid rows JSON: {e}")))?;
        Ok(Self {
            table: Table::new(rows),
        })
    }

    /// Create a table from a JS array of string arrays.
    pub fn from_js(rows: JsValue) -> Result<SortableTable, JsValue> {
        console_error_panic_hook::set_once();
        let rows: Vec<Row> = serde_wasm_bindgen::from_value(rows)
            .map_err(|e| JsValue::from_str(&format!("Invalid rows: {e}")))?;
        Ok(Self {
            table: Table::new(rows),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.table.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }

    /// Sort rows in place by `column`.
    pub fn sort(&mut self, column: usize, ascending: bool) -> Result<(), JsValue> {
        self.table
            .sort(&SortRequest::column(column, ascending))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Sorted distinct labels of `column`, as a JS array.
    pub fn sort_groups(&self, column: usize, ascending: bool) -> Result<JsValue, JsValue> {
        let mut groups = self
            .table
            .group_keys(column)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        SortRequest::group(ascending).sort_groups(&mut groups);
        serde_wasm_bindgen::to_value(&groups)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }

    /// Current rows as a JSON string.
    pub fn rows_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.table.rows)
            .map_err(|e| JsValue::from_str(&format!("JSON serialization error: {e}")))
    }

    /// Current rows as a JS array.
    pub fn rows(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.table.rows)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}
