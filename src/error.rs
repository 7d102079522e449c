//! Structured error types for cellsort.
//!
//! Comparison itself never fails: the dispatcher turns every parse error into
//! "interpretation not applicable". These errors surface from the typed
//! parsers when called directly, and from the request/table boundary.

/// All errors that can occur in cellsort parsing and request handling.
#[derive(Debug, thiserror::Error)]
pub enum CellsortError {
    /// String is not a resource quantity.
    #[error("Invalid quantity: {0}")]
    Quantity(String),

    /// String is not a duration expression.
    #[error("Invalid duration: {0}")]
    Duration(String),

    /// Sort column does not exist in one of the rows.
    #[error("Column {column} out of range for row {row} with {width} cells")]
    ColumnOutOfRange {
        column: usize,
        row: usize,
        width: usize,
    },

    /// Request cannot be applied to the given collection.
    #[error("Invalid sort request: {0}")]
    InvalidRequest(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// File read or write failed (CLI).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CellsortError>;

#[cfg(target_arch = "wasm32")]
impl From<CellsortError> for wasm_bindgen::JsValue {
    fn from(e: CellsortError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
