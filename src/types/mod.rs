//! Data types for cellsort.

mod request;
mod table;

pub use request::*;
pub use table::*;
