pub mod loader;
pub mod models;
pub mod store;

pub use loader::{load_rows_from_path, load_rows_from_reader};
pub use models::{Extent, Row, RowKey, StepMarker};
pub use store::DataStore;
