//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::DataCleaner;
pub use loader::{has_column, DataLoader};
pub(crate) use loader::cell_text;
