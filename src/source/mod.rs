mod cache;
mod loader;

pub use cache::DatasetCache;
pub use loader::{CsvSource, DataSource};
