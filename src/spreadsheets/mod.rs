pub mod export_xlsx;

pub use export_xlsx::{export_filename, export_listings_xlsx};
