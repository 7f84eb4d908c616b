pub mod dataset;
pub mod listing;
