pub mod error;
pub mod filters;
pub mod results;

pub use error::html_error_response;
pub use filters::filter_sidebar;
pub use results::results_table;
