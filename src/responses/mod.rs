pub mod html;
pub mod text;
pub mod xlsx;

pub use crate::errors::ResultResp;

// Normal HTML response
pub use html::html_response;
pub use text::text_response;
pub use xlsx::xlsx_response;
