pub mod viewer;

pub use viewer::{viewer_page, ViewerVm};
