pub mod evaluate;
pub mod registry;
pub mod state;

pub use evaluate::evaluate;
pub use registry::{Control, ControlKind, FilterGroup, FilterRegistry};
pub use state::{FilterState, QueryParams, TriState};
