//! Display-only derivations over a filtered subset: sorting, per-field
//! formatting and the injected link / amenity fragments.

pub mod format;
pub mod table;

pub use table::{build_view, Cell, FilteredView, COLUMNS};
