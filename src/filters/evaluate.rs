// src/filters/evaluate.rs

use crate::domain::dataset::Dataset;
use crate::domain::listing::{Amenity, Listing};
use crate::filters::state::FilterState;
use log::debug;

/// Tolerance for comparing percentage-scaled ROI against its bounds.
const ROI_EPSILON: f64 = 1e-9;

/// Rows satisfying every filter in `state`, in dataset order.
///
/// The dataset is only borrowed, so evaluations are independent of each
/// other and of the order they run in.
pub fn evaluate<'a>(dataset: &'a Dataset, state: &FilterState) -> Vec<&'a Listing> {
    let rows: Vec<&Listing> = dataset
        .listings()
        .iter()
        .filter(|l| matches(state, l))
        .collect();

    debug!("{} of {} listings pass the filters", rows.len(), dataset.len());
    rows
}

/// Pure conjunction of every active predicate. Inverted bounds simply match
/// nothing.
pub fn matches(state: &FilterState, listing: &Listing) -> bool {
    let price_min = state.price_min_k.saturating_mul(1000) as f64;
    let price_max = state.price_max_k.saturating_mul(1000) as f64;

    let in_range = |v: f64, lo: i64, hi: i64| lo as f64 <= v && v <= hi as f64;

    (price_min..=price_max).contains(&listing.price)
        && in_range(listing.size, state.size_min, state.size_max)
        && listing.airport_distance <= state.airport_max as f64
        && in_range(listing.average_rent, state.rent_min, state.rent_max)
        && roi_matches(state, listing)
        && selected(&state.property_types, &listing.property_type)
        && selected(&state.rooms, &listing.rooms)
        && selected(&state.municipalities, &listing.municipality)
        && Amenity::ALL.iter().all(|&a| {
            state
                .amenity(a)
                .required()
                .map_or(true, |want| listing.has(a) == want)
        })
}

fn roi_matches(state: &FilterState, listing: &Listing) -> bool {
    match state.roi {
        Some((lo, hi)) => {
            let pct = listing.roi_percent();
            lo - ROI_EPSILON <= pct && pct <= hi + ROI_EPSILON
        }
        None => true,
    }
}

// An empty selection imposes no restriction.
fn selected<T: Ord>(selection: &std::collections::BTreeSet<T>, value: &T) -> bool {
    selection.is_empty() || selection.contains(value)
}
