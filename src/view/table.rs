// src/view/table.rs

use crate::domain::dataset::Dataset;
use crate::domain::listing::Listing;
use crate::filters::{evaluate, FilterState};
use crate::view::format::{
    amenity_marker, format_airport_km, format_price, format_rent, format_roi, format_size,
    listing_link,
};
use maud::Markup;

/// An output column: header label plus optional tooltip text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub label: &'static str,
    pub tooltip: &'static str,
}

/// Output columns, in display order.
pub const COLUMNS: [Column; 12] = [
    Column { label: "ROI", tooltip: "Expected yearly rental return on the asking price" },
    Column { label: "Price", tooltip: "Asking price in euros" },
    Column { label: "Size", tooltip: "Built area in m²" },
    Column { label: "Rooms", tooltip: "Number of bedrooms" },
    Column { label: "Bathrooms", tooltip: "Number of bathrooms" },
    Column { label: "Restaurants", tooltip: "Restaurants within walking distance" },
    Column { label: "Shops", tooltip: "Shops within walking distance" },
    Column { label: "Rent", tooltip: "Expected daily rent in euros" },
    Column { label: "Airport km", tooltip: "Distance to the airport in km" },
    Column { label: "Municipality", tooltip: "" },
    Column { label: "Link", tooltip: "Open the listing page" },
    Column { label: "Code", tooltip: "Listing reference" },
];

/// One rendered cell. `Text` is escaped on output; `Html` is one of the
/// fragments this module builds itself.
#[derive(Debug, Clone, Copy)]
pub enum Cell<'a> {
    Text(&'a str),
    Html(&'a Markup),
}

/// A listing with every display field derived.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    pub roi: String,
    pub price: String,
    pub size: String,
    pub rooms: String,
    pub bathrooms: String,
    pub restaurants: Markup,
    pub shops: Markup,
    pub rent: String,
    pub airport_km: String,
    pub municipality: String,
    pub link: Markup,
    pub code: String,
}

impl DisplayRow {
    pub fn from_listing(listing: &Listing) -> Self {
        Self {
            roi: format_roi(listing.roi),
            price: format_price(listing.price),
            size: format_size(listing.size),
            rooms: listing.rooms.to_string(),
            bathrooms: listing.bathrooms.to_string(),
            restaurants: amenity_marker(listing.near_restaurants),
            shops: amenity_marker(listing.near_shops),
            rent: format_rent(listing.average_rent),
            airport_km: format_airport_km(listing.airport_distance),
            municipality: listing.municipality.clone(),
            link: listing_link(&listing.url),
            code: listing.property_code.to_string(),
        }
    }

    /// Cells in `COLUMNS` order.
    pub fn cells(&self) -> [Cell<'_>; 12] {
        [
            Cell::Text(&self.roi),
            Cell::Text(&self.price),
            Cell::Text(&self.size),
            Cell::Text(&self.rooms),
            Cell::Text(&self.bathrooms),
            Cell::Html(&self.restaurants),
            Cell::Html(&self.shops),
            Cell::Text(&self.rent),
            Cell::Text(&self.airport_km),
            Cell::Text(&self.municipality),
            Cell::Html(&self.link),
            Cell::Text(&self.code),
        ]
    }
}

/// The filtered, sorted subset together with its display rows.
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    pub listings: Vec<&'a Listing>,
    pub rows: Vec<DisplayRow>,
}

impl FilteredView<'_> {
    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn summary(&self) -> String {
        format!("Found {} properties matching the criteria", self.count())
    }
}

/// Sort by code descending (stable, so equal codes keep input order) and
/// derive display rows. Only ever sees the filtered subset.
pub fn present(mut listings: Vec<&Listing>) -> FilteredView<'_> {
    listings.sort_by(|a, b| b.property_code.cmp(&a.property_code));
    let rows = listings.iter().map(|l| DisplayRow::from_listing(l)).collect();
    FilteredView { listings, rows }
}

/// Filter then format: the whole pipeline for one request.
pub fn build_view<'a>(dataset: &'a Dataset, state: &FilterState) -> FilteredView<'a> {
    present(evaluate(dataset, state))
}
