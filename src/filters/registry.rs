// src/filters/registry.rs

use crate::config::ViewerOptions;
use crate::domain::dataset::Dataset;
use crate::domain::listing::Amenity;
use crate::errors::DataError;
use crate::filters::state::{FilterState, TriState};
use std::collections::BTreeSet;

/// Property types pre-selected on a first visit, where present in the data.
pub const DEFAULT_PROPERTY_TYPES: [&str; 3] = ["flat", "penthouse", "studio"];

/// Inclusive integer bounds derived from a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntDomain {
    pub min: i64,
    pub max: i64,
}

impl IntDomain {
    /// Both bounds truncated, as an integer cast does.
    fn truncated((lo, hi): (f64, f64)) -> Self {
        Self {
            min: lo.trunc() as i64,
            max: hi.trunc() as i64,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterGroup {
    PriceAndSize,
    Returns,
    Location,
    Property,
    Amenities,
}

impl FilterGroup {
    pub const ORDER: [FilterGroup; 5] = [
        FilterGroup::PriceAndSize,
        FilterGroup::Returns,
        FilterGroup::Location,
        FilterGroup::Property,
        FilterGroup::Amenities,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FilterGroup::PriceAndSize => "Price & size",
            FilterGroup::Returns => "Rent & returns",
            FilterGroup::Location => "Location",
            FilterGroup::Property => "Property",
            FilterGroup::Amenities => "Amenities",
        }
    }
}

/// What a UI must render for one filter: bounds, options and current value.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    Number {
        name: &'static str,
        min: f64,
        max: Option<f64>,
        value: f64,
    },
    Range {
        min_name: &'static str,
        max_name: &'static str,
        min: f64,
        max: f64,
        step: f64,
        value: (f64, f64),
    },
    MultiSelect {
        name: &'static str,
        options: Vec<String>,
        selected: BTreeSet<String>,
    },
    TriState {
        name: &'static str,
        value: TriState,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub label: &'static str,
    pub tooltip: Option<&'static str>,
    pub group: FilterGroup,
    pub kind: ControlKind,
}

/// Filter domains and defaults derived from a loaded dataset.
///
/// Rebuild it whenever the dataset changes; nothing here is hard-coded
/// except the default property-type preference.
#[derive(Debug, Clone)]
pub struct FilterRegistry {
    options: ViewerOptions,
    price_k: IntDomain,
    size: IntDomain,
    airport: IntDomain,
    rent: IntDomain,
    roi_percent: Option<(f64, f64)>,
    rooms: Vec<i64>,
    municipalities: Vec<String>,
    property_types: Vec<String>,
}

impl FilterRegistry {
    pub fn from_dataset(dataset: &Dataset, options: ViewerOptions) -> Result<Self, DataError> {
        let (price_lo, price_hi) = dataset.column_range("price", |l| l.price)?;
        let (_, airport_hi) = dataset.column_range("airport_distance", |l| l.airport_distance)?;

        let roi_percent = if options.roi_filter {
            let (lo, hi) = dataset.column_range("ROI", |l| l.roi_percent())?;
            Some((floor_tenth(lo), ceil_tenth(hi)))
        } else {
            None
        };

        Ok(Self {
            options,
            price_k: IntDomain::truncated((price_lo / 1000.0, price_hi / 1000.0)),
            size: IntDomain::truncated(dataset.column_range("size", |l| l.size)?),
            airport: IntDomain {
                min: 0,
                max: airport_hi.trunc() as i64,
            },
            rent: IntDomain::truncated(dataset.column_range("av_rent", |l| l.average_rent)?),
            roi_percent,
            rooms: dataset.distinct(|l| l.rooms),
            municipalities: dataset.distinct(|l| l.municipality.clone()),
            property_types: dataset.distinct(|l| l.property_type.clone()),
        })
    }

    #[cfg(test)]
    pub fn price_k(&self) -> IntDomain {
        self.price_k
    }

    #[cfg(test)]
    pub fn size(&self) -> IntDomain {
        self.size
    }

    #[cfg(test)]
    pub fn airport(&self) -> IntDomain {
        self.airport
    }

    #[cfg(test)]
    pub fn rent(&self) -> IntDomain {
        self.rent
    }

    #[cfg(test)]
    pub fn roi_percent(&self) -> Option<(f64, f64)> {
        self.roi_percent
    }

    #[cfg(test)]
    pub fn rooms(&self) -> &[i64] {
        &self.rooms
    }

    #[cfg(test)]
    pub fn municipalities(&self) -> &[String] {
        &self.municipalities
    }

    #[cfg(test)]
    pub fn property_types(&self) -> &[String] {
        &self.property_types
    }

    /// Preferred types that actually occur; absent ones are dropped.
    pub fn default_property_types(&self) -> BTreeSet<String> {
        self.property_types
            .iter()
            .filter(|t| DEFAULT_PROPERTY_TYPES.contains(&t.as_str()))
            .cloned()
            .collect()
    }

    pub fn default_state(&self) -> FilterState {
        FilterState {
            price_min_k: self.price_k.min,
            price_max_k: self.price_k.max,
            size_min: self.size.min,
            size_max: self.size.max,
            airport_max: self.airport.max,
            rent_min: self.rent.min,
            rent_max: self.rent.max,
            roi: self.roi_percent,
            rooms: BTreeSet::new(),
            municipalities: BTreeSet::new(),
            property_types: self.default_property_types(),
            restaurants: TriState::All,
            hospitals: TriState::All,
            clinics: TriState::All,
            shops: TriState::All,
        }
    }

    /// Control descriptors in display order, carrying the values of `state`.
    pub fn controls(&self, state: &FilterState) -> Vec<Control> {
        let tip = |text: &'static str| self.options.tooltips.then_some(text);
        let mut controls = vec![
            Control {
                label: "Minimum Property Price (k€)",
                tooltip: tip("Asking price in thousands of euros"),
                group: FilterGroup::PriceAndSize,
                kind: ControlKind::Number {
                    name: "price_min",
                    min: 0.0,
                    max: None,
                    value: state.price_min_k as f64,
                },
            },
            Control {
                label: "Maximum Property Price (k€)",
                tooltip: tip("Asking price in thousands of euros"),
                group: FilterGroup::PriceAndSize,
                kind: ControlKind::Number {
                    name: "price_max",
                    min: 0.0,
                    max: None,
                    value: state.price_max_k as f64,
                },
            },
            Control {
                label: "Minimum Size (m²)",
                tooltip: None,
                group: FilterGroup::PriceAndSize,
                kind: ControlKind::Number {
                    name: "size_min",
                    min: 0.0,
                    max: None,
                    value: state.size_min as f64,
                },
            },
            Control {
                label: "Maximum Size (m²)",
                tooltip: None,
                group: FilterGroup::PriceAndSize,
                kind: ControlKind::Number {
                    name: "size_max",
                    min: 0.0,
                    max: None,
                    value: state.size_max as f64,
                },
            },
            Control {
                label: "Expected Daily Rent (€)",
                tooltip: tip("Estimated average nightly holiday-rental income"),
                group: FilterGroup::Returns,
                kind: ControlKind::Range {
                    min_name: "rent_min",
                    max_name: "rent_max",
                    min: self.rent.min as f64,
                    max: self.rent.max as f64,
                    step: 1.0,
                    value: (state.rent_min as f64, state.rent_max as f64),
                },
            },
        ];

        if let (Some((lo, hi)), Some(value)) = (self.roi_percent, state.roi) {
            controls.push(Control {
                label: "ROI (%)",
                tooltip: tip("Expected yearly rental return as a share of the price"),
                group: FilterGroup::Returns,
                kind: ControlKind::Range {
                    min_name: "roi_min",
                    max_name: "roi_max",
                    min: lo,
                    max: hi,
                    step: 0.1,
                    value,
                },
            });
        }

        controls.push(Control {
            label: "Airport Distance (km)",
            tooltip: tip("Maximum driving distance to Málaga airport"),
            group: FilterGroup::Location,
            kind: ControlKind::Number {
                name: "airport_max",
                min: 0.0,
                max: Some(self.airport.max as f64),
                value: state.airport_max as f64,
            },
        });
        controls.push(Control {
            label: "Municipality",
            tooltip: None,
            group: FilterGroup::Location,
            kind: ControlKind::MultiSelect {
                name: "municipality",
                options: self.municipalities.clone(),
                selected: state.municipalities.clone(),
            },
        });
        controls.push(Control {
            label: "Number of Rooms",
            tooltip: None,
            group: FilterGroup::Property,
            kind: ControlKind::MultiSelect {
                name: "rooms",
                options: self.rooms.iter().map(|r| r.to_string()).collect(),
                selected: state.rooms.iter().map(|r| r.to_string()).collect(),
            },
        });
        controls.push(Control {
            label: "Property Type",
            tooltip: None,
            group: FilterGroup::Property,
            kind: ControlKind::MultiSelect {
                name: "type",
                options: self.property_types.clone(),
                selected: state.property_types.clone(),
            },
        });

        for amenity in Amenity::ALL {
            controls.push(Control {
                label: amenity.label(),
                tooltip: tip("Within walking distance of the listing"),
                group: FilterGroup::Amenities,
                kind: ControlKind::TriState {
                    name: amenity.key(),
                    value: state.amenity(amenity),
                },
            });
        }

        controls
    }
}

// Float noise (0.082 * 100 = 8.200000000000001) must not push a bound a
// whole tenth outward.
fn floor_tenth(x: f64) -> f64 {
    (x * 10.0 + 1e-9).floor() / 10.0
}

fn ceil_tenth(x: f64) -> f64 {
    (x * 10.0 - 1e-9).ceil() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::fixtures::listing;
    use crate::domain::listing::Listing;

    fn dataset() -> Dataset {
        let mut a = listing(5);
        a.price = 149_500.0;
        a.size = 62.7;
        a.average_rent = 75.9;
        a.airport_distance = 12.2;
        a.roi = 0.0512;
        a.rooms = 1;
        a.property_type = "house".to_string();
        a.municipality = "Mijas".to_string();

        let mut b = listing(3);
        b.price = 312_000.0;
        b.size = 118.0;
        b.average_rent = 160.0;
        b.airport_distance = 47.0;
        b.roi = 0.0821;
        b.rooms = 3;

        Dataset::new(vec![a, b])
    }

    fn registry(options: ViewerOptions) -> FilterRegistry {
        FilterRegistry::from_dataset(&dataset(), options).unwrap()
    }

    #[test]
    fn numeric_domains_cover_integral_extremes() {
        let reg = registry(ViewerOptions::default());
        assert_eq!(reg.price_k(), IntDomain { min: 149, max: 312 });
        assert_eq!(reg.size(), IntDomain { min: 62, max: 118 });
        assert_eq!(reg.rent(), IntDomain { min: 75, max: 160 });
        assert_eq!(reg.airport(), IntDomain { min: 0, max: 47 });

        let ds = dataset();
        assert_eq!(
            crate::filters::evaluate(&ds, &reg.default_state()).len(),
            ds.len()
        );
    }

    #[test]
    fn fractional_maxima_truncate_like_an_integer_cast() {
        let mut top = listing(9);
        top.price = 312_250.0;
        top.size = 118.4;
        top.average_rent = 160.4;
        top.airport_distance = 47.6;
        let ds = Dataset::new(vec![listing(1), top]);

        let reg = FilterRegistry::from_dataset(&ds, ViewerOptions::default()).unwrap();
        assert_eq!(reg.price_k(), IntDomain { min: 200, max: 312 });
        assert_eq!(reg.size(), IntDomain { min: 80, max: 118 });
        assert_eq!(reg.rent(), IntDomain { min: 90, max: 160 });
        assert_eq!(reg.airport().max, 47);

        // The truncated bounds leave the row holding the maxima out.
        let rows = crate::filters::evaluate(&ds, &reg.default_state());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].property_code.to_string(), "1");
    }

    #[test]
    fn roi_domain_is_percent_scaled_to_one_decimal() {
        let reg = registry(ViewerOptions::default());
        assert_eq!(reg.roi_percent(), Some((5.1, 8.3)));
    }

    #[test]
    fn roi_domain_absent_when_disabled() {
        let reg = registry(ViewerOptions {
            roi_filter: false,
            tooltips: false,
        });
        assert_eq!(reg.roi_percent(), None);
        assert_eq!(reg.default_state().roi, None);
        assert!(reg
            .controls(&reg.default_state())
            .iter()
            .all(|c| c.label != "ROI (%)" && c.tooltip.is_none()));
    }

    #[test]
    fn categorical_domains_are_sorted_distinct_values() {
        let reg = registry(ViewerOptions::default());
        assert_eq!(reg.rooms(), &[1, 3]);
        assert_eq!(reg.municipalities(), &["Marbella".to_string(), "Mijas".to_string()]);
        assert_eq!(reg.property_types(), &["flat".to_string(), "house".to_string()]);
    }

    #[test]
    fn property_type_default_drops_absent_types() {
        let reg = registry(ViewerOptions::default());
        assert_eq!(
            reg.default_property_types(),
            BTreeSet::from(["flat".to_string()])
        );
    }

    #[test]
    fn property_type_default_may_be_empty() {
        let mut only_houses: Listing = listing(1);
        only_houses.property_type = "house".to_string();
        let reg = FilterRegistry::from_dataset(
            &Dataset::new(vec![only_houses]),
            ViewerOptions::default(),
        )
        .unwrap();
        assert!(reg.default_property_types().is_empty());
    }

    #[test]
    fn defaults_leave_multi_selects_and_amenities_open() {
        let state = registry(ViewerOptions::default()).default_state();
        assert!(state.rooms.is_empty());
        assert!(state.municipalities.is_empty());
        for amenity in Amenity::ALL {
            assert_eq!(state.amenity(amenity), TriState::All);
        }
    }

    #[test]
    fn empty_dataset_fails_fast() {
        let err = FilterRegistry::from_dataset(&Dataset::default(), ViewerOptions::default())
            .unwrap_err();
        assert!(matches!(err, DataError::EmptyDataset { .. }));
    }

    #[test]
    fn controls_reflect_current_state() {
        let reg = registry(ViewerOptions::default());
        let mut state = reg.default_state();
        state.price_max_k = 200;
        state.shops = TriState::No;

        let controls = reg.controls(&state);
        assert!(controls.iter().any(|c| matches!(
            c.kind,
            ControlKind::Number { name: "price_max", value, .. } if value == 200.0
        )));
        assert!(controls.iter().any(|c| matches!(
            c.kind,
            ControlKind::TriState { name: "shops", value: TriState::No }
        )));
    }
}
