// src/filters/state.rs

use crate::domain::listing::Amenity;
use crate::errors::ServerError;
use crate::filters::registry::FilterRegistry;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A filter with exactly three states: no restriction, require-true, require-false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TriState {
    #[default]
    All,
    Yes,
    No,
}

impl TriState {
    pub const ALL: [TriState; 3] = [TriState::All, TriState::Yes, TriState::No];

    pub fn as_str(self) -> &'static str {
        match self {
            TriState::All => "All",
            TriState::Yes => "Yes",
            TriState::No => "No",
        }
    }

    /// `None` means no restriction.
    pub fn required(self) -> Option<bool> {
        match self {
            TriState::All => None,
            TriState::Yes => Some(true),
            TriState::No => Some(false),
        }
    }
}

impl FromStr for TriState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "" => Ok(TriState::All),
            "yes" => Ok(TriState::Yes),
            "no" => Ok(TriState::No),
            _ => Err(format!("expected All, Yes or No, got '{s}'")),
        }
    }
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of every filter control for one evaluation pass.
///
/// Price bounds are in thousands; the evaluator converts them.
/// ROI bounds are percentages (8.2 means 8.2 %), `None` when the ROI filter
/// is switched off.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub price_min_k: i64,
    pub price_max_k: i64,
    pub size_min: i64,
    pub size_max: i64,
    pub airport_max: i64,
    pub rent_min: i64,
    pub rent_max: i64,
    pub roi: Option<(f64, f64)>,
    pub rooms: BTreeSet<i64>,
    pub municipalities: BTreeSet<String>,
    pub property_types: BTreeSet<String>,
    pub restaurants: TriState,
    pub hospitals: TriState,
    pub clinics: TriState,
    pub shops: TriState,
}

impl FilterState {
    pub fn amenity(&self, amenity: Amenity) -> TriState {
        match amenity {
            Amenity::Restaurants => self.restaurants,
            Amenity::Hospitals => self.hospitals,
            Amenity::Clinics => self.clinics,
            Amenity::Shops => self.shops,
        }
    }

    pub fn set_amenity(&mut self, amenity: Amenity, value: TriState) {
        match amenity {
            Amenity::Restaurants => self.restaurants = value,
            Amenity::Hospitals => self.hospitals = value,
            Amenity::Clinics => self.clinics = value,
            Amenity::Shops => self.shops = value,
        }
    }

    /// Build the state from a query string, starting from the registry's
    /// defaults. On a submitted form an absent multi-select means "nothing
    /// selected"; on a first visit it means "use the default selection".
    pub fn from_query(query: &QueryParams, registry: &FilterRegistry) -> Result<Self, ServerError> {
        let mut state = registry.default_state();
        let submitted = query.first("submitted").is_some();

        override_number(query, "price_min", &mut state.price_min_k)?;
        override_number(query, "price_max", &mut state.price_max_k)?;
        override_number(query, "size_min", &mut state.size_min)?;
        override_number(query, "size_max", &mut state.size_max)?;
        override_number(query, "airport_max", &mut state.airport_max)?;
        override_number(query, "rent_min", &mut state.rent_min)?;
        override_number(query, "rent_max", &mut state.rent_max)?;

        if let Some((lo, hi)) = state.roi.as_mut() {
            override_number(query, "roi_min", lo)?;
            override_number(query, "roi_max", hi)?;
        }

        if submitted || query.has("rooms") {
            state.rooms = query
                .all("rooms")
                .map(|v| parse_value::<i64>("rooms", v))
                .collect::<Result<_, _>>()?;
        }
        if submitted || query.has("municipality") {
            state.municipalities = query.all("municipality").map(str::to_string).collect();
        }
        if submitted || query.has("type") {
            state.property_types = query.all("type").map(str::to_string).collect();
        }

        for amenity in Amenity::ALL {
            if let Some(raw) = query.first(amenity.key()) {
                state.set_amenity(amenity, parse_value(amenity.key(), raw)?);
            }
        }

        Ok(state)
    }

    /// Encode as a query string that `from_query` reads back into this state.
    pub fn to_query(&self) -> String {
        let mut out = url::form_urlencoded::Serializer::new(String::new());
        out.append_pair("submitted", "1");
        out.append_pair("price_min", &self.price_min_k.to_string());
        out.append_pair("price_max", &self.price_max_k.to_string());
        out.append_pair("size_min", &self.size_min.to_string());
        out.append_pair("size_max", &self.size_max.to_string());
        out.append_pair("airport_max", &self.airport_max.to_string());
        out.append_pair("rent_min", &self.rent_min.to_string());
        out.append_pair("rent_max", &self.rent_max.to_string());
        if let Some((lo, hi)) = self.roi {
            out.append_pair("roi_min", &lo.to_string());
            out.append_pair("roi_max", &hi.to_string());
        }
        for rooms in &self.rooms {
            out.append_pair("rooms", &rooms.to_string());
        }
        for m in &self.municipalities {
            out.append_pair("municipality", m);
        }
        for t in &self.property_types {
            out.append_pair("type", t);
        }
        for amenity in Amenity::ALL {
            out.append_pair(amenity.key(), self.amenity(amenity).as_str());
        }
        out.finish()
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, ServerError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| ServerError::BadRequest(format!("invalid value '{raw}' for {key}: {e}")))
}

// An empty input field keeps the default.
fn override_number<T>(query: &QueryParams, key: &str, slot: &mut T) -> Result<(), ServerError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match query.first(key) {
        Some(raw) if !raw.trim().is_empty() => {
            *slot = parse_value(key, raw)?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Decoded query-string pairs, keeping repeated keys in order.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.pairs
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has(&self, key: &str) -> bool {
        self.first(key).is_some()
    }
}
