// src/domain/listing.rs

use serde::{Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a listing. Codes are numeric in practice, but anything that
/// does not parse as an integer is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyCode {
    Numeric(i64),
    Text(String),
}

impl PropertyCode {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => PropertyCode::Numeric(n),
            Err(_) => PropertyCode::Text(raw.to_string()),
        }
    }
}

// Numeric codes sort before text codes; each kind sorts naturally.
impl Ord for PropertyCode {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (PropertyCode::Numeric(a), PropertyCode::Numeric(b)) => a.cmp(b),
            (PropertyCode::Text(a), PropertyCode::Text(b)) => a.cmp(b),
            (PropertyCode::Numeric(_), PropertyCode::Text(_)) => Ordering::Less,
            (PropertyCode::Text(_), PropertyCode::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for PropertyCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PropertyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyCode::Numeric(n) => write!(f, "{n}"),
            PropertyCode::Text(s) => write!(f, "{s}"),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PropertyCode::parse(&raw))
    }
}

/// The four amenity flags a listing carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Amenity {
    Restaurants,
    Hospitals,
    Clinics,
    Shops,
}

impl Amenity {
    pub const ALL: [Amenity; 4] = [
        Amenity::Restaurants,
        Amenity::Hospitals,
        Amenity::Clinics,
        Amenity::Shops,
    ];

    /// Query-string key and source column name.
    pub fn key(self) -> &'static str {
        match self {
            Amenity::Restaurants => "restaurants",
            Amenity::Hospitals => "hospitals",
            Amenity::Clinics => "clinics",
            Amenity::Shops => "shops",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Amenity::Restaurants => "Near Restaurants",
            Amenity::Hospitals => "Near Hospitals",
            Amenity::Clinics => "Near Clinics",
            Amenity::Shops => "Near Shops",
        }
    }
}

/// One row of the listings table. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    #[serde(rename = "propertyCode")]
    pub property_code: PropertyCode,
    pub price: f64,
    pub size: f64,
    pub rooms: i64,
    pub bathrooms: i64,
    #[serde(rename = "airport_distance")]
    pub airport_distance: f64,
    #[serde(rename = "av_rent")]
    pub average_rent: f64,
    /// Stored as a fraction: 0.082 means 8.2 %.
    #[serde(rename = "ROI")]
    pub roi: f64,
    pub municipality: String,
    #[serde(rename = "propertyType")]
    pub property_type: String,
    pub url: String,
    #[serde(rename = "restaurants", deserialize_with = "deserialize_flag")]
    pub near_restaurants: bool,
    #[serde(rename = "hospitals", deserialize_with = "deserialize_flag")]
    pub near_hospitals: bool,
    #[serde(rename = "clinics", deserialize_with = "deserialize_flag")]
    pub near_clinics: bool,
    #[serde(rename = "shops", deserialize_with = "deserialize_flag")]
    pub near_shops: bool,
}

impl Listing {
    pub fn has(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Restaurants => self.near_restaurants,
            Amenity::Hospitals => self.near_hospitals,
            Amenity::Clinics => self.near_clinics,
            Amenity::Shops => self.near_shops,
        }
    }

    /// ROI on the scale it is displayed and filtered in.
    pub fn roi_percent(&self) -> f64 {
        self.roi * 100.0
    }

    /// Numeric columns that must hold finite values, by source column name.
    pub fn numeric_fields(&self) -> [(&'static str, f64); 5] {
        [
            ("price", self.price),
            ("size", self.size),
            ("airport_distance", self.airport_distance),
            ("av_rent", self.average_rent),
            ("ROI", self.roi),
        ]
    }
}

/// Amenity flags arrive as 0/1 (sometimes written as floats by the exporter).
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match raw.trim() {
        "1" | "1.0" | "true" | "True" => Ok(true),
        "0" | "0.0" | "false" | "False" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "expected amenity flag 0 or 1, got '{other}'"
        ))),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_codes_sort_before_text_codes() {
        let mut codes = vec![
            PropertyCode::parse("abc"),
            PropertyCode::parse("10"),
            PropertyCode::parse("9"),
        ];
        codes.sort();
        assert_eq!(
            codes,
            vec![
                PropertyCode::Numeric(9),
                PropertyCode::Numeric(10),
                PropertyCode::Text("abc".to_string()),
            ]
        );
    }

    #[test]
    fn roi_percent_scales_fraction() {
        let mut l = fixtures::listing(1);
        l.roi = 0.0821;
        assert!((l.roi_percent() - 8.21).abs() < 1e-9);
    }
}
