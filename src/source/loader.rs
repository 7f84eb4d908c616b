// source/loader.rs
use crate::domain::dataset::Dataset;
use crate::domain::listing::Listing;
use crate::errors::DataError;
use log::info;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("property_viewer/", env!("CARGO_PKG_VERSION"));

/// Every column the viewer reads. Anything else in the file is ignored.
pub const REQUIRED_COLUMNS: [&str; 15] = [
    "propertyCode",
    "price",
    "size",
    "rooms",
    "bathrooms",
    "airport_distance",
    "av_rent",
    "ROI",
    "municipality",
    "propertyType",
    "url",
    "restaurants",
    "hospitals",
    "clinics",
    "shops",
];

/// Something that, given a location, yields the listings table.
pub trait DataSource: Send + Sync {
    fn fetch(&self, location: &str) -> Result<Dataset, DataError>;
}

/// Reads a CSV over HTTP(S) or from the local filesystem.
pub struct CsvSource {
    client: Client,
}

impl CsvSource {
    pub fn new(timeout: Duration) -> Result<Self, DataError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| DataError::Fetch {
                location: "<client>".to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { client })
    }

    fn download(&self, location: &str) -> Result<String, DataError> {
        let fetch_err = |e: reqwest::Error| DataError::Fetch {
            location: location.to_string(),
            message: e.to_string(),
        };

        self.client
            .get(location)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.text())
            .map_err(fetch_err)
    }
}

impl DataSource for CsvSource {
    fn fetch(&self, location: &str) -> Result<Dataset, DataError> {
        let text = if is_remote(location) {
            self.download(location)?
        } else {
            std::fs::read_to_string(location).map_err(|e| DataError::Read {
                location: location.to_string(),
                message: e.to_string(),
            })?
        };

        let dataset = parse_csv(&text)?;
        info!("Parsed {} listings from {}", dataset.len(), location);
        Ok(dataset)
    }
}

fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Parse the listings CSV. The whole file is rejected on the first bad row:
/// a partially loaded table is never handed out.
pub fn parse_csv(text: &str) -> Result<Dataset, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| DataError::Csv {
            row: 0,
            message: e.to_string(),
        })?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(DataError::MissingColumn(missing.to_string()));
    }

    let mut listings = Vec::new();

    for (i, result) in reader.deserialize::<Listing>().enumerate() {
        let row = i + 1;
        let listing = result.map_err(|e| DataError::Csv {
            row,
            message: e.to_string(),
        })?;

        if let Some((column, value)) = listing
            .numeric_fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(DataError::InvalidValue {
                row,
                column: column.to_string(),
                value: value.to_string(),
            });
        }

        listings.push(listing);
    }

    Ok(Dataset::new(listings))
}
