use crate::app::App;
use crate::config::{AppConfig, ViewerOptions};
use crate::source::CsvSource;
use astra::{Body, Response};
use std::io::Read;
use std::time::Duration;

pub const FIXTURE_CSV: &str = "data/sample_listings.csv";

/// An app serving the fixture CSV from disk.
pub fn init_test_app(options: ViewerOptions) -> App {
    app_for_source(FIXTURE_CSV, options)
}

pub fn app_for_source(source: &str, options: ViewerOptions) -> App {
    let config = AppConfig {
        source: source.to_string(),
        options,
        ..AppConfig::default()
    };
    let csv = CsvSource::new(Duration::from_secs(5))
        .unwrap_or_else(|e| panic!("CSV source initialization failed: {e}"));

    App::new(config, Box::new(csv))
}

pub fn get(uri: &str) -> http::Request<Body> {
    http::Request::builder()
        .method(http::Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
