use dotenvy::dotenv;
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_SOURCE: &str = "https://xlasj05.blob.core.windows.net/csv/idealista_A10.csv";
const DEFAULT_TITLE: &str = "Costa del Sol Property Viewer";

/// Presentation and filter-set switches. The two historical variants of the
/// viewer differ only in these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub roi_filter: bool,
    pub tooltips: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            roi_filter: true,
            tooltips: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub fetch_timeout_secs: u64,
    pub title: String,
    pub options: ViewerOptions,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            fetch_timeout_secs: 60,
            title: DEFAULT_TITLE.to_string(),
            options: ViewerOptions::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, String> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let source = lookup("LISTINGS_SOURCE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.source);
        let title = lookup("PAGE_TITLE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.title);

        Ok(Self {
            source,
            bind_addr: parse_var(&lookup, "BIND_ADDR", defaults.bind_addr)?,
            max_workers: parse_var(&lookup, "MAX_WORKERS", defaults.max_workers)?,
            fetch_timeout_secs: parse_var(
                &lookup,
                "FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout_secs,
            )?,
            title,
            options: ViewerOptions {
                roi_filter: parse_var(&lookup, "ROI_FILTER", defaults.options.roi_filter)?,
                tooltips: parse_var(&lookup, "COLUMN_TOOLTIPS", defaults.options.tooltips)?,
            },
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map_err(|e| format!("invalid {key} '{raw}': {e}")),
        _ => Ok(default),
    }
}
