use crate::config::AppConfig;
use crate::domain::dataset::Dataset;
use crate::errors::DataError;
use crate::source::{DataSource, DatasetCache};
use std::sync::Arc;

/// Everything a request handler needs. Shared read-only across workers;
/// the only interior mutability is the dataset cache.
pub struct App {
    pub config: AppConfig,
    cache: DatasetCache,
    source: Box<dyn DataSource>,
}

impl App {
    pub fn new(config: AppConfig, source: Box<dyn DataSource>) -> Self {
        Self {
            config,
            cache: DatasetCache::new(),
            source,
        }
    }

    /// The canonical dataset for the configured source, loaded on first use.
    pub fn dataset(&self) -> Result<Arc<Dataset>, DataError> {
        self.cache
            .get_or_load(&self.config.source, self.source.as_ref())
    }

    pub fn cached_datasets(&self) -> usize {
        self.cache.len()
    }
}
