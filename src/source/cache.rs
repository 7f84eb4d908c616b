// source/cache.rs
use crate::domain::dataset::Dataset;
use crate::errors::DataError;
use crate::source::DataSource;
use log::{debug, error, info};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Memoized datasets keyed by source location.
///
/// Entries live for the lifetime of the process and are never invalidated.
/// Failed loads are not stored, so the next request makes a fresh attempt.
/// The lock is held across a fetch: concurrent first requests for a location
/// wait for the one load instead of each fetching it. The entry count is
/// kept outside the lock so `len` never waits on a download.
#[derive(Default)]
pub struct DatasetCache {
    entries: Mutex<HashMap<String, Arc<Dataset>>>,
    loaded: AtomicUsize,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(
        &self,
        location: &str,
        source: &dyn DataSource,
    ) -> Result<Arc<Dataset>, DataError> {
        // A panic elsewhere cannot leave the map half-written, so a poisoned
        // lock is still safe to use.
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(dataset) = entries.get(location) {
            debug!("Dataset cache hit for {location}");
            return Ok(Arc::clone(dataset));
        }

        info!("Loading listings from {location}");
        let started = Instant::now();

        let dataset = source.fetch(location).map_err(|e| {
            error!("Loading {location} failed: {e}");
            e
        })?;

        info!(
            "Loaded {} listings from {location} in {:?}",
            dataset.len(),
            started.elapsed()
        );

        let dataset = Arc::new(dataset);
        entries.insert(location.to_string(), Arc::clone(&dataset));
        self.loaded.store(entries.len(), Ordering::Release);
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.loaded.load(Ordering::Acquire)
    }
}
