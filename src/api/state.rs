//! Application state for the Margin Classification & Aggregation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::{Arc, RwLock};

use crate::cache::ReportCache;
use crate::config::ConfigLoader;

use super::response::ReportResponse;

/// Shared application state.
///
/// Contains resources shared across all request handlers: the loaded
/// engine configuration and the report cache it governs.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Computed reports cached under the configured fetch policy.
    cache: Arc<RwLock<ReportCache<ReportResponse>>>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let cache = ReportCache::new(config.fetch().clone());
        Self {
            config: Arc::new(config),
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the shared report cache.
    pub fn cache(&self) -> &RwLock<ReportCache<ReportResponse>> {
        &self.cache
    }
}
