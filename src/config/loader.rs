//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, FetchPolicy};

/// Loads and provides access to the engine configuration.
///
/// # Example
///
/// ```no_run
/// use margin_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// let policy = loader.fetch();
/// println!("Stale window: {}ms", policy.stale_time_ms);
/// # Ok::<(), margin_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when the file cannot be read
    /// and [`EngineError::ConfigParseError`] when it contains invalid YAML
    /// or fails to deserialize.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader from an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns the complete engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the fetch-layer policy.
    pub fn fetch(&self) -> &FetchPolicy {
        &self.config.fetch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_returns_not_found() {
        let result = ConfigLoader::load("/definitely/missing/engine.yaml");
        match result.unwrap_err() {
            EngineError::ConfigNotFound { path } => {
                assert!(path.contains("engine.yaml"));
            }
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_exposes_policy() {
        let loader = ConfigLoader::from_config(EngineConfig {
            fetch: FetchPolicy {
                stale_time_ms: 1_000,
                retry: 2,
                refetch_on_window_focus: false,
            },
        });
        assert_eq!(loader.fetch().stale_time_ms, 1_000);
        assert_eq!(loader.fetch().retry, 2);
        assert!(!loader.fetch().refetch_on_window_focus);
    }

    #[test]
    fn test_load_shipped_config() {
        let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
        assert_eq!(loader.fetch(), &FetchPolicy::default());
    }
}
