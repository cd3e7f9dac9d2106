//! Configuration types for the engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::time::Duration;

use serde::Deserialize;

/// Fetch-layer policy recognized by the data boundary.
///
/// These settings govern how computed reports are cached and how the fetch
/// collaborator behaves: the cache freshness window, the number of retry
/// attempts on fetch failure, and whether data is re-validated when the
/// dashboard window regains focus. Retry and refocus are surfaced to the
/// fetch boundary; the engine's cache consumes the stale-time window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FetchPolicy {
    /// Cache freshness window in milliseconds.
    pub stale_time_ms: u64,
    /// Retry attempts on fetch failure.
    pub retry: u32,
    /// Whether to re-validate cached data when the window regains focus.
    pub refetch_on_window_focus: bool,
}

impl FetchPolicy {
    /// Returns the freshness window as a [`Duration`].
    pub fn stale_time(&self) -> Duration {
        Duration::from_millis(self.stale_time_ms)
    }
}

impl Default for FetchPolicy {
    /// The dashboard's defaults: five-minute freshness window, a single
    /// retry, revalidation on focus.
    fn default() -> Self {
        Self {
            stale_time_ms: 300_000,
            retry: 1,
            refetch_on_window_focus: true,
        }
    }
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Fetch-layer policy.
    #[serde(default)]
    pub fetch: FetchPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_dashboard_defaults() {
        let policy = FetchPolicy::default();
        assert_eq!(policy.stale_time_ms, 300_000);
        assert_eq!(policy.retry, 1);
        assert!(policy.refetch_on_window_focus);
    }

    #[test]
    fn test_stale_time_converts_to_duration() {
        let policy = FetchPolicy {
            stale_time_ms: 1_500,
            retry: 0,
            refetch_on_window_focus: false,
        };
        assert_eq!(policy.stale_time(), Duration::from_millis(1_500));
    }

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r#"
fetch:
  stale_time_ms: 60000
  retry: 3
  refetch_on_window_focus: false
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fetch.stale_time_ms, 60_000);
        assert_eq!(config.fetch.retry, 3);
        assert!(!config.fetch.refetch_on_window_focus);
    }

    #[test]
    fn test_deserialize_empty_config_uses_defaults() {
        let yaml = "{}";
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.fetch, FetchPolicy::default());
    }
}
