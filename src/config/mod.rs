//! Configuration loading and management for the Margin Classification &
//! Aggregation Engine.
//!
//! This module loads the engine configuration from a YAML file: the fetch
//! policy the data boundary honors (cache freshness window, retry count,
//! refetch-on-focus). Tier thresholds are fixed business constants and are
//! deliberately not configurable here.
//!
//! # Example
//!
//! ```no_run
//! use margin_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Retry count: {}", config.fetch().retry);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, FetchPolicy};
