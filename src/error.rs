//! Error types for the Margin Classification & Aggregation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The calculation functions themselves are total and never fail; errors
//! only arise at the configuration and service boundaries.

use thiserror::Error;

/// The main error type for the Margin Classification & Aggregation Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use margin_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A reporting period was invalid (e.g. month outside 1..=12).
    #[error("Invalid reporting period {year}-{month}: {message}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month.
        month: u32,
        /// A description of what made the period invalid.
        message: String,
    },

    /// No cached report exists for the requested period.
    #[error("No cached report for period {period}")]
    ReportNotCached {
        /// The period key that missed the cache (e.g. "2026-08").
        period: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
