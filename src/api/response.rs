//! Response types for the Margin Classification & Aggregation Engine API.
//!
//! This module defines the report response structures plus the error
//! response handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculation::{MarginTier, TierColor, TooltipRow};
use crate::error::EngineError;
use crate::models::{AlertsSummary, CompanySummary, EmployeeMetric};

/// One employee's metrics as rendered in a report response.
///
/// Carries the derived metric alongside its tier classification, display
/// colors, and the typed tooltip rows the dashboard's charts consume.
#[derive(Debug, Clone, Serialize)]
pub struct MetricResponse {
    /// The derived profitability metrics.
    #[serde(flatten)]
    pub metric: EmployeeMetric,
    /// The margin tier the metric classifies into.
    pub tier: MarginTier,
    /// Display colors for the tier.
    pub color: TierColor,
    /// Typed tooltip rows for chart rendering.
    pub tooltip: Vec<TooltipRow>,
}

/// Response body for the `/report` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    /// The reporting period, rendered as `YYYY-MM`.
    pub period: String,
    /// When this report was computed.
    pub generated_at: DateTime<Utc>,
    /// Per-employee metrics.
    pub metrics: Vec<MetricResponse>,
    /// Alert counts across all employees.
    pub alerts: AlertsSummary,
    /// Per-company rollups, in company-name order.
    pub companies: Vec<CompanySummary>,
}

/// Response body for the cached-report endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CachedReportResponse {
    /// True when the entry outlived its freshness window.
    pub stale: bool,
    /// The cached report.
    pub report: ReportResponse,
}

/// Response body for the `/invalidate` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct InvalidateResponse {
    /// The tag that was invalidated.
    pub tag: String,
    /// How many cache entries were dropped.
    pub invalidated: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidPeriod {
                year,
                month,
                message,
            } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    format!("Invalid reporting period {}-{}", year, month),
                    message,
                ),
            },
            EngineError::ReportNotCached { period } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::with_details(
                    "REPORT_NOT_CACHED",
                    format!("No cached report for period {}", period),
                    "Compute the report via POST /report before requesting it from the cache",
                ),
            },
        }
    }
}
