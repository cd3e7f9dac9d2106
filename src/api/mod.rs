//! HTTP API module for the Margin Classification & Aggregation Engine.
//!
//! This module provides the REST endpoints for computing profitability
//! reports, serving cached reports, and invalidating cache entries by tag.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EmployeeRecordRequest, InvalidateRequest, PeriodRequest, ReportRequest};
pub use response::{ApiError, CachedReportResponse, MetricResponse, ReportResponse};
pub use state::AppState;
