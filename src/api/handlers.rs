//! HTTP request handlers for the Margin Classification & Aggregation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::collections::BTreeSet;
use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_alerts, aggregate_by_company, classify_margin, derive_metrics, metric_tooltip,
    tier_color,
};
use crate::cache::CacheLookup;
use crate::error::EngineError;
use crate::models::{EmployeeMetric, EmployeeRecord, ReportingPeriod};

use super::request::{InvalidateRequest, ReportRequest};
use super::response::{
    ApiError, ApiErrorResponse, CachedReportResponse, InvalidateResponse, MetricResponse,
    ReportResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/reports/:year/:month", get(cached_report_handler))
        .route("/invalidate", post(invalidate_handler))
        .with_state(state)
}

/// Handler for the POST /report endpoint.
///
/// Accepts raw employee payroll records with period figures, derives the
/// profitability report, caches it under the period key, and returns it.
async fn report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Validate the reporting period
    let period = match ReportingPeriod::new(request.period.year, request.period.month) {
        Ok(period) => period,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                year = request.period.year,
                month = request.period.month,
                "Invalid reporting period"
            );
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    // Derive the report
    let start_time = Instant::now();
    let employee_count = request.employees.len();
    let response = build_report(period, request);

    // Cache under the period key, tagged by period and by company
    let mut tags = vec!["reports".to_string(), format!("period:{}", period)];
    let companies: BTreeSet<&str> = response
        .companies
        .iter()
        .map(|c| c.company.as_str())
        .collect();
    tags.extend(companies.into_iter().map(|c| format!("company:{}", c)));
    state
        .cache()
        .write()
        .expect("cache lock poisoned")
        .insert(period.cache_key(), response.clone(), tags);

    let duration = start_time.elapsed();
    info!(
        correlation_id = %correlation_id,
        period = %period,
        employee_count,
        critical_count = response.alerts.critical_count,
        duration_us = duration.as_micros(),
        "Report computed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Derives metrics, alerts, and company rollups for a report request.
fn build_report(period: ReportingPeriod, request: ReportRequest) -> ReportResponse {
    let metrics: Vec<EmployeeMetric> = request
        .employees
        .into_iter()
        .map(|employee| {
            let revenue = employee.revenue;
            let cost = employee.cost;
            let record: EmployeeRecord = employee.into();
            derive_metrics(&record, revenue, cost)
        })
        .collect();

    let alerts = aggregate_alerts(&metrics);
    let companies = aggregate_by_company(&metrics);

    let metrics = metrics
        .into_iter()
        .map(|metric| {
            let tier = classify_margin(metric.margin);
            MetricResponse {
                tier,
                color: tier_color(tier),
                tooltip: metric_tooltip(&metric),
                metric,
            }
        })
        .collect();

    ReportResponse {
        period: period.to_string(),
        generated_at: Utc::now(),
        metrics,
        alerts,
        companies,
    }
}

/// Handler for the GET /reports/{year}/{month} endpoint.
///
/// Serves the cached report for a period. Stale entries are served with a
/// flag; only a true miss returns 404.
async fn cached_report_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let period = match ReportingPeriod::new(year, month) {
        Ok(period) => period,
        Err(err) => {
            warn!(correlation_id = %correlation_id, year, month, "Invalid reporting period");
            let api_error: ApiErrorResponse = err.into();
            return (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response();
        }
    };

    let cache = state.cache().read().expect("cache lock poisoned");
    match cache.get(&period.cache_key()) {
        CacheLookup::Fresh(report) => {
            info!(correlation_id = %correlation_id, period = %period, "Cache hit (fresh)");
            Json(CachedReportResponse {
                stale: false,
                report: report.clone(),
            })
            .into_response()
        }
        CacheLookup::Stale(report) => {
            info!(correlation_id = %correlation_id, period = %period, "Cache hit (stale)");
            Json(CachedReportResponse {
                stale: true,
                report: report.clone(),
            })
            .into_response()
        }
        CacheLookup::Miss => {
            warn!(correlation_id = %correlation_id, period = %period, "Cache miss");
            let api_error: ApiErrorResponse = EngineError::ReportNotCached {
                period: period.to_string(),
            }
            .into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for the POST /invalidate endpoint.
///
/// Drops every cached report carrying the given resource tag.
async fn invalidate_handler(
    State(state): State<AppState>,
    payload: Result<Json<InvalidateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(correlation_id = %correlation_id, error = %rejection, "Invalid invalidate request");
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::malformed_json(rejection.body_text())),
            )
                .into_response();
        }
    };

    let invalidated = state
        .cache()
        .write()
        .expect("cache lock poisoned")
        .invalidate_tag(&request.tag);

    info!(
        correlation_id = %correlation_id,
        tag = %request.tag,
        invalidated,
        "Cache invalidation processed"
    );
    Json(InvalidateResponse {
        tag: request.tag,
        invalidated,
    })
    .into_response()
}
