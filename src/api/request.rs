//! Request types for the Margin Classification & Aggregation Engine API.
//!
//! This module defines the JSON request structures for the `/report` and
//! `/invalidate` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, EmployeeStatus};

/// Request body for the `/report` endpoint.
///
/// Contains the reporting period and the raw employee payroll records with
/// their period-scoped revenue and cost figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// The reporting period the figures are scoped to.
    pub period: PeriodRequest,
    /// The employee records to derive metrics for.
    pub employees: Vec<EmployeeRecordRequest>,
}

/// Reporting period in a report request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1..=12).
    pub month: u32,
}

/// Employee payroll record in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRecordRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The client company the employee is dispatched to.
    pub dispatch_company: String,
    /// The employee's assignment status.
    pub status: EmployeeStatus,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The hourly rate paid to the employee.
    pub hourly_rate: Decimal,
    /// The hourly rate billed to the dispatch company.
    pub billing_rate: Decimal,
    /// Revenue billed for this employee over the period.
    pub revenue: Decimal,
    /// Cost carried for this employee over the period.
    pub cost: Decimal,
}

impl From<EmployeeRecordRequest> for EmployeeRecord {
    fn from(request: EmployeeRecordRequest) -> Self {
        EmployeeRecord {
            id: request.id,
            name: request.name,
            dispatch_company: request.dispatch_company,
            status: request.status,
            hire_date: request.hire_date,
            hourly_rate: request.hourly_rate,
            billing_rate: request.billing_rate,
        }
    }
}

/// Request body for the `/invalidate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvalidateRequest {
    /// The resource tag whose cache entries should be dropped.
    pub tag: String,
}
