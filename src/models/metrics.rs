//! Derived per-employee profitability metrics.
//!
//! This module contains the [`EmployeeMetric`] type produced by the metric
//! deriver from a raw payroll record and its period figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the derived profitability metrics for one employee in one
/// reporting period.
///
/// Every recomputation produces a fresh set of metrics; nothing is mutated
/// in place. The `margin` and `rate_ratio` fields are percentages and are
/// zero-denominator-safe: they default to 0 rather than dividing by zero.
///
/// # Example
///
/// ```
/// use margin_engine::models::EmployeeMetric;
/// use rust_decimal::Decimal;
///
/// let metric = EmployeeMetric {
///     employee_id: "emp_001".to_string(),
///     name: "Sato Kenji".to_string(),
///     dispatch_company: "Acme Logistics".to_string(),
///     hourly_rate: Decimal::new(1500, 0),
///     billing_rate: Decimal::new(1700, 0),
///     revenue: Decimal::new(272000, 0),
///     cost: Decimal::new(240000, 0),
///     profit: Decimal::new(32000, 0),
///     margin: Decimal::new(1176, 2),
///     rate_ratio: Decimal::new(1333, 2),
///     is_critical: false,
///     is_under_target: true,
/// };
/// assert_eq!(metric.profit, metric.revenue - metric.cost);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeMetric {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's display name.
    pub name: String,
    /// The client company the employee is dispatched to.
    pub dispatch_company: String,
    /// The hourly rate paid to the employee.
    pub hourly_rate: Decimal,
    /// The hourly rate billed to the dispatch company.
    pub billing_rate: Decimal,
    /// Revenue billed for this employee over the period.
    pub revenue: Decimal,
    /// Cost carried for this employee over the period.
    pub cost: Decimal,
    /// Profit over the period (revenue minus cost; may be negative).
    pub profit: Decimal,
    /// Profit margin as a percentage of revenue (0 when revenue is not positive).
    pub margin: Decimal,
    /// Markup of billing rate over hourly rate as a percentage
    /// (0 when the hourly rate is not positive).
    pub rate_ratio: Decimal,
    /// Whether the margin classifies into the critical tier.
    pub is_critical: bool,
    /// Whether the margin sits below target while above the critical band.
    pub is_under_target: bool,
}
