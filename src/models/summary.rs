//! Aggregated summary models.
//!
//! This module contains the [`AlertsSummary`] and [`CompanySummary`] types
//! produced by the aggregator from a set of employee metrics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Alert counts across a set of employee metrics.
///
/// Each count tallies the employees satisfying one alert predicate. The
/// counts drive notification badges in the consuming dashboard.
///
/// # Example
///
/// ```
/// use margin_engine::models::AlertsSummary;
///
/// let alerts = AlertsSummary {
///     critical_count: 2,
///     under_target_count: 5,
///     negative_profit: 1,
///     low_rate_ratio: 3,
/// };
/// assert_eq!(alerts.critical_count, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertsSummary {
    /// Employees whose margin classifies as critical.
    pub critical_count: usize,
    /// Employees whose margin is below target but above the critical band.
    pub under_target_count: usize,
    /// Employees whose period profit is negative.
    pub negative_profit: usize,
    /// Employees whose rate ratio is below the low-markup threshold.
    pub low_rate_ratio: usize,
}

/// Company-level profitability rollup for one reporting period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanySummary {
    /// The dispatch company name.
    pub company: String,
    /// Number of employees dispatched to this company.
    pub employee_count: usize,
    /// Sum of period profit across the company's employees.
    pub total_monthly_profit: Decimal,
    /// Sum of period revenue across the company's employees.
    pub total_monthly_revenue: Decimal,
    /// Arithmetic mean of the employees' margins.
    pub average_margin: Decimal,
}
