//! Per-employee metric derivation.
//!
//! This module derives profitability metrics (profit, margin, rate ratio and
//! the alert flags) from a raw payroll record and its period revenue/cost
//! figures.

use rust_decimal::Decimal;

use crate::models::{EmployeeMetric, EmployeeRecord};

use super::tier::{MarginTier, classify_margin, target_margin, warning_threshold};

/// Returns true when a margin sits below target while above the critical band.
///
/// Under-target covers the warning and good tiers: the employee is not yet
/// critical, but has not reached the target margin either.
pub fn is_under_target_margin(margin: Decimal) -> bool {
    margin < target_margin() && margin >= warning_threshold()
}

/// Derives the profitability metrics for one employee.
///
/// All formulas are zero-denominator-safe:
/// - profit = revenue - cost (may be negative)
/// - margin = profit / revenue x 100, or 0 when revenue is not positive
/// - rate_ratio = (billing_rate - hourly_rate) / hourly_rate x 100, or 0
///   when the hourly rate is not positive
///
/// Negative inputs pass through unchanged; the upstream data boundary owns
/// validation, not this function.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::derive_metrics;
/// use margin_engine::models::{EmployeeRecord, EmployeeStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     id: "emp_001".to_string(),
///     name: "Sato Kenji".to_string(),
///     dispatch_company: "Acme Logistics".to_string(),
///     status: EmployeeStatus::Active,
///     hire_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
///     hourly_rate: Decimal::new(1500, 0),
///     billing_rate: Decimal::new(1700, 0),
/// };
///
/// let metric = derive_metrics(&record, Decimal::new(1700, 0), Decimal::new(1500, 0));
/// assert_eq!(metric.profit, Decimal::new(200, 0));
/// assert_eq!(metric.margin.round_dp(2), Decimal::new(1176, 2));
/// ```
pub fn derive_metrics(record: &EmployeeRecord, revenue: Decimal, cost: Decimal) -> EmployeeMetric {
    let profit = revenue - cost;

    let margin = if revenue > Decimal::ZERO {
        profit / revenue * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let rate_ratio = if record.hourly_rate > Decimal::ZERO {
        (record.billing_rate - record.hourly_rate) / record.hourly_rate * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    EmployeeMetric {
        employee_id: record.id.clone(),
        name: record.name.clone(),
        dispatch_company: record.dispatch_company.clone(),
        hourly_rate: record.hourly_rate,
        billing_rate: record.billing_rate,
        revenue,
        cost,
        profit,
        margin,
        rate_ratio,
        is_critical: classify_margin(margin) == MarginTier::Critical,
        is_under_target: is_under_target_margin(margin),
    }
}
