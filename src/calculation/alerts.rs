//! Alert-count aggregation.
//!
//! This module tallies the alert predicates across a set of employee metrics
//! to produce the counts behind the dashboard's notification badges.

use rust_decimal::Decimal;

use crate::models::{AlertsSummary, EmployeeMetric};

use super::metrics::is_under_target_margin;
use super::tier::{MarginTier, classify_margin};

/// Returns the rate-ratio floor below which the markup counts as low (20 percent).
pub fn low_rate_ratio_threshold() -> Decimal {
    Decimal::new(20, 0)
}

/// Aggregates alert counts across a set of employee metrics.
///
/// Counts four independent predicates:
/// - critical: the margin classifies as [`MarginTier::Critical`]
/// - under target: the margin sits in the warning or good band
/// - negative profit: period profit below zero
/// - low rate ratio: markup below [`low_rate_ratio_threshold`]
///
/// The predicates are recomputed from the numeric fields rather than read
/// from the stored flags, so the tally is total over any input including
/// records deserialized from an external source. Pure function; calling it
/// twice on the same input produces identical output.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::aggregate_alerts;
///
/// let alerts = aggregate_alerts(&[]);
/// assert_eq!(alerts.critical_count, 0);
/// assert_eq!(alerts.negative_profit, 0);
/// ```
pub fn aggregate_alerts(metrics: &[EmployeeMetric]) -> AlertsSummary {
    let mut summary = AlertsSummary {
        critical_count: 0,
        under_target_count: 0,
        negative_profit: 0,
        low_rate_ratio: 0,
    };

    for metric in metrics {
        if classify_margin(metric.margin) == MarginTier::Critical {
            summary.critical_count += 1;
        }
        if is_under_target_margin(metric.margin) {
            summary.under_target_count += 1;
        }
        if metric.profit < Decimal::ZERO {
            summary.negative_profit += 1;
        }
        if metric.rate_ratio < low_rate_ratio_threshold() {
            summary.low_rate_ratio += 1;
        }
    }

    summary
}
