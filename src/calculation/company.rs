//! Per-company profitability rollups.
//!
//! This module groups employee metrics by dispatch company and folds each
//! group into a [`CompanySummary`].

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CompanySummary, EmployeeMetric};

/// Accumulator for one company's group while folding.
struct CompanyAccumulator {
    employee_count: usize,
    total_profit: Decimal,
    total_revenue: Decimal,
    margin_sum: Decimal,
}

/// Aggregates employee metrics into per-company summaries.
///
/// Groups by the `dispatch_company` field. The grouping key order is
/// deterministic and independent of input order (company name order);
/// business sorting, e.g. by total profit descending, is the presentation
/// layer's responsibility. Per group:
/// - employee_count: group size
/// - total_monthly_profit: sum of profit
/// - total_monthly_revenue: sum of revenue
/// - average_margin: arithmetic mean of margin across the group's members
///
/// Pure function; calling it twice on the same input produces identical
/// output.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::aggregate_by_company;
///
/// let summaries = aggregate_by_company(&[]);
/// assert!(summaries.is_empty());
/// ```
pub fn aggregate_by_company(metrics: &[EmployeeMetric]) -> Vec<CompanySummary> {
    let mut groups: BTreeMap<&str, CompanyAccumulator> = BTreeMap::new();

    for metric in metrics {
        let group = groups
            .entry(metric.dispatch_company.as_str())
            .or_insert_with(|| CompanyAccumulator {
                employee_count: 0,
                total_profit: Decimal::ZERO,
                total_revenue: Decimal::ZERO,
                margin_sum: Decimal::ZERO,
            });
        group.employee_count += 1;
        group.total_profit += metric.profit;
        group.total_revenue += metric.revenue;
        group.margin_sum += metric.margin;
    }

    groups
        .into_iter()
        .map(|(company, group)| {
            // Groups only exist for companies with at least one member.
            let average_margin = group.margin_sum / Decimal::from(group.employee_count);
            CompanySummary {
                company: company.to_string(),
                employee_count: group.employee_count,
                total_monthly_profit: group.total_profit,
                total_monthly_revenue: group.total_revenue,
                average_margin,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_metric(
        id: &str,
        company: &str,
        revenue: &str,
        profit: &str,
        margin: &str,
    ) -> EmployeeMetric {
        EmployeeMetric {
            employee_id: id.to_string(),
            name: format!("Employee {}", id),
            dispatch_company: company.to_string(),
            hourly_rate: dec("1500"),
            billing_rate: dec("1700"),
            revenue: dec(revenue),
            cost: dec(revenue) - dec(profit),
            profit: dec(profit),
            margin: dec(margin),
            rate_ratio: dec("13.33"),
            is_critical: false,
            is_under_target: false,
        }
    }

    /// CG-001: two employees at one company fold into one summary
    #[test]
    fn test_groups_employees_of_same_company() {
        let metrics = vec![
            create_test_metric("emp_001", "A", "1000", "100", "10"),
            create_test_metric("emp_002", "A", "2000", "300", "15"),
        ];

        let summaries = aggregate_by_company(&metrics);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.company, "A");
        assert_eq!(summary.employee_count, 2);
        assert_eq!(summary.total_monthly_profit, dec("400"));
        assert_eq!(summary.total_monthly_revenue, dec("3000"));
        assert_eq!(summary.average_margin, dec("12.5"));
    }

    /// CG-002: distinct companies stay separate
    #[test]
    fn test_distinct_companies_stay_separate() {
        let metrics = vec![
            create_test_metric("emp_001", "Acme Logistics", "1000", "100", "10"),
            create_test_metric("emp_002", "Beta Foods", "2000", "300", "15"),
        ];

        let summaries = aggregate_by_company(&metrics);
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].company, "Acme Logistics");
        assert_eq!(summaries[1].company, "Beta Foods");
        assert_eq!(summaries[0].employee_count, 1);
        assert_eq!(summaries[1].employee_count, 1);
    }

    /// CG-003: grouping is independent of input order
    #[test]
    fn test_grouping_is_insertion_order_independent() {
        let forward = vec![
            create_test_metric("emp_001", "B", "1000", "100", "10"),
            create_test_metric("emp_002", "A", "2000", "300", "15"),
            create_test_metric("emp_003", "A", "1500", "150", "10"),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            aggregate_by_company(&forward),
            aggregate_by_company(&reversed)
        );
    }

    #[test]
    fn test_empty_input_yields_no_summaries() {
        assert!(aggregate_by_company(&[]).is_empty());
    }

    #[test]
    fn test_negative_profits_sum_through() {
        let metrics = vec![
            create_test_metric("emp_001", "A", "1000", "-100", "-10"),
            create_test_metric("emp_002", "A", "1000", "50", "5"),
        ];

        let summaries = aggregate_by_company(&metrics);
        assert_eq!(summaries[0].total_monthly_profit, dec("-50"));
        assert_eq!(summaries[0].average_margin, dec("-2.5"));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let metrics = vec![
            create_test_metric("emp_001", "A", "1000", "100", "10"),
            create_test_metric("emp_002", "B", "2000", "300", "15"),
        ];

        let first = aggregate_by_company(&metrics);
        let second = aggregate_by_company(&metrics);
        assert_eq!(first, second);
    }
}
