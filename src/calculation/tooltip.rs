//! Typed chart tooltip rows.
//!
//! Chart tooltips carry a value together with its formatting intent as a
//! discriminated union, so the presentation layer can format currency,
//! percentages, and plain text without inspecting loosely-typed payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeMetric;

/// A tooltip value tagged with its formatting intent.
///
/// The consuming chart renderer owns the actual formatting (currency symbol,
/// locale, precision); this type only states what kind of value it is.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::TooltipValue;
/// use rust_decimal::Decimal;
///
/// let value = TooltipValue::Percent {
///     ratio: Decimal::new(1176, 2),
/// };
/// let json = serde_json::to_string(&value).unwrap();
/// assert!(json.contains("\"kind\":\"percent\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TooltipValue {
    /// A monetary amount.
    Currency {
        /// The amount in the dashboard's currency.
        amount: Decimal,
    },
    /// A percentage value.
    Percent {
        /// The percentage (already scaled, e.g. 11.76 for 11.76%).
        ratio: Decimal,
    },
    /// Free text with no numeric formatting.
    Plain {
        /// The text to render verbatim.
        text: String,
    },
}

/// A single labelled row in a chart tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    /// The row label (e.g. "Revenue").
    pub label: String,
    /// The row value with formatting intent.
    pub value: TooltipValue,
}

impl TooltipRow {
    /// Creates a currency row.
    pub fn currency(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            value: TooltipValue::Currency { amount },
        }
    }

    /// Creates a percent row.
    pub fn percent(label: impl Into<String>, ratio: Decimal) -> Self {
        Self {
            label: label.into(),
            value: TooltipValue::Percent { ratio },
        }
    }

    /// Creates a plain-text row.
    pub fn plain(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: TooltipValue::Plain { text: text.into() },
        }
    }
}

/// Builds the tooltip rows for one employee's chart segment.
///
/// Rows are ordered the way the dashboard renders them: company, revenue,
/// cost, profit, margin, rate ratio.
pub fn metric_tooltip(metric: &EmployeeMetric) -> Vec<TooltipRow> {
    vec![
        TooltipRow::plain("Company", metric.dispatch_company.clone()),
        TooltipRow::currency("Revenue", metric.revenue),
        TooltipRow::currency("Cost", metric.cost),
        TooltipRow::currency("Profit", metric.profit),
        TooltipRow::percent("Margin", metric.margin),
        TooltipRow::percent("Rate ratio", metric.rate_ratio),
    ]
}
