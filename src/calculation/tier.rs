//! Margin tier classification and display colors.
//!
//! This module provides the fixed four-tier classification of profit margins
//! used for chart coloring and alerting, together with the color lookup for
//! each tier.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the profitability tier of a margin percentage.
///
/// Tiers are totally ordered by ascending margin threshold. The boundaries
/// are fixed business constants, not runtime configuration: margins below 7
/// are critical, below 10 warning, below 12 good, and 12 or above excellent.
/// A boundary value belongs to the higher tier.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::MarginTier;
///
/// assert!(MarginTier::Critical < MarginTier::Warning);
/// assert!(MarginTier::Good < MarginTier::Excellent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginTier {
    /// Margin below 7 percent - immediate attention required.
    Critical,
    /// Margin from 7 up to (but excluding) 10 percent.
    Warning,
    /// Margin from 10 up to (but excluding) 12 percent.
    Good,
    /// Margin at or above the 12 percent target.
    Excellent,
}

impl std::fmt::Display for MarginTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MarginTier::Critical => write!(f, "Critical"),
            MarginTier::Warning => write!(f, "Warning"),
            MarginTier::Good => write!(f, "Good"),
            MarginTier::Excellent => write!(f, "Excellent"),
        }
    }
}

/// Returns the lower bound of the warning tier (7 percent).
///
/// Margins below this classify as [`MarginTier::Critical`].
pub fn warning_threshold() -> Decimal {
    Decimal::new(7, 0)
}

/// Returns the lower bound of the good tier (10 percent).
pub fn good_threshold() -> Decimal {
    Decimal::new(10, 0)
}

/// Returns the lower bound of the excellent tier (12 percent).
pub fn excellent_threshold() -> Decimal {
    Decimal::new(12, 0)
}

/// Returns the company-wide target margin (12 percent).
///
/// The target coincides with the excellent threshold: an employee at or
/// above target is excellent, everyone else is under it.
pub fn target_margin() -> Decimal {
    excellent_threshold()
}

/// Classifies a margin percentage into its tier.
///
/// Pure, total function with no error cases. Bins are half-open and a
/// boundary value belongs to the higher tier: exactly 7 is warning (not
/// critical) and exactly 12 is excellent.
///
/// # Example
///
/// ```
/// use margin_engine::calculation::{classify_margin, MarginTier};
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_margin(Decimal::new(699, 2)), MarginTier::Critical);
/// assert_eq!(classify_margin(Decimal::new(7, 0)), MarginTier::Warning);
/// assert_eq!(classify_margin(Decimal::new(12, 0)), MarginTier::Excellent);
/// ```
pub fn classify_margin(margin: Decimal) -> MarginTier {
    if margin < warning_threshold() {
        MarginTier::Critical
    } else if margin < good_threshold() {
        MarginTier::Warning
    } else if margin < excellent_threshold() {
        MarginTier::Good
    } else {
        MarginTier::Excellent
    }
}

/// Display colors for a margin tier.
///
/// Carries the utility-class names and hex value the dashboard uses for
/// badges and chart fills. Mapping colors to pixels stays with the
/// presentation layer; this is only the fixed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TierColor {
    /// Background utility class for badges and table rows.
    pub background: &'static str,
    /// Text utility class paired with the background.
    pub text: &'static str,
    /// Hex fill color for chart segments.
    pub hex: &'static str,
}

/// Returns the display colors for a tier.
///
/// The tier enum is exhaustive, so there is no fallback branch.
pub fn tier_color(tier: MarginTier) -> TierColor {
    match tier {
        MarginTier::Critical => TierColor {
            background: "bg-red-100",
            text: "text-red-800",
            hex: "#ef4444",
        },
        MarginTier::Warning => TierColor {
            background: "bg-amber-100",
            text: "text-amber-800",
            hex: "#f59e0b",
        },
        MarginTier::Good => TierColor {
            background: "bg-blue-100",
            text: "text-blue-800",
            hex: "#3b82f6",
        },
        MarginTier::Excellent => TierColor {
            background: "bg-emerald-100",
            text: "text-emerald-800",
            hex: "#10b981",
        },
    }
}
