//! Calculation logic for the Margin Classification & Aggregation Engine.
//!
//! This module contains the pure calculation functions: margin tier
//! classification with display colors, per-employee metric derivation from
//! pay/billing rates and period figures, alert-count aggregation, per-company
//! rollups, and typed chart tooltip rows. Every function here is synchronous,
//! side-effect-free, and total over its numeric domain.

mod alerts;
mod company;
mod metrics;
mod tier;
mod tooltip;

pub use alerts::{aggregate_alerts, low_rate_ratio_threshold};
pub use company::aggregate_by_company;
pub use metrics::{derive_metrics, is_under_target_margin};
pub use tier::{
    MarginTier, TierColor, classify_margin, excellent_threshold, good_threshold, target_margin,
    tier_color, warning_threshold,
};
pub use tooltip::{TooltipRow, TooltipValue, metric_tooltip};
