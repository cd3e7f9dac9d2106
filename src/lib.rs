//! Margin Classification & Aggregation Engine
//!
//! This crate provides the profitability core of a staffing/dispatch dashboard:
//! classifying profit margins into fixed business tiers, deriving per-employee
//! profitability metrics from pay/billing rates and period revenue figures, and
//! aggregating alert counts and per-company rollups.

#![warn(missing_docs)]

pub mod api;
pub mod cache;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
