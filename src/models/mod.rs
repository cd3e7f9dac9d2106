//! Core data models for the Margin Classification & Aggregation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod metrics;
mod period;
mod summary;

pub use employee::{EmployeeRecord, EmployeeStatus};
pub use metrics::EmployeeMetric;
pub use period::ReportingPeriod;
pub use summary::{AlertsSummary, CompanySummary};
