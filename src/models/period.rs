//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] type that scopes revenue and
//! cost figures to a single calendar month.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents a calendar-month reporting period.
///
/// All revenue and cost figures handled by the engine are scoped to a
/// reporting period. Periods render as `YYYY-MM`, which is also the key
/// used for cached reports.
///
/// # Example
///
/// ```
/// use margin_engine::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod::new(2026, 8).unwrap();
/// assert_eq!(period.to_string(), "2026-08");
/// assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
/// assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2026, 8, 31).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The calendar year.
    year: i32,
    /// The calendar month (1..=12).
    month: u32,
}

impl ReportingPeriod {
    /// Creates a reporting period, validating the month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] when the month falls outside
    /// 1..=12 or the year/month combination does not form a valid date.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "month must be between 1 and 12".to_string(),
            });
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(EngineError::InvalidPeriod {
                year,
                month,
                message: "year is out of the supported calendar range".to_string(),
            });
        }
        Ok(Self { year, month })
    }

    /// Returns the calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the calendar month (1..=12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the period.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("Validated on construction")
    }

    /// Returns the last day of the period.
    pub fn last_day(&self) -> NaiveDate {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .expect("Validated on construction")
            .pred_opt()
            .expect("First of a month always has a predecessor")
    }

    /// Returns the cache key for reports of this period (e.g. "report:2026-08").
    pub fn cache_key(&self) -> String {
        format!("report:{}", self)
    }
}

impl std::fmt::Display for ReportingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_month() {
        let period = ReportingPeriod::new(2026, 8).unwrap();
        assert_eq!(period.year(), 2026);
        assert_eq!(period.month(), 8);
    }

    #[test]
    fn test_new_rejects_month_zero() {
        let result = ReportingPeriod::new(2026, 0);
        match result.unwrap_err() {
            EngineError::InvalidPeriod { year, month, .. } => {
                assert_eq!(year, 2026);
                assert_eq!(month, 0);
            }
            other => panic!("Expected InvalidPeriod, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_month_thirteen() {
        assert!(ReportingPeriod::new(2026, 13).is_err());
    }

    #[test]
    fn test_display_zero_pads() {
        let period = ReportingPeriod::new(2026, 3).unwrap();
        assert_eq!(period.to_string(), "2026-03");
    }

    #[test]
    fn test_first_and_last_day() {
        let period = ReportingPeriod::new(2026, 2).unwrap();
        assert_eq!(
            period.first_day(),
            NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()
        );
        assert_eq!(
            period.last_day(),
            NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_last_day_of_december() {
        let period = ReportingPeriod::new(2025, 12).unwrap();
        assert_eq!(
            period.last_day(),
            NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
        );
    }

    #[test]
    fn test_last_day_of_leap_february() {
        let period = ReportingPeriod::new(2028, 2).unwrap();
        assert_eq!(
            period.last_day(),
            NaiveDate::from_ymd_opt(2028, 2, 29).unwrap()
        );
    }

    #[test]
    fn test_cache_key() {
        let period = ReportingPeriod::new(2026, 8).unwrap();
        assert_eq!(period.cache_key(), "report:2026-08");
    }

    #[test]
    fn test_serde_round_trip() {
        let period = ReportingPeriod::new(2026, 8).unwrap();
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: ReportingPeriod = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
