//! Employee record model and related types.
//!
//! This module defines the EmployeeRecord struct and EmployeeStatus enum
//! representing the raw payroll records supplied by the data-fetch boundary.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the assignment status of a dispatched employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    /// Currently assigned and billing.
    Active,
    /// Temporarily off assignment (paid or unpaid leave).
    OnLeave,
    /// No longer employed; kept for historical reporting.
    Terminated,
}

/// Represents a raw employee payroll record prior to metric derivation.
///
/// These records arrive from the upstream payroll store as-is; the engine
/// performs no bounds checking on the monetary fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The client company the employee is dispatched to.
    pub dispatch_company: String,
    /// The employee's assignment status.
    pub status: EmployeeStatus,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// The hourly rate paid to the employee.
    pub hourly_rate: Decimal,
    /// The hourly rate billed to the dispatch company.
    pub billing_rate: Decimal,
}

impl EmployeeRecord {
    /// Returns true if the employee is currently on an active assignment.
    ///
    /// # Examples
    ///
    /// ```
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
    /// assert!(record.is_active());
    /// ```
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record(status: EmployeeStatus) -> EmployeeRecord {
        EmployeeRecord {
            id: "emp_001".to_string(),
            name: "Sato Kenji".to_string(),
            dispatch_company: "Acme Logistics".to_string(),
            status,
            hire_date: NaiveDate::from_ymd_opt(2023, 4, 1).unwrap(),
            hourly_rate: Decimal::new(1500, 0),
            billing_rate: Decimal::new(1700, 0),
        }
    }

    #[test]
    fn test_deserialize_active_record() {
        let json = r#"{
            "id": "emp_001",
            "name": "Sato Kenji",
            "dispatch_company": "Acme Logistics",
            "status": "active",
            "hire_date": "2023-04-01",
            "hourly_rate": "1500",
            "billing_rate": "1700"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "emp_001");
        assert_eq!(record.status, EmployeeStatus::Active);
        assert_eq!(record.dispatch_company, "Acme Logistics");
        assert_eq!(
            record.hire_date,
            NaiveDate::from_ymd_opt(2023, 4, 1).unwrap()
        );
        assert_eq!(record.hourly_rate, Decimal::new(1500, 0));
        assert_eq!(record.billing_rate, Decimal::new(1700, 0));
    }

    #[test]
    fn test_deserialize_on_leave_record() {
        let json = r#"{
            "id": "emp_002",
            "name": "Tanaka Yui",
            "dispatch_company": "Beta Foods",
            "status": "on_leave",
            "hire_date": "2021-10-15",
            "hourly_rate": "1320.50",
            "billing_rate": "1600"
        }"#;

        let record: EmployeeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.status, EmployeeStatus::OnLeave);
        assert_eq!(record.hourly_rate, Decimal::new(132050, 2));
    }

    #[test]
    fn test_serialize_record_round_trip() {
        let record = create_test_record(EmployeeStatus::Terminated);
        let json = serde_json::to_string(&record).unwrap();

        let deserialized: EmployeeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_is_active_returns_true_for_active() {
        let record = create_test_record(EmployeeStatus::Active);
        assert!(record.is_active());
    }

    #[test]
    fn test_is_active_returns_false_for_on_leave() {
        let record = create_test_record(EmployeeStatus::OnLeave);
        assert!(!record.is_active());
    }

    #[test]
    fn test_is_active_returns_false_for_terminated() {
        let record = create_test_record(EmployeeStatus::Terminated);
        assert!(!record.is_active());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::OnLeave).unwrap(),
            "\"on_leave\""
        );
        assert_eq!(
            serde_json::to_string(&EmployeeStatus::Terminated).unwrap(),
            "\"terminated\""
        );
    }
}
