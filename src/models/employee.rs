//! Employee and role models.
//!
//! Employees are created and edited outside the engine; the accrual
//! calculators only ever read them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An employee whose accruals are computed by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Date of hire. Absent on legacy records; calculators then fall back
    /// to a salary-count estimate.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Date of termination, when the employee has left. Always on or after
    /// `start_date`.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// References into the roles collection.
    #[serde(default)]
    pub role_ids: Vec<String>,
}

impl Employee {
    /// Returns true if the employee has a termination date.
    ///
    /// Terminated employees receive an unused-leave payout instead of
    /// vacation pay; the two are mutually exclusive per employee-year.
    pub fn is_terminated(&self) -> bool {
        self.end_date.is_some()
    }
}

/// A role an employee can hold. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    /// Unique identifier for the role.
    pub id: String,
    /// Display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_active_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Ana Pérez",
            "startDate": "2020-03-15",
            "roleIds": ["role_1"]
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(
            employee.start_date,
            Some(NaiveDate::from_ymd_opt(2020, 3, 15).unwrap())
        );
        assert_eq!(employee.end_date, None);
        assert!(!employee.is_terminated());
        assert_eq!(employee.role_ids, vec!["role_1"]);
    }

    #[test]
    fn test_deserialize_terminated_employee() {
        let json = r#"{
            "id": "emp_002",
            "name": "Juan Rodríguez",
            "startDate": "2018-01-10",
            "endDate": "2025-06-30",
            "roleIds": []
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert!(employee.is_terminated());
        assert_eq!(
            employee.end_date,
            Some(NaiveDate::from_ymd_opt(2025, 6, 30).unwrap())
        );
    }

    #[test]
    fn test_deserialize_employee_without_start_date() {
        let json = r#"{"id": "emp_003", "name": "Legacy"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.start_date, None);
        assert!(employee.role_ids.is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let employee = Employee {
            id: "emp_004".to_string(),
            name: "María García".to_string(),
            start_date: Some(NaiveDate::from_ymd_opt(2022, 11, 1).unwrap()),
            end_date: None,
            role_ids: vec!["role_2".to_string()],
        };
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
