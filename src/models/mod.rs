//! Core data models for the payroll accrual engine.
//!
//! This module contains the persisted record shapes shared with the
//! external data layer. All records serialize with camelCase field names.

mod accrual;
mod employee;
mod license;
mod salary;

pub use accrual::{
    AguinaldoRecord, DayBalance, Semester, UnusedLeavePayoutRecord, VacationPayRecord,
};
pub use employee::{Employee, Role};
pub use license::LicenseRecord;
pub use salary::{SalaryRecord, SalaryType};
