//! Payroll accrual engine for Uruguayan statutory entitlements.
//!
//! This crate computes vacation-day balances, vacation pay ("salario
//! vacacional"), unused-leave payouts at termination ("licencia no gozada")
//! and the semester-based Christmas bonus ("aguinaldo") from an employee's
//! employment timeline and monthly salary history, and reconciles the
//! results into a pluggable data store.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod reconcile;
pub mod rules;
pub mod store;
