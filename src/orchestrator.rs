//! Recalculation orchestration for single employees and whole years.
//!
//! A per-employee run always refreshes both semester aguinaldos, then
//! branches on employment status: active employees get a vacation-pay
//! record, terminated ones an unused-leave payout. Steps are independent,
//! so one failing step never aborts the others; its error is collected on
//! the outcome instead.

use std::collections::BTreeSet;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AguinaldoRecord, Employee, Semester, UnusedLeavePayoutRecord, VacationPayRecord,
};
use crate::reconcile::{upsert_aguinaldo, upsert_unused_leave_payout, upsert_vacation_pay};
use crate::rules::AccrualRules;
use crate::store::{Collection, DataStore};

/// The outcome of recalculating one employee's payroll items for a year.
#[derive(Debug)]
pub struct EmployeeRecalculation {
    /// The employee the run was for.
    pub employee_id: String,
    /// The calendar year recalculated.
    pub year: i32,
    /// The refreshed first-semester aguinaldo, when that step succeeded.
    pub first_semester_aguinaldo: Option<AguinaldoRecord>,
    /// The refreshed second-semester aguinaldo, when that step succeeded.
    pub second_semester_aguinaldo: Option<AguinaldoRecord>,
    /// The refreshed vacation-pay record (active employees only).
    pub vacation_pay: Option<VacationPayRecord>,
    /// The refreshed unused-leave payout (terminated employees only).
    pub unused_leave: Option<UnusedLeavePayoutRecord>,
    /// Errors from steps that failed; empty on a clean run.
    pub errors: Vec<EngineError>,
}

impl EmployeeRecalculation {
    /// True when every step of the run completed without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Recalculates every payroll item one employee is due for a year.
///
/// Both semester aguinaldos are always refreshed. The leave record written
/// depends on employment status; the one that does not apply is left
/// untouched. Step failures are collected rather than propagated, so a
/// partially-failed run still persists what it could.
pub async fn recalculate_payroll_items(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
) -> EmployeeRecalculation {
    let mut outcome = EmployeeRecalculation {
        employee_id: employee_id.to_string(),
        year,
        first_semester_aguinaldo: None,
        second_semester_aguinaldo: None,
        vacation_pay: None,
        unused_leave: None,
        errors: Vec::new(),
    };

    match upsert_aguinaldo(store, rules, employee_id, year, Semester::First).await {
        Ok(record) => outcome.first_semester_aguinaldo = Some(record),
        Err(err) => {
            warn!(employee_id, year, error = %err, "first-semester aguinaldo step failed");
            outcome.errors.push(err);
        }
    }
    match upsert_aguinaldo(store, rules, employee_id, year, Semester::Second).await {
        Ok(record) => outcome.second_semester_aguinaldo = Some(record),
        Err(err) => {
            warn!(employee_id, year, error = %err, "second-semester aguinaldo step failed");
            outcome.errors.push(err);
        }
    }

    let terminated = match store.employees().get_by_id(employee_id).await {
        Ok(employee) => employee.as_ref().is_some_and(Employee::is_terminated),
        Err(err) => {
            warn!(employee_id, year, error = %err, "employee lookup failed, assuming active");
            outcome.errors.push(err.into());
            false
        }
    };

    if terminated {
        match upsert_unused_leave_payout(store, rules, employee_id, year).await {
            Ok(record) => outcome.unused_leave = record,
            Err(err) => {
                warn!(employee_id, year, error = %err, "unused-leave step failed");
                outcome.errors.push(err);
            }
        }
    } else {
        match upsert_vacation_pay(store, rules, employee_id, year, None).await {
            Ok(record) => outcome.vacation_pay = record,
            Err(err) => {
                warn!(employee_id, year, error = %err, "vacation-pay step failed");
                outcome.errors.push(err);
            }
        }
    }

    info!(
        employee_id,
        year,
        clean = outcome.is_clean(),
        "employee recalculation finished"
    );
    outcome
}

/// Aggregate counts for a year-wide recalculation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Employees considered for the year.
    pub total: usize,
    /// Employees whose run finished with no step errors.
    pub successful: usize,
    /// Employees whose run had at least one failing step.
    pub failed: usize,
}

/// Recalculates payroll items for every employee with salary records in
/// `year`, in batches of [`AccrualRules::batch_size`].
///
/// A failure reading the salary collection aborts the whole run; per-employee
/// step failures only count against `failed`.
pub async fn recalculate_all_payroll_items(
    store: &dyn DataStore,
    rules: &AccrualRules,
    year: i32,
) -> EngineResult<BatchSummary> {
    let salaries = store.salaries().get_all().await?;
    let employee_ids: BTreeSet<String> = salaries
        .into_iter()
        .filter(|s| s.year == year)
        .map(|s| s.employee_id)
        .collect();
    let employee_ids: Vec<String> = employee_ids.into_iter().collect();

    let mut summary = BatchSummary {
        total: employee_ids.len(),
        successful: 0,
        failed: 0,
    };
    info!(year, total = summary.total, "starting year-wide recalculation");

    let batch_size = rules.batch_size.max(1);
    for batch in employee_ids.chunks(batch_size) {
        let runs = batch
            .iter()
            .map(|id| recalculate_payroll_items(store, rules, id, year));
        for outcome in join_all(runs).await {
            if outcome.is_clean() {
                summary.successful += 1;
            } else {
                summary.failed += 1;
            }
        }
    }

    info!(
        year,
        total = summary.total,
        successful = summary.successful,
        failed = summary.failed,
        "year-wide recalculation finished"
    );
    Ok(summary)
}
