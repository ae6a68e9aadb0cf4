//! Upserts for vacation-pay and unused-leave payout records.
//!
//! The two record kinds are mutually exclusive per employee-year: vacation
//! pay is never written for a terminated employee, and an unused-leave
//! payout is never written for an active one. Each upsert is a no-op
//! (`Ok(None)`) when its guard fails, which is what prevents
//! double-accounting the same leave balance.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::calculation::{calculate_unused_leave_payout, calculate_vacation_pay};
use crate::error::EngineResult;
use crate::models::{Employee, UnusedLeavePayoutRecord, VacationPayRecord};
use crate::rules::AccrualRules;
use crate::store::{Collection, DataStore, EmployeeScoped};

use super::validate_employee_year;

/// Recalculates and upserts the vacation-pay record for (employee, year).
///
/// Returns `Ok(None)` for terminated employees. When `days_enjoyed` is not
/// supplied, it is resolved from the year's license records; zero days
/// still writes a record with amount 0 so the day balance stays visible.
pub async fn upsert_vacation_pay(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
    days_enjoyed: Option<Decimal>,
) -> EngineResult<Option<VacationPayRecord>> {
    validate_employee_year(employee_id, year)?;

    let employee = store.employees().get_by_id(employee_id).await?;
    if employee.as_ref().is_some_and(Employee::is_terminated) {
        debug!(employee_id, year, "employee terminated, skipping vacation pay");
        return Ok(None);
    }

    let days = match days_enjoyed {
        Some(days) => days,
        None => licensed_days_in_year(store, employee_id, year).await,
    };

    let pay = calculate_vacation_pay(store, rules, employee_id, year, days).await?;

    let existing = find_existing_vacation_pay(store, employee_id, year).await;
    let now = Utc::now();
    let mut record = VacationPayRecord {
        id: String::new(),
        employee_id: employee_id.to_string(),
        year,
        amount: pay.amount,
        balance: pay.accrual.balance.clone(),
        paid_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    match existing {
        Some(previous) => {
            record.id = previous.id.clone();
            record.paid_date = previous.paid_date;
            record.notes = previous.notes.clone();
            record.created_at = previous.created_at;
            store.vacation_pay().update(&previous.id, record.clone()).await?;
        }
        None => {
            record.id = store.vacation_pay().create(record.clone()).await?;
        }
    }

    Ok(Some(record))
}

/// Recalculates and upserts the unused-leave payout for (employee, year).
///
/// Returns `Ok(None)` for active employees, and also when the computed
/// amount is zero: a payout record only exists once there is something to
/// pay out.
pub async fn upsert_unused_leave_payout(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
) -> EngineResult<Option<UnusedLeavePayoutRecord>> {
    validate_employee_year(employee_id, year)?;

    let employee = store.employees().get_by_id(employee_id).await?;
    if !employee.as_ref().is_some_and(Employee::is_terminated) {
        debug!(employee_id, year, "employee active, skipping unused-leave payout");
        return Ok(None);
    }

    let payout = calculate_unused_leave_payout(store, rules, employee_id, year).await?;
    if payout.amount <= Decimal::ZERO {
        debug!(employee_id, year, "no unused-leave amount to pay out");
        return Ok(None);
    }

    let existing = find_existing_unused_leave(store, employee_id, year).await;
    let now = Utc::now();
    let mut record = UnusedLeavePayoutRecord {
        id: String::new(),
        employee_id: employee_id.to_string(),
        year,
        amount: payout.amount,
        balance: payout.accrual.balance.clone(),
        paid_date: None,
        notes: None,
        created_at: now,
        updated_at: now,
    };

    match existing {
        Some(previous) => {
            record.id = previous.id.clone();
            record.paid_date = previous.paid_date;
            record.notes = previous.notes.clone();
            record.created_at = previous.created_at;
            store.unused_leave().update(&previous.id, record.clone()).await?;
        }
        None => {
            record.id = store.unused_leave().create(record.clone()).await?;
        }
    }

    Ok(Some(record))
}

/// Marks a vacation-pay record as settled.
pub async fn mark_vacation_pay_paid(
    store: &dyn DataStore,
    record_id: &str,
    paid_date: NaiveDate,
) -> EngineResult<VacationPayRecord> {
    let mut record = store
        .vacation_pay()
        .get_by_id(record_id)
        .await?
        .ok_or_else(|| crate::error::EngineError::RecordNotFound {
            collection: "vacationPay".to_string(),
            id: record_id.to_string(),
        })?;
    record.paid_date = Some(paid_date);
    record.updated_at = Utc::now();
    store.vacation_pay().update(record_id, record.clone()).await?;
    Ok(record)
}

/// Marks an unused-leave payout record as settled.
pub async fn mark_unused_leave_paid(
    store: &dyn DataStore,
    record_id: &str,
    paid_date: NaiveDate,
) -> EngineResult<UnusedLeavePayoutRecord> {
    let mut record = store
        .unused_leave()
        .get_by_id(record_id)
        .await?
        .ok_or_else(|| crate::error::EngineError::RecordNotFound {
            collection: "unusedLeave".to_string(),
            id: record_id.to_string(),
        })?;
    record.paid_date = Some(paid_date);
    record.updated_at = Utc::now();
    store.unused_leave().update(record_id, record.clone()).await?;
    Ok(record)
}

async fn licensed_days_in_year(store: &dyn DataStore, employee_id: &str, year: i32) -> Decimal {
    match store.licenses().query_by_employee(employee_id).await {
        Ok(licenses) => licenses
            .iter()
            .filter(|l| l.year == year)
            .map(|l| l.days_taken)
            .sum(),
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to read licenses for enjoyed days, defaulting to 0");
            Decimal::ZERO
        }
    }
}

async fn find_existing_vacation_pay(
    store: &dyn DataStore,
    employee_id: &str,
    year: i32,
) -> Option<VacationPayRecord> {
    match store.vacation_pay().query_by_employee(employee_id).await {
        Ok(records) => records.into_iter().find(|r| r.year == year),
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to query vacation-pay records, will create fresh");
            None
        }
    }
}

async fn find_existing_unused_leave(
    store: &dyn DataStore,
    employee_id: &str,
    year: i32,
) -> Option<UnusedLeavePayoutRecord> {
    match store.unused_leave().query_by_employee(employee_id).await {
        Ok(records) => records.into_iter().find(|r| r.year == year),
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to query unused-leave records, will create fresh");
            None
        }
    }
}
