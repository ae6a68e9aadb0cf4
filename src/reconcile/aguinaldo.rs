//! Upserts for semester aguinaldo records.
//!
//! Records are keyed by (employee, year, semester) and both semesters are
//! written on every recalculation, active or terminated. Recalculation never
//! touches a settlement date: once a semester is marked paid it stays paid
//! until [`clear_aguinaldo_paid`] is called explicitly.

use chrono::{NaiveDate, Utc};
use tracing::warn;

use crate::calculation::calculate_aguinaldo;
use crate::error::{EngineError, EngineResult};
use crate::models::{AguinaldoRecord, Semester};
use crate::rules::AccrualRules;
use crate::store::{Collection, DataStore, EmployeeScoped};

use super::validate_employee_year;

/// Recalculates and upserts the aguinaldo record for
/// (employee, year, semester).
///
/// Unlike the leave upserts there is no activity guard: aguinaldo accrues
/// for anyone with taxable earnings in the window, so a zero-amount record
/// is still written to make the semester's state visible.
pub async fn upsert_aguinaldo(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
    semester: Semester,
) -> EngineResult<AguinaldoRecord> {
    validate_employee_year(employee_id, year)?;

    let amount = calculate_aguinaldo(store, rules, employee_id, year, semester).await?;

    let existing = find_existing(store, employee_id, year, semester).await;
    let now = Utc::now();
    let mut record = AguinaldoRecord {
        id: String::new(),
        employee_id: employee_id.to_string(),
        year,
        semester,
        amount,
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
            store.aguinaldo().update(&previous.id, record.clone()).await?;
        }
        None => {
            record.id = store.aguinaldo().create(record.clone()).await?;
        }
    }

    Ok(record)
}

/// Marks an aguinaldo record as settled.
pub async fn mark_aguinaldo_paid(
    store: &dyn DataStore,
    record_id: &str,
    paid_date: NaiveDate,
) -> EngineResult<AguinaldoRecord> {
    let mut record = store
        .aguinaldo()
        .get_by_id(record_id)
        .await?
        .ok_or_else(|| EngineError::RecordNotFound {
            collection: "aguinaldo".to_string(),
            id: record_id.to_string(),
        })?;
    record.paid_date = Some(paid_date);
    record.updated_at = Utc::now();
    store.aguinaldo().update(record_id, record.clone()).await?;
    Ok(record)
}

/// Reverts a settlement, e.g. after a payment was registered in error.
pub async fn clear_aguinaldo_paid(
    store: &dyn DataStore,
    record_id: &str,
) -> EngineResult<AguinaldoRecord> {
    let mut record = store
        .aguinaldo()
        .get_by_id(record_id)
        .await?
        .ok_or_else(|| EngineError::RecordNotFound {
            collection: "aguinaldo".to_string(),
            id: record_id.to_string(),
        })?;
    record.paid_date = None;
    record.updated_at = Utc::now();
    store.aguinaldo().update(record_id, record.clone()).await?;
    Ok(record)
}

async fn find_existing(
    store: &dyn DataStore,
    employee_id: &str,
    year: i32,
    semester: Semester,
) -> Option<AguinaldoRecord> {
    match store.aguinaldo().query_by_employee(employee_id).await {
        Ok(records) => records
            .into_iter()
            .find(|r| r.year == year && r.semester == semester),
        Err(err) => {
            warn!(employee_id, year, %semester, error = %err, "failed to query aguinaldo records, will create fresh");
            None
        }
    }
}
