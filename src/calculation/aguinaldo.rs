//! Semester aguinaldo (Christmas bonus).
//!
//! The legal formula is total taxable earnings of the semester divided by
//! twelve. It is explicitly NOT a monthly average and NOT months-worked/12:
//! four months summing to $400,000 yield $33,333.33, the same as twelve
//! months summing to $400,000 would.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::EngineResult;
use crate::models::{AguinaldoRecord, SalaryRecord, Semester};
use crate::rules::AccrualRules;
use crate::store::{DataStore, EmployeeScoped};

use super::round_money;

/// True when the salary record falls inside the semester window for `year`:
/// December of the previous year through May for the first semester, June
/// through November for the second.
fn in_semester_window(record: &SalaryRecord, year: i32, semester: Semester) -> bool {
    match semester {
        Semester::First => {
            (record.year == year - 1 && record.month == 12)
                || (record.year == year && (1..=5).contains(&record.month))
        }
        Semester::Second => record.year == year && (6..=11).contains(&record.month),
    }
}

/// Sum of taxable totals (`base + extras`) over the semester window.
pub fn semester_taxable_total(
    salaries: &[SalaryRecord],
    year: i32,
    semester: Semester,
) -> Decimal {
    salaries
        .iter()
        .filter(|s| in_semester_window(s, year, semester))
        .map(|s| s.taxable_total())
        .sum()
}

/// Computes one semester's aguinaldo: `round2(Σ taxable totals / 12)`,
/// zero when no salary records fall in the window.
///
/// A store failure on the salary read degrades to zero with a warning, so
/// a missing collection never aborts a recalculation run.
pub async fn calculate_aguinaldo(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
    semester: Semester,
) -> EngineResult<Decimal> {
    let salaries = match store.salaries().query_by_employee(employee_id).await {
        Ok(salaries) => salaries,
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to read salaries for aguinaldo, defaulting to 0");
            return Ok(Decimal::ZERO);
        }
    };

    let total = semester_taxable_total(&salaries, year, semester);
    if total <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let amount = round_money(total / rules.aguinaldo_divisor_decimal());
    debug!(employee_id, year, %semester, %total, %amount, "aguinaldo computed");
    Ok(amount)
}

/// True when an aguinaldo record for (year, semester) exists and carries a
/// settlement date.
pub fn is_semester_paid(records: &[AguinaldoRecord], year: i32, semester: Semester) -> bool {
    records
        .iter()
        .any(|a| a.year == year && a.semester == semester && a.paid_date.is_some())
}

/// The semester amount still owed: zero once the semester has been settled,
/// while the underlying amount stays computable for audit via
/// [`calculate_aguinaldo`].
pub async fn outstanding_aguinaldo(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
    semester: Semester,
) -> EngineResult<Decimal> {
    let amount = calculate_aguinaldo(store, rules, employee_id, year, semester).await?;
    if amount <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    let records = match store.aguinaldo().query_by_employee(employee_id).await {
        Ok(records) => records,
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to read aguinaldo records, treating semester as unpaid");
            Vec::new()
        }
    };

    if is_semester_paid(&records, year, semester) {
        Ok(Decimal::ZERO)
    } else {
        Ok(amount)
    }
}
