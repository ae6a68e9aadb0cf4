//! Reconciliation of computed results into the data store.
//!
//! Upserts follow one contract everywhere: computed fields are overwritten
//! on every recalculation, while externally-set `paid_date`/`notes` and the
//! original `created_at` are carried forward unchanged. Settlement dates
//! change only through the explicit mark/clear operations in this module.

mod aguinaldo;
mod vacation;

pub use aguinaldo::{
    clear_aguinaldo_paid, mark_aguinaldo_paid, upsert_aguinaldo,
};
pub use vacation::{
    mark_unused_leave_paid, mark_vacation_pay_paid, upsert_unused_leave_payout,
    upsert_vacation_pay,
};

use crate::error::{EngineError, EngineResult};

pub(crate) fn validate_employee_year(employee_id: &str, year: i32) -> EngineResult<()> {
    if employee_id.is_empty() {
        return Err(EngineError::InvalidInput {
            field: "employeeId".to_string(),
            message: "must not be empty".to_string(),
        });
    }
    if year <= 0 {
        return Err(EngineError::InvalidInput {
            field: "year".to_string(),
            message: format!("{year} is not a valid year"),
        });
    }
    Ok(())
}
