//! Accrual and compensation calculators.
//!
//! This module contains the date-driven arithmetic at the heart of the
//! engine: service-date utilities, vacation-day accrual (tenure-based and
//! proportional), salary-history averages, vacation pay, the unused-leave
//! payout, and the semester aguinaldo. Calculators read through the
//! [`DataStore`](crate::store::DataStore) seam and degrade to zeroed results
//! on missing historical data rather than failing a whole run.

mod aguinaldo;
mod salary_history;
mod service_dates;
mod unused_leave;
mod vacation_accrual;
mod vacation_pay;

pub use aguinaldo::{
    calculate_aguinaldo, is_semester_paid, outstanding_aguinaldo, semester_taxable_total,
};
pub use salary_history::{
    average_monthly_salary, last_twelve_months_daily_wage, latest_daily_wage_in_year,
};
pub use service_dates::{
    days_worked_in_year, is_active_in_year, months_worked_in_year, years_of_service_as_of,
};
pub use unused_leave::{UnusedLeavePayout, calculate_unused_leave_payout};
pub use vacation_accrual::{
    AccrualBasis, VacationAccrual, calculate_vacation_accrual, proportional_accrual,
    vacation_days_per_year,
};
pub use vacation_pay::{VacationPay, calculate_vacation_pay};

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary amount to 2 decimals, half away from zero.
///
/// Persisted amounts use this rounding; day balances use exact decimals
/// (accrued days are produced whole by `ceil`).
pub fn round_money(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_money_half_rounds_away_from_zero() {
        assert_eq!(round_money(dec("10.005")), dec("10.01"));
        assert_eq!(round_money(dec("10.004")), dec("10.00"));
    }

    #[test]
    fn test_round_money_leaves_exact_amounts() {
        assert_eq!(round_money(dec("33333.33")), dec("33333.33"));
    }
}
