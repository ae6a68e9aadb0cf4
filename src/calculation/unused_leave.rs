//! Unused-leave payout ("licencia no gozada") at termination.
//!
//! Due only when the employee has an end date: the remaining day balance is
//! paid out at the average daily wage of the last twelve salary months on
//! file. An empty salary history has no wage basis and pays nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::rules::AccrualRules;
use crate::store::DataStore;

use super::round_money;
use super::salary_history::{fetch_salaries_or_empty, last_twelve_months_daily_wage};
use super::vacation_accrual::{VacationAccrual, calculate_vacation_accrual};

/// The result of an unused-leave payout calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedLeavePayout {
    /// Daily wage × remaining days, rounded to 2 decimals. Zero when no
    /// days remain or no wage basis exists.
    pub amount: Decimal,
    /// The daily wage the amount was derived from.
    pub daily_wage: Decimal,
    /// The underlying day balance for the year.
    pub accrual: VacationAccrual,
}

/// Computes the unused-leave payout for one employee and year.
///
/// The active-employee guard lives in the reconcile layer; this calculator
/// only does the arithmetic.
pub async fn calculate_unused_leave_payout(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
) -> EngineResult<UnusedLeavePayout> {
    let accrual = calculate_vacation_accrual(store, rules, employee_id, year).await?;
    let days_remaining = accrual.balance.days_remaining;

    if days_remaining <= Decimal::ZERO {
        return Ok(UnusedLeavePayout {
            amount: Decimal::ZERO,
            daily_wage: Decimal::ZERO,
            accrual,
        });
    }

    let salaries = fetch_salaries_or_empty(store, employee_id).await;
    let daily_wage =
        last_twelve_months_daily_wage(&salaries, rules).unwrap_or(Decimal::ZERO);

    let amount = if daily_wage > Decimal::ZERO {
        round_money(daily_wage * days_remaining)
    } else {
        Decimal::ZERO
    };

    debug!(
        employee_id,
        year, %daily_wage, %days_remaining, %amount, "unused-leave payout computed"
    );

    Ok(UnusedLeavePayout {
        amount,
        daily_wage,
        accrual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, SalaryRecord, SalaryType};
    use crate::store::{Collection, DataStore, MemoryStore};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn seed_terminated_employee(store: &MemoryStore) -> String {
        store
            .employees()
            .create(Employee {
                id: String::new(),
                name: "Test".to_string(),
                start_date: Some(date(2018, 1, 10)),
                end_date: Some(date(2025, 6, 30)),
                role_ids: vec![],
            })
            .await
            .unwrap()
    }

    async fn seed_salary(
        store: &MemoryStore,
        employee_id: &str,
        year: i32,
        month: u32,
        base: &str,
        extras: &str,
    ) {
        store
            .salaries()
            .create(SalaryRecord {
                id: String::new(),
                employee_id: employee_id.to_string(),
                year,
                month,
                salary_type: SalaryType::Monthly,
                daily_wage: None,
                monthly_salary: Some(dec(base)),
                base_salary_30_days: dec(base),
                extras: dec(extras),
                created_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_payout_at_thirty_thousand_average() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_terminated_employee(&store).await;
        // Twelve months averaging (base + extras) = 30000.
        for month in 1..=12 {
            seed_salary(&store, &id, 2024, month, "28000", "2000").await;
        }

        let payout = calculate_unused_leave_payout(&store, &rules, &id, 2025)
            .await
            .unwrap();
        // Tenure accrual for 2025: 6 years by 2024-12-31 → 21 days remaining.
        assert_eq!(payout.accrual.balance.days_remaining, dec("21"));
        assert_eq!(payout.daily_wage, dec("1000"));
        assert_eq!(payout.amount, dec("21000.00"));
    }

    #[tokio::test]
    async fn test_last_twelve_window_skips_older_salaries() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_terminated_employee(&store).await;
        // Old cheap year that must fall outside the 12-month window.
        for month in 1..=12 {
            seed_salary(&store, &id, 2023, month, "6000", "0").await;
        }
        for month in 1..=12 {
            seed_salary(&store, &id, 2024, month, "30000", "0").await;
        }

        let payout = calculate_unused_leave_payout(&store, &rules, &id, 2025)
            .await
            .unwrap();
        assert_eq!(payout.daily_wage, dec("1000"));
    }

    #[tokio::test]
    async fn test_zero_remaining_days_pays_nothing() {
        use crate::models::LicenseRecord;
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_terminated_employee(&store).await;
        for month in 1..=12 {
            seed_salary(&store, &id, 2024, month, "30000", "0").await;
        }
        store
            .licenses()
            .create(LicenseRecord {
                id: String::new(),
                employee_id: id.clone(),
                year: 2025,
                month: None,
                days_taken: dec("25"),
                start_date: None,
                end_date: None,
                notes: None,
            })
            .await
            .unwrap();

        let payout = calculate_unused_leave_payout(&store, &rules, &id, 2025)
            .await
            .unwrap();
        assert_eq!(payout.accrual.balance.days_remaining, Decimal::ZERO);
        assert_eq!(payout.amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_no_salary_history_pays_nothing() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_terminated_employee(&store).await;

        let payout = calculate_unused_leave_payout(&store, &rules, &id, 2025)
            .await
            .unwrap();
        assert!(payout.accrual.balance.days_remaining > Decimal::ZERO);
        assert_eq!(payout.amount, Decimal::ZERO);
    }
}
