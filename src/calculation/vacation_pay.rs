//! Vacation pay ("salario vacacional") for active employees.
//!
//! Vacation pay is due only when leave is actually enjoyed: accrued but
//! untaken days earn no payable amount. The daily wage comes from the most
//! recent salary record of the year; a year with no salary records has no
//! wage basis and earns nothing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EngineResult;
use crate::rules::AccrualRules;
use crate::store::DataStore;

use super::round_money;
use super::salary_history::{fetch_salaries_or_empty, latest_daily_wage_in_year};
use super::vacation_accrual::{VacationAccrual, calculate_vacation_accrual};

/// The result of a vacation-pay calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPay {
    /// Daily wage × days enjoyed, rounded to 2 decimals. Zero when no days
    /// are being taken or no wage basis exists.
    pub amount: Decimal,
    /// The daily wage the amount was derived from.
    pub daily_wage: Decimal,
    /// The days being enjoyed in this period.
    pub days_enjoyed: Decimal,
    /// The underlying day balance for the year.
    pub accrual: VacationAccrual,
}

/// Computes vacation pay for the given number of days being enjoyed.
///
/// The terminated-employee guard lives in the reconcile layer; this
/// calculator only does the arithmetic.
pub async fn calculate_vacation_pay(
    store: &dyn DataStore,
    rules: &AccrualRules,
    employee_id: &str,
    year: i32,
    days_enjoyed: Decimal,
) -> EngineResult<VacationPay> {
    let accrual = calculate_vacation_accrual(store, rules, employee_id, year).await?;
    let salaries = fetch_salaries_or_empty(store, employee_id).await;

    let daily_wage =
        latest_daily_wage_in_year(&salaries, year, rules).unwrap_or(Decimal::ZERO);

    let amount = if days_enjoyed > Decimal::ZERO && daily_wage > Decimal::ZERO {
        round_money(daily_wage * days_enjoyed)
    } else {
        Decimal::ZERO
    };

    debug!(
        employee_id,
        year, %daily_wage, %days_enjoyed, %amount, "vacation pay computed"
    );

    Ok(VacationPay {
        amount,
        daily_wage,
        days_enjoyed,
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

    async fn seed_employee(store: &MemoryStore) -> String {
        store
            .employees()
            .create(Employee {
                id: String::new(),
                name: "Test".to_string(),
                start_date: Some(NaiveDate::from_ymd_opt(2020, 3, 15).unwrap()),
                end_date: None,
                role_ids: vec![],
            })
            .await
            .unwrap()
    }

    async fn seed_salary(store: &MemoryStore, employee_id: &str, year: i32, month: u32, base: &str) {
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
                extras: Decimal::ZERO,
                created_at: chrono::Utc::now(),
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_amount_is_wage_times_days_enjoyed() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;
        seed_salary(&store, &id, 2025, 8, "45000").await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, dec("10"))
            .await
            .unwrap();
        // 45000 / 30 = 1500 daily; × 10 days.
        assert_eq!(pay.daily_wage, dec("1500"));
        assert_eq!(pay.amount, dec("15000.00"));
    }

    #[tokio::test]
    async fn test_zero_days_enjoyed_earns_nothing() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;
        seed_salary(&store, &id, 2025, 8, "45000").await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, Decimal::ZERO)
            .await
            .unwrap();
        assert_eq!(pay.amount, Decimal::ZERO);
        // The day balance is still reported.
        assert!(pay.accrual.balance.days_accumulated > Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_wage_uses_most_recent_month() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;
        seed_salary(&store, &id, 2025, 3, "30000").await;
        seed_salary(&store, &id, 2025, 11, "60000").await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, dec("5"))
            .await
            .unwrap();
        assert_eq!(pay.daily_wage, dec("2000"));
        assert_eq!(pay.amount, dec("10000.00"));
    }

    #[tokio::test]
    async fn test_no_salaries_yields_zero_amount() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, dec("5"))
            .await
            .unwrap();
        assert_eq!(pay.daily_wage, Decimal::ZERO);
        assert_eq!(pay.amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_other_years_salaries_give_no_wage_basis() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;
        seed_salary(&store, &id, 2024, 11, "45000").await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, dec("5"))
            .await
            .unwrap();
        assert_eq!(pay.daily_wage, Decimal::ZERO);
        assert_eq!(pay.amount, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_amount_rounds_to_two_decimals() {
        let store = MemoryStore::new();
        let rules = AccrualRules::default();
        let id = seed_employee(&store).await;
        seed_salary(&store, &id, 2025, 6, "40000").await;

        let pay = calculate_vacation_pay(&store, &rules, &id, 2025, dec("7"))
            .await
            .unwrap();
        // 40000 / 30 × 7 = 9333.333… → 9333.33
        assert_eq!(pay.amount, dec("9333.33"));
    }
}
