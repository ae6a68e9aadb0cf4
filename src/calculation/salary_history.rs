//! Averages and daily wages derived from the salary history.
//!
//! All conversions between monthly and daily amounts use the fixed 30-day
//! month convention; actual days-in-month never enter the arithmetic.

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::SalaryRecord;
use crate::rules::AccrualRules;
use crate::store::{DataStore, EmployeeScoped};

/// Mean taxable total (`base + extras`) across the year's salary records;
/// zero when the year has none.
pub fn average_monthly_salary(salaries: &[SalaryRecord], year: i32) -> Decimal {
    let year_salaries: Vec<&SalaryRecord> = salaries.iter().filter(|s| s.year == year).collect();
    if year_salaries.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = year_salaries.iter().map(|s| s.taxable_total()).sum();
    total / Decimal::from(year_salaries.len() as u32)
}

/// Daily wage from the most recent salary record of `year`.
///
/// Picks the record with the greatest month (ties prefer one carrying an
/// explicit daily wage), uses its `daily_wage` when positive, and otherwise
/// derives `taxable_total / 30`. `None` when the year has no records.
pub fn latest_daily_wage_in_year(
    salaries: &[SalaryRecord],
    year: i32,
    rules: &AccrualRules,
) -> Option<Decimal> {
    let latest = salaries
        .iter()
        .filter(|s| s.year == year)
        .max_by(|a, b| {
            a.month
                .cmp(&b.month)
                .then_with(|| a.daily_wage.is_some().cmp(&b.daily_wage.is_some()))
        })?;

    match latest.daily_wage {
        Some(wage) if wage > Decimal::ZERO => Some(wage),
        _ => Some(latest.taxable_total() / rules.days_per_month_decimal()),
    }
}

/// Average daily wage over the last 12 salary records on file, sorted by
/// (year, month) descending. Fewer than 12 records average over what
/// exists; `None` when the history is empty.
pub fn last_twelve_months_daily_wage(
    salaries: &[SalaryRecord],
    rules: &AccrualRules,
) -> Option<Decimal> {
    let mut sorted: Vec<&SalaryRecord> = salaries.iter().collect();
    sorted.sort_by(|a, b| b.year.cmp(&a.year).then(b.month.cmp(&a.month)));
    let recent: Vec<&SalaryRecord> = sorted.into_iter().take(12).collect();
    if recent.is_empty() {
        return None;
    }

    let total: Decimal = recent.iter().map(|s| s.taxable_total()).sum();
    let average_monthly = total / Decimal::from(recent.len() as u32);
    Some(average_monthly / rules.days_per_month_decimal())
}

/// Fetches an employee's full salary history, degrading to an empty list
/// (with a warning) when the collection cannot be read. A missing salary
/// history means "no entitlement computed", never a crashed calculation.
pub(crate) async fn fetch_salaries_or_empty(
    store: &dyn DataStore,
    employee_id: &str,
) -> Vec<SalaryRecord> {
    match store.salaries().query_by_employee(employee_id).await {
        Ok(salaries) => salaries,
        Err(err) => {
            warn!(employee_id, error = %err, "failed to read salary history, defaulting to empty");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SalaryType;
    use chrono::Utc;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(year: i32, month: u32, base: &str, extras: &str) -> SalaryRecord {
        SalaryRecord {
            id: format!("sal_{year}_{month}"),
            employee_id: "emp_001".to_string(),
            year,
            month,
            salary_type: SalaryType::Monthly,
            daily_wage: None,
            monthly_salary: Some(dec(base)),
            base_salary_30_days: dec(base),
            extras: dec(extras),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_average_monthly_salary_includes_extras() {
        let salaries = vec![
            salary(2025, 1, "40000", "2000"),
            salary(2025, 2, "40000", "0"),
        ];
        assert_eq!(average_monthly_salary(&salaries, 2025), dec("41000"));
    }

    #[test]
    fn test_average_monthly_salary_zero_without_records() {
        assert_eq!(average_monthly_salary(&[], 2025), Decimal::ZERO);
    }

    #[test]
    fn test_average_ignores_other_years() {
        let salaries = vec![
            salary(2024, 12, "99000", "0"),
            salary(2025, 1, "30000", "0"),
        ];
        assert_eq!(average_monthly_salary(&salaries, 2025), dec("30000"));
    }

    #[test]
    fn test_latest_daily_wage_picks_greatest_month() {
        let salaries = vec![
            salary(2025, 3, "30000", "0"),
            salary(2025, 9, "45000", "1500"),
            salary(2025, 6, "36000", "0"),
        ];
        let rules = AccrualRules::default();
        // (45000 + 1500) / 30
        assert_eq!(
            latest_daily_wage_in_year(&salaries, 2025, &rules),
            Some(dec("1550"))
        );
    }

    #[test]
    fn test_latest_daily_wage_prefers_explicit_wage() {
        let mut daily = salary(2025, 9, "45000", "0");
        daily.salary_type = SalaryType::Daily;
        daily.daily_wage = Some(dec("1600"));
        let salaries = vec![salary(2025, 8, "30000", "0"), daily];
        let rules = AccrualRules::default();
        assert_eq!(
            latest_daily_wage_in_year(&salaries, 2025, &rules),
            Some(dec("1600"))
        );
    }

    #[test]
    fn test_latest_daily_wage_none_for_empty_year() {
        let salaries = vec![salary(2024, 12, "30000", "0")];
        let rules = AccrualRules::default();
        assert_eq!(latest_daily_wage_in_year(&salaries, 2025, &rules), None);
    }

    #[test]
    fn test_last_twelve_months_spans_year_boundary() {
        // 14 months on file; only the latest 12 should count.
        let mut salaries = Vec::new();
        for month in 1..=12 {
            salaries.push(salary(2024, month, "24000", "0"));
        }
        salaries.push(salary(2025, 1, "60000", "0"));
        salaries.push(salary(2025, 2, "60000", "0"));

        let rules = AccrualRules::default();
        // Latest 12: 2025 Jan+Feb (60000 each) + 2024 Mar..Dec (24000 × 10)
        // = (120000 + 240000) / 12 = 30000 monthly → 1000 daily.
        assert_eq!(
            last_twelve_months_daily_wage(&salaries, &rules),
            Some(dec("1000"))
        );
    }

    #[test]
    fn test_last_twelve_months_with_short_history() {
        let salaries = vec![
            salary(2025, 5, "30000", "0"),
            salary(2025, 6, "30000", "0"),
        ];
        let rules = AccrualRules::default();
        assert_eq!(
            last_twelve_months_daily_wage(&salaries, &rules),
            Some(dec("1000"))
        );
    }

    #[test]
    fn test_last_twelve_months_none_when_empty() {
        let rules = AccrualRules::default();
        assert_eq!(last_twelve_months_daily_wage(&[], &rules), None);
    }
}
