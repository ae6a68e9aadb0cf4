//! Performance benchmarks for the accrual engine.
//!
//! This benchmark suite tracks the cost of the hot calculation paths:
//! - Vacation-day accrual for one employee-year
//! - Semester aguinaldo for one employee-year
//! - Full per-employee recalculation
//! - Year-wide recalculation over 100 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use accrual_engine::calculation::{calculate_aguinaldo, calculate_vacation_accrual};
use accrual_engine::models::{Employee, SalaryRecord, SalaryType, Semester};
use accrual_engine::orchestrator::{recalculate_all_payroll_items, recalculate_payroll_items};
use accrual_engine::rules::AccrualRules;
use accrual_engine::store::{Collection, DataStore, MemoryStore};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn seed_employee_with_history(store: &MemoryStore, years_of_salaries: i32) -> String {
    let id = store
        .employees()
        .create(Employee {
            id: String::new(),
            name: "Bench Employee".to_string(),
            start_date: NaiveDate::from_ymd_opt(2018, 1, 10),
            end_date: None,
            role_ids: vec![],
        })
        .await
        .unwrap();

    for year in (2026 - years_of_salaries)..2026 {
        for month in 1..=12 {
            store
                .salaries()
                .create(SalaryRecord {
                    id: String::new(),
                    employee_id: id.clone(),
                    year,
                    month,
                    salary_type: SalaryType::Monthly,
                    daily_wage: None,
                    monthly_salary: Some(dec("36000")),
                    base_salary_30_days: dec("36000"),
                    extras: dec("1500"),
                    created_at: chrono::Utc::now(),
                })
                .await
                .unwrap();
        }
    }
    id
}

/// Benchmark: vacation-day accrual for a single employee-year.
fn bench_vacation_accrual(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    let rules = AccrualRules::default();
    let id = rt.block_on(seed_employee_with_history(&store, 5));

    c.bench_function("vacation_accrual", |b| {
        b.to_async(&rt).iter(|| async {
            let accrual = calculate_vacation_accrual(&store, &rules, &id, 2025)
                .await
                .unwrap();
            black_box(accrual)
        })
    });
}

/// Benchmark: one semester's aguinaldo for a single employee-year.
fn bench_aguinaldo(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    let rules = AccrualRules::default();
    let id = rt.block_on(seed_employee_with_history(&store, 5));

    c.bench_function("aguinaldo_semester", |b| {
        b.to_async(&rt).iter(|| async {
            let amount = calculate_aguinaldo(&store, &rules, &id, 2025, Semester::Second)
                .await
                .unwrap();
            black_box(amount)
        })
    });
}

/// Benchmark: a full per-employee recalculation, including the upserts.
fn bench_recalculate_employee(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    let rules = AccrualRules::default();
    let id = rt.block_on(seed_employee_with_history(&store, 5));

    c.bench_function("recalculate_employee", |b| {
        b.to_async(&rt).iter(|| async {
            let outcome = recalculate_payroll_items(&store, &rules, &id, 2025).await;
            black_box(outcome)
        })
    });
}

/// Benchmark: year-wide recalculation over 100 employees with one salary
/// year each.
fn bench_recalculate_all_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let store = MemoryStore::new();
    let rules = AccrualRules::default();
    rt.block_on(async {
        for _ in 0..100 {
            seed_employee_with_history(&store, 1).await;
        }
    });

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));
    group.sample_size(10);

    group.bench_function("recalculate_all_100", |b| {
        b.to_async(&rt).iter(|| async {
            let summary = recalculate_all_payroll_items(&store, &rules, 2025)
                .await
                .unwrap();
            black_box(summary)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_vacation_accrual,
    bench_aguinaldo,
    bench_recalculate_employee,
    bench_recalculate_all_100
);
criterion_main!(benches);
