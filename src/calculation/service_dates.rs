//! Pure date arithmetic over the employment timeline.
//!
//! Everything here is a legal simplification, not calendar precision: any
//! partial month worked counts as a full month, and the year boundary is
//! always January 1 / December 31.

use chrono::{Datelike, NaiveDate};

use crate::models::Employee;

fn year_bounds(year: i32) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(year, 1, 1)?,
        NaiveDate::from_ymd_opt(year, 12, 31)?,
    ))
}

/// True when the employee's employment overlaps the given reporting year.
///
/// An employee with no start date is treated as active (legacy records);
/// filtering them out would hide their salary history from reports.
pub fn is_active_in_year(employee: &Employee, year: i32) -> bool {
    if let Some(start) = employee.start_date {
        if start.year() > year {
            return false;
        }
    }
    if let Some(end) = employee.end_date {
        if end.year() < year {
            return false;
        }
    }
    true
}

/// Whole months worked during `year`, counting any partial month as full.
///
/// Counts inclusive months from `max(start_date, Jan 1)` through December
/// 31. An employee hired before the year always gets 12.
pub fn months_worked_in_year(start_date: NaiveDate, year: i32) -> u32 {
    let Some((year_start, year_end)) = year_bounds(year) else {
        return 0;
    };
    if start_date > year_end {
        return 0;
    }
    let actual_start = start_date.max(year_start);
    let months = (year_end.year() - actual_start.year()) * 12
        + (year_end.month() as i32 - actual_start.month() as i32)
        + 1;
    months.max(0) as u32
}

/// Complete years of service from `start_date` to `as_of`, floored at 0.
///
/// The year count decrements by one when the anniversary has not yet been
/// reached in the `as_of` year.
pub fn years_of_service_as_of(start_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - start_date.year();
    if (as_of.month(), as_of.day()) < (start_date.month(), start_date.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Inclusive calendar days worked during `year`, from `max(start_date,
/// Jan 1)` through December 31. Zero when the employee starts after the
/// year ends.
pub fn days_worked_in_year(start_date: NaiveDate, year: i32) -> i64 {
    let Some((year_start, year_end)) = year_bounds(year) else {
        return 0;
    };
    if start_date > year_end {
        return 0;
    }
    let actual_start = start_date.max(year_start);
    (year_end - actual_start).num_days() + 1
}
