//! HTTP request handlers for the accrual engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    average_monthly_salary, calculate_aguinaldo, calculate_unused_leave_payout,
    calculate_vacation_accrual, calculate_vacation_pay, is_active_in_year, is_semester_paid,
};
use crate::models::{Employee, Semester};
use crate::orchestrator::{recalculate_all_payroll_items, recalculate_payroll_items};
use crate::reconcile::validate_employee_year;
use crate::store::{Collection, DataStore, EmployeeScoped};

use super::request::{RecalculateAllRequest, RecalculateRequest};
use super::response::{
    AccrualSummaryResponse, ApiError, ApiErrorResponse, RecalculateResponse, SemesterSummary,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/recalculate", post(recalculate_handler))
        .route("/recalculate-all", post(recalculate_all_handler))
        .route("/accruals/:employee_id/:year", get(accrual_summary_handler))
        .with_state(state)
}

fn bad_json(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    warn!(correlation_id = %correlation_id, error = %rejection, "rejected request body");
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::malformed_json(rejection.body_text()),
    }
}

/// Handler for the POST /recalculate endpoint.
///
/// Runs a full per-employee recalculation and returns the refreshed
/// records. Step failures are reported in the response body rather than
/// failing the request, matching the partial-failure tolerance of the
/// orchestrator.
async fn recalculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculateRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection, correlation_id).into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        year = request.year,
        "processing recalculation request"
    );

    if let Err(err) = validate_employee_year(&request.employee_id, request.year) {
        return ApiErrorResponse::from(err).into_response();
    }

    let outcome = recalculate_payroll_items(
        state.store(),
        state.rules(),
        &request.employee_id,
        request.year,
    )
    .await;
    Json(RecalculateResponse::from(outcome)).into_response()
}

/// Handler for the POST /recalculate-all endpoint.
///
/// Recalculates every employee with salary records in the year and returns
/// the aggregate counts. Only a failure to enumerate employees fails the
/// request.
async fn recalculate_all_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecalculateAllRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection, correlation_id).into_response(),
    };
    info!(correlation_id = %correlation_id, year = request.year, "processing year-wide recalculation");

    if let Err(err) = validate_employee_year("all", request.year) {
        return ApiErrorResponse::from(err).into_response();
    }

    match recalculate_all_payroll_items(state.store(), state.rules(), request.year).await {
        Ok(summary) => Json(summary).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "year-wide recalculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the GET /accruals/:employee_id/:year endpoint.
///
/// Computes a read-only summary of the employee's accrual state without
/// persisting anything.
async fn accrual_summary_handler(
    State(state): State<AppState>,
    Path((employee_id, year)): Path<(String, i32)>,
) -> Result<Json<AccrualSummaryResponse>, ApiErrorResponse> {
    validate_employee_year(&employee_id, year)?;

    let store = state.store();
    let rules = state.rules();

    let employee = store
        .employees()
        .get_by_id(&employee_id)
        .await
        .map_err(crate::error::EngineError::from)?
        .ok_or(crate::error::EngineError::EmployeeNotFound {
            employee_id: employee_id.clone(),
        })?;
    let terminated = Employee::is_terminated(&employee);

    let accrual = calculate_vacation_accrual(store, rules, &employee_id, year).await?;

    // Estimates are meaningful only for years the employment overlaps; a
    // year after termination (or before hire) has neither entitlement.
    let (vacation_pay_estimate, unused_leave_payout) = if !is_active_in_year(&employee, year) {
        (None, None)
    } else if terminated {
        let payout = calculate_unused_leave_payout(store, rules, &employee_id, year).await?;
        (None, Some(payout.amount))
    } else {
        let pay = calculate_vacation_pay(
            store,
            rules,
            &employee_id,
            year,
            accrual.balance.days_remaining,
        )
        .await?;
        (Some(pay.amount), None)
    };

    let salaries = match store.salaries().query_by_employee(&employee_id).await {
        Ok(salaries) => salaries,
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to read salary history for summary");
            Vec::new()
        }
    };
    let average_salary = average_monthly_salary(&salaries, year);

    let first_amount = calculate_aguinaldo(store, rules, &employee_id, year, Semester::First).await?;
    let second_amount =
        calculate_aguinaldo(store, rules, &employee_id, year, Semester::Second).await?;
    let aguinaldo_records = match store.aguinaldo().query_by_employee(&employee_id).await {
        Ok(records) => records,
        Err(err) => {
            warn!(employee_id, year, error = %err, "failed to read aguinaldo records for summary");
            Vec::new()
        }
    };

    Ok(Json(AccrualSummaryResponse {
        employee_id,
        year,
        terminated,
        basis: accrual.basis,
        months_worked: accrual.months_worked,
        balance: accrual.balance,
        average_monthly_salary: average_salary,
        first_semester: SemesterSummary {
            amount: first_amount,
            paid: is_semester_paid(&aguinaldo_records, year, Semester::First),
        },
        second_semester: SemesterSummary {
            amount: second_amount,
            paid: is_semester_paid(&aguinaldo_records, year, Semester::Second),
        },
        vacation_pay_estimate,
        unused_leave_payout,
    }))
}
