//! HTTP API module for the accrual engine.
//!
//! This module provides the REST endpoints for triggering recalculations
//! and reading accrual summaries.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RecalculateAllRequest, RecalculateRequest};
pub use response::{AccrualSummaryResponse, ApiError, RecalculateResponse};
pub use state::AppState;
