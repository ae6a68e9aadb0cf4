//! Error types for the payroll accrual engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during accrual calculation and
//! reconciliation.

use thiserror::Error;

/// The main error type for the payroll accrual engine.
///
/// Calculators degrade gracefully on missing historical data (a missing
/// salary month never aborts a calculation), so most variants here describe
/// hard failures: an unreachable data store, invalid caller input, or a
/// broken rules file.
///
/// # Example
///
/// ```
/// use accrual_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     employee_id: "emp_001".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_001");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A data-store collection could not be read or written.
    #[error("Data store collection '{collection}' unavailable: {message}")]
    StoreUnavailable {
        /// The collection that failed.
        collection: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// A record expected to exist in the store was missing.
    #[error("Record '{id}' not found in collection '{collection}'")]
    RecordNotFound {
        /// The collection that was queried.
        collection: String,
        /// The identifier that was not found.
        id: String,
    },

    /// An employee referenced by a calculation does not exist.
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound {
        /// The employee identifier that was not found.
        employee_id: String,
    },

    /// A caller supplied an invalid input value.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Accrual rules file was not found at the specified path.
    #[error("Rules file not found: {path}")]
    RulesNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Accrual rules file could not be parsed.
    #[error("Failed to parse rules file '{path}': {message}")]
    RulesParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl From<crate::store::StoreError> for EngineError {
    fn from(err: crate::store::StoreError) -> Self {
        match err {
            crate::store::StoreError::Unavailable {
                collection,
                message,
            } => EngineError::StoreUnavailable {
                collection,
                message,
            },
            crate::store::StoreError::NotFound { collection, id } => {
                EngineError::RecordNotFound { collection, id }
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
