//! The data-access seam between the engine and the external record store.
//!
//! The engine never talks to a concrete database; it consumes a
//! [`DataStore`], a dependency-injected capability exposing one collection
//! per entity kind. All operations are asynchronous and may fail with a
//! [`StoreError`], which calculators treat as recoverable wherever a
//! degraded (zeroed) result is acceptable.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    AguinaldoRecord, Employee, LicenseRecord, Role, SalaryRecord, UnusedLeavePayoutRecord,
    VacationPayRecord,
};

/// Errors surfaced by a data-store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collection could not be reached (network or store failure).
    #[error("collection '{collection}' unavailable: {message}")]
    Unavailable {
        /// The collection that failed.
        collection: String,
        /// A description of the underlying failure.
        message: String,
    },

    /// An update or delete referenced an id that does not exist.
    #[error("record '{id}' not found in collection '{collection}'")]
    NotFound {
        /// The collection that was addressed.
        collection: String,
        /// The missing identifier.
        id: String,
    },
}

/// A type alias for Results that return StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// The generic operations every collection supports.
#[async_trait]
pub trait Collection<T>: Send + Sync {
    /// Returns every record in the collection.
    async fn get_all(&self) -> StoreResult<Vec<T>>;

    /// Returns the record with the given id, or `None`.
    async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>>;

    /// Persists a new record and returns its assigned id.
    async fn create(&self, record: T) -> StoreResult<String>;

    /// Replaces the record with the given id.
    async fn update(&self, id: &str, record: T) -> StoreResult<()>;

    /// Removes the record with the given id.
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// Collections whose records belong to a single employee.
///
/// The only secondary index the engine ever needs is the employee
/// reference, so the seam is a typed lookup rather than a generic
/// field query.
#[async_trait]
pub trait EmployeeScoped<T>: Collection<T> {
    /// Returns every record owned by the given employee.
    async fn query_by_employee(&self, employee_id: &str) -> StoreResult<Vec<T>>;
}

/// The full set of collections the engine operates on.
pub trait DataStore: Send + Sync {
    /// The employees collection (read-only to the engine).
    fn employees(&self) -> &dyn Collection<Employee>;

    /// The roles collection (read-only reference data).
    fn roles(&self) -> &dyn Collection<Role>;

    /// Monthly salary records.
    fn salaries(&self) -> &dyn EmployeeScoped<SalaryRecord>;

    /// Taken-leave records.
    fn licenses(&self) -> &dyn EmployeeScoped<LicenseRecord>;

    /// Computed vacation-pay records (engine-owned).
    fn vacation_pay(&self) -> &dyn EmployeeScoped<VacationPayRecord>;

    /// Computed unused-leave payout records (engine-owned).
    fn unused_leave(&self) -> &dyn EmployeeScoped<UnusedLeavePayoutRecord>;

    /// Computed aguinaldo records (engine-owned).
    fn aguinaldo(&self) -> &dyn EmployeeScoped<AguinaldoRecord>;
}
