//! In-process [`DataStore`] backed by hash maps.
//!
//! Used by the test suites and by callers that want to run the engine
//! against a snapshot of records without a live store. Ids are assigned as
//! UUID v4 strings on `create`, matching the behavior the engine expects
//! from the production data layer.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    AguinaldoRecord, Employee, LicenseRecord, Role, SalaryRecord, UnusedLeavePayoutRecord,
    VacationPayRecord,
};

use super::{Collection, DataStore, EmployeeScoped, StoreError, StoreResult};

/// Record types storable in a [`MemoryCollection`].
pub trait StoredRecord: Clone + Send + Sync + 'static {
    /// The record's identifier.
    fn id(&self) -> &str;
    /// Overwrites the record's identifier (used when the store assigns one).
    fn set_id(&mut self, id: String);
    /// The owning employee, for employee-scoped collections.
    fn employee_id(&self) -> Option<&str> {
        None
    }
}

macro_rules! impl_stored_record {
    ($ty:ty) => {
        impl StoredRecord for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
    ($ty:ty, owned) => {
        impl StoredRecord for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn set_id(&mut self, id: String) {
                self.id = id;
            }
            fn employee_id(&self) -> Option<&str> {
                Some(&self.employee_id)
            }
        }
    };
}

impl_stored_record!(Employee);
impl_stored_record!(Role);
impl_stored_record!(SalaryRecord, owned);
impl_stored_record!(LicenseRecord, owned);
impl_stored_record!(VacationPayRecord, owned);
impl_stored_record!(UnusedLeavePayoutRecord, owned);
impl_stored_record!(AguinaldoRecord, owned);

/// One in-memory collection.
pub struct MemoryCollection<T> {
    name: &'static str,
    records: RwLock<HashMap<String, T>>,
}

impl<T> MemoryCollection<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            records: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl<T: StoredRecord> Collection<T> for MemoryCollection<T> {
    async fn get_all(&self) -> StoreResult<Vec<T>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn create(&self, mut record: T) -> StoreResult<String> {
        let id = Uuid::new_v4().to_string();
        record.set_id(id.clone());
        self.records.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn update(&self, id: &str, mut record: T) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(id) {
            return Err(StoreError::NotFound {
                collection: self.name.to_string(),
                id: id.to_string(),
            });
        }
        record.set_id(id.to_string());
        records.insert(id.to_string(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.remove(id).is_none() {
            return Err(StoreError::NotFound {
                collection: self.name.to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl<T: StoredRecord> EmployeeScoped<T> for MemoryCollection<T> {
    async fn query_by_employee(&self, employee_id: &str) -> StoreResult<Vec<T>> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.employee_id() == Some(employee_id))
            .cloned()
            .collect())
    }
}

/// An in-memory [`DataStore`] holding all seven collections.
pub struct MemoryStore {
    employees: MemoryCollection<Employee>,
    roles: MemoryCollection<Role>,
    salaries: MemoryCollection<SalaryRecord>,
    licenses: MemoryCollection<LicenseRecord>,
    vacation_pay: MemoryCollection<VacationPayRecord>,
    unused_leave: MemoryCollection<UnusedLeavePayoutRecord>,
    aguinaldo: MemoryCollection<AguinaldoRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            employees: MemoryCollection::new("employees"),
            roles: MemoryCollection::new("roles"),
            salaries: MemoryCollection::new("salaries"),
            licenses: MemoryCollection::new("licenses"),
            vacation_pay: MemoryCollection::new("vacationPay"),
            unused_leave: MemoryCollection::new("unusedLeave"),
            aguinaldo: MemoryCollection::new("aguinaldo"),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DataStore for MemoryStore {
    fn employees(&self) -> &dyn Collection<Employee> {
        &self.employees
    }

    fn roles(&self) -> &dyn Collection<Role> {
        &self.roles
    }

    fn salaries(&self) -> &dyn EmployeeScoped<SalaryRecord> {
        &self.salaries
    }

    fn licenses(&self) -> &dyn EmployeeScoped<LicenseRecord> {
        &self.licenses
    }

    fn vacation_pay(&self) -> &dyn EmployeeScoped<VacationPayRecord> {
        &self.vacation_pay
    }

    fn unused_leave(&self) -> &dyn EmployeeScoped<UnusedLeavePayoutRecord> {
        &self.unused_leave
    }

    fn aguinaldo(&self) -> &dyn EmployeeScoped<AguinaldoRecord> {
        &self.aguinaldo
    }
}
