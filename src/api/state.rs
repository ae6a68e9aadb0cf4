//! Application state for the accrual engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::rules::AccrualRules;
use crate::store::DataStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers:
/// the data store and the loaded accrual rules.
#[derive(Clone)]
pub struct AppState {
    /// The injected record store.
    store: Arc<dyn DataStore>,
    /// The loaded accrual rules.
    rules: Arc<AccrualRules>,
}

impl AppState {
    /// Creates a new application state from a store and rules.
    pub fn new(store: Arc<dyn DataStore>, rules: AccrualRules) -> Self {
        Self {
            store,
            rules: Arc::new(rules),
        }
    }

    /// Returns a reference to the data store.
    pub fn store(&self) -> &dyn DataStore {
        self.store.as_ref()
    }

    /// Returns a reference to the accrual rules.
    pub fn rules(&self) -> &AccrualRules {
        &self.rules
    }
}
