//! Application state for the attendance engine API.

use std::sync::Arc;

use crate::config::ShiftPolicy;
use crate::store::SummaryStore;

/// Shared application state.
///
/// Holds the validated shift policy and the summary store. Both are built
/// by the caller and injected here; handlers never reach for global state.
#[derive(Clone)]
pub struct AppState {
    policy: Arc<ShiftPolicy>,
    store: Arc<dyn SummaryStore>,
}

impl AppState {
    /// Creates a new application state from a policy and a store.
    pub fn new(policy: ShiftPolicy, store: impl SummaryStore + 'static) -> Self {
        Self {
            policy: Arc::new(policy),
            store: Arc::new(store),
        }
    }

    /// Returns the active shift policy.
    pub fn policy(&self) -> &ShiftPolicy {
        &self.policy
    }

    /// Returns the summary store.
    pub fn store(&self) -> &dyn SummaryStore {
        self.store.as_ref()
    }
}
