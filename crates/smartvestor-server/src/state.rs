//! Application State

use std::sync::Arc;

use smartvestor_accounts::{Accounts, Store};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Registration, login and token checks
    pub accounts: Accounts,

    /// Recommendation record storage
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(accounts: Accounts) -> Self {
        let store = accounts.store().clone();
        Self { accounts, store }
    }
}
