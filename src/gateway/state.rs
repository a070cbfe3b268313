use std::sync::Arc;

use crate::account::{AccountService, AccountStore};

/// Shared gateway state, handed to every handler
#[derive(Clone)]
pub struct AppState {
    /// Account operations over the configured store
    pub accounts: AccountService,
}

impl AppState {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self {
            accounts: AccountService::new(store),
        }
    }
}
