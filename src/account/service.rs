//! Account Service - business operations over an [`AccountStore`]
//!
//! Handlers talk to this type only; it turns "row missing" into
//! [`AccountError::NotFound`] and retries account number collisions.

use std::sync::Arc;

use super::error::AccountError;
use super::models::{Account, AccountUpdate, NewAccount};
use super::repository::AccountStore;

/// How many account numbers to try before giving up on a create
pub const ACCOUNT_NUMBER_ATTEMPTS: usize = 5;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Account>, AccountError> {
        self.store.list().await
    }

    /// Persist a new account, drawing a fresh number on collision
    pub async fn create(&self, mut account: NewAccount) -> Result<Account, AccountError> {
        for attempt in 1..=ACCOUNT_NUMBER_ATTEMPTS {
            match self.store.insert(&account).await {
                Ok(created) => {
                    tracing::info!(
                        id = created.id,
                        account_number = %created.account_number,
                        "Account created"
                    );
                    return Ok(created);
                }
                Err(AccountError::DuplicateAccountNumber) => {
                    tracing::warn!(attempt, "Account number collision, regenerating");
                    account.regenerate_number();
                }
                Err(e) => return Err(e),
            }
        }
        Err(AccountError::DuplicateAccountNumber)
    }

    pub async fn get(&self, id: i64) -> Result<Account, AccountError> {
        self.store.get(id).await?.ok_or(AccountError::NotFound(id))
    }

    pub async fn update(&self, id: i64, update: &AccountUpdate) -> Result<Account, AccountError> {
        let account = self
            .store
            .update(id, update)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        tracing::info!(id, ?update, "Account updated");
        Ok(account)
    }

    /// Remove an account and return its last state
    pub async fn delete(&self, id: i64) -> Result<Account, AccountError> {
        let account = self
            .store
            .delete(id)
            .await?
            .ok_or(AccountError::NotFound(id))?;
        tracing::info!(id, "Account deleted");
        Ok(account)
    }

    pub async fn health_check(&self) -> Result<(), AccountError> {
        self.store.ping().await
    }
}
