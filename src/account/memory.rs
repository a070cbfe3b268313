//! In-memory account store
//!
//! Used by tests and by `--memory` runs where no PostgreSQL is available.
//! Ids are assigned sequentially from 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::error::AccountError;
use super::models::{Account, AccountUpdate, NewAccount};
use super::repository::AccountStore;

#[derive(Default)]
struct Accounts {
    last_id: i64,
    rows: BTreeMap<i64, Account>,
}

#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<Accounts>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn list(&self) -> Result<Vec<Account>, AccountError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.rows.values().cloned().collect())
    }

    async fn insert(&self, account: &NewAccount) -> Result<Account, AccountError> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .rows
            .values()
            .any(|a| a.account_number == account.account_number)
        {
            return Err(AccountError::DuplicateAccountNumber);
        }

        accounts.last_id += 1;
        let stored = account.clone().with_id(accounts.last_id);
        accounts.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn get(&self, id: i64) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.read().await.rows.get(&id).cloned())
    }

    async fn update(
        &self,
        id: i64,
        update: &AccountUpdate,
    ) -> Result<Option<Account>, AccountError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.rows.get_mut(&id).map(|account| {
            account.apply(update);
            account.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<Option<Account>, AccountError> {
        Ok(self.accounts.write().await.rows.remove(&id))
    }

    async fn ping(&self) -> Result<(), AccountError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let store = MemoryAccountStore::new();
        let a = store.insert(&Account::new("A", "$", "USA")).await.unwrap();
        let b = store.insert(&Account::new("B", "$", "USA")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        store.delete(b.id).await.unwrap();
        let c = store.insert(&Account::new("C", "$", "USA")).await.unwrap();
        assert_eq!(c.id, 3);
    }

    #[tokio::test]
    async fn test_list_ordered_by_id() {
        let store = MemoryAccountStore::new();
        assert!(store.list().await.unwrap().is_empty());

        for name in ["A", "B", "C"] {
            store.insert(&Account::new(name, "€", "Italy")).await.unwrap();
        }
        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_duplicate_account_number_rejected() {
        let store = MemoryAccountStore::new();
        let first = Account::new("A", "$", "USA");
        store.insert(&first).await.unwrap();

        let mut second = Account::new("B", "$", "USA");
        second.account_number = first.account_number.clone();
        let err = store.insert(&second).await.unwrap_err();
        assert!(matches!(err, AccountError::DuplicateAccountNumber));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let store = MemoryAccountStore::new();
        let update = AccountUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert!(store.update(99, &update).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = MemoryAccountStore::new();
        let a = store.insert(&Account::new("A", "$", "USA")).await.unwrap();

        assert_eq!(store.delete(a.id).await.unwrap(), Some(a.clone()));
        assert!(store.get(a.id).await.unwrap().is_none());
        assert!(store.delete(a.id).await.unwrap().is_none());
    }
}
