//! Data models for bank accounts

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::number::generate_account_number;

/// Status assigned to every newly opened account
pub const DEFAULT_STATUS: &str = "Active";

/// Persisted bank account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Account {
    /// Store-assigned primary key
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "John Doe")]
    pub name: String,
    /// 20-digit account number, distinct from `id`
    #[schema(example = "04718293650192837465")]
    pub account_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 0.0)]
    pub balance: Decimal,
    #[schema(example = "€")]
    pub currency: String,
    #[schema(example = "Italy")]
    pub country: String,
    #[schema(example = "Active")]
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Open a new, not yet persisted, account.
    ///
    /// The account number is generated here; balance starts at zero and the
    /// status at [`DEFAULT_STATUS`].
    #[allow(clippy::new_ret_no_self)]
    pub fn new(
        name: impl Into<String>,
        currency: impl Into<String>,
        country: impl Into<String>,
    ) -> NewAccount {
        NewAccount {
            name: name.into(),
            account_number: generate_account_number(),
            balance: Decimal::ZERO,
            currency: currency.into(),
            country: country.into(),
            status: DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Apply a partial update in place. Returns true if any field changed.
    pub fn apply(&mut self, update: &AccountUpdate) -> bool {
        let mut changed = false;
        if let Some(name) = &update.name {
            changed |= self.name != *name;
            self.name = name.clone();
        }
        if let Some(currency) = &update.currency {
            changed |= self.currency != *currency;
            self.currency = currency.clone();
        }
        if let Some(country) = &update.country {
            changed |= self.country != *country;
            self.country = country.clone();
        }
        changed
    }
}

/// Renders as `<Event '{account_number}'>`
impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Event '{}'>", self.account_number)
    }
}

/// Account that has been built but not yet stored (no id yet)
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub account_number: String,
    pub balance: Decimal,
    pub currency: String,
    pub country: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl NewAccount {
    /// Attach the id assigned by the store
    pub fn with_id(self, id: i64) -> Account {
        Account {
            id,
            name: self.name,
            account_number: self.account_number,
            balance: self.balance,
            currency: self.currency,
            country: self.country,
            status: self.status,
            created_at: self.created_at,
        }
    }

    /// Draw a fresh account number (used after a uniqueness collision)
    pub fn regenerate_number(&mut self) {
        self.account_number = generate_account_number();
    }
}

impl fmt::Display for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Event '{}'>", self.account_number)
    }
}

/// Partial update: `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub currency: Option<String>,
    pub country: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.currency.is_none() && self.country.is_none()
    }
}
