//! Account management module
//!
//! Bank accounts, their validation, and the storage they live in.

pub mod error;
pub mod memory;
pub mod models;
pub mod number;
pub mod repository;
pub mod service;
pub mod validation;

// Re-export commonly used types
pub use error::AccountError;
pub use memory::MemoryAccountStore;
pub use models::{Account, AccountUpdate, DEFAULT_STATUS, NewAccount};
pub use number::{ACCOUNT_NUMBER_LEN, generate_account_number, is_valid_account_number};
pub use repository::{AccountStore, PgAccountRepository};
pub use service::{ACCOUNT_NUMBER_ATTEMPTS, AccountService};
pub use validation::ValidationError;

// Re-export Database from top-level db module
pub use crate::db::Database;
