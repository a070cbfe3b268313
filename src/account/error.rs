use thiserror::Error;

use super::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Account {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Account number already in use")]
    DuplicateAccountNumber,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl AccountError {
    /// Map a sqlx error, recognising the account number unique constraint
    pub fn from_insert(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                return AccountError::DuplicateAccountNumber;
            }
        }
        AccountError::Database(e)
    }
}
