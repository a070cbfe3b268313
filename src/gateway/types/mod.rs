//! Gateway types module
//!
//! ## Input Types
//! - [`CreateAccountRequest`], [`UpdateAccountRequest`]: JSON bodies
//! - [`ValidatedCreate`], [`ValidatedUpdate`], [`AccountId`]: Axum extractors
//!   that reject invalid input with 400
//!
//! ## Output Types
//! - [`ApiResponse<T>`]: Envelope for health and error bodies
//! - [`ApiError`]: Handler error type
//!
//! ## Submodules
//! - [`account`]: Account request types and extractors
//! - [`response`]: Response types and error codes

pub mod account;
pub mod response;

// Re-export commonly used types at module root
pub use account::{
    AccountId, CreateAccountRequest, UpdateAccountRequest, ValidatedCreate, ValidatedUpdate,
};
pub use response::{ApiError, ApiResponse, error_codes};
