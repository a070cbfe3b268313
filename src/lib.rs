//! IE Bank API - bank account management backend
//!
//! An HTTP/JSON service exposing create/read/update/delete over bank accounts.
//!
//! # Modules
//!
//! - [`account`] - Account model, number generation, validation, storage
//! - [`gateway`] - Axum router, handlers and OpenAPI document
//! - [`db`] - PostgreSQL pool and schema bootstrap
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup

pub mod account;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use account::{Account, AccountError, AccountService, AccountStore, AccountUpdate, NewAccount};
pub use config::AppConfig;
pub use gateway::{app_router, state::AppState};
