//! HTTP handlers
//!
//! - [`account`]: account CRUD
//! - [`health`]: home page, health check, unknown routes

pub mod account;
pub mod health;

pub use account::{create_account, delete_account, get_account, list_accounts, update_account};
pub use health::{HealthResponse, health_check, home, route_not_found};
