//! Account handlers (list, create, get, update, delete)

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::account::Account;

use super::super::state::AppState;
use super::super::types::{AccountId, ApiError, ValidatedCreate, ValidatedUpdate};

/// List all accounts
///
/// GET /accounts
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "All accounts, ordered by id", body = Vec<Account>),
        (status = 500, description = "Internal error")
    ),
    tag = "Accounts"
)]
pub async fn list_accounts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Account>>, ApiError> {
    let accounts = state.accounts.list().await?;
    tracing::debug!("Listing {} accounts", accounts.len());
    Ok(Json(accounts))
}

/// Open a new account
///
/// POST /accounts
///
/// The account number is generated, balance starts at 0 and status at "Active".
#[utoipa::path(
    post,
    path = "/accounts",
    request_body = crate::gateway::types::CreateAccountRequest,
    responses(
        (status = 200, description = "Account created", body = Account),
        (status = 400, description = "Missing or invalid field"),
        (status = 500, description = "Internal error")
    ),
    tag = "Accounts"
)]
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    ValidatedCreate(account): ValidatedCreate,
) -> Result<Json<Account>, ApiError> {
    let created = state.accounts.create(account).await?;
    Ok(Json(created))
}

/// Get an account by id
///
/// GET /accounts/{id}
#[utoipa::path(
    get,
    path = "/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account details", body = Account),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.accounts.get(id).await?))
}

/// Update name, currency and/or country
///
/// PUT /accounts/{id}
///
/// Fields missing from the body keep their stored value.
#[utoipa::path(
    put,
    path = "/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    request_body = crate::gateway::types::UpdateAccountRequest,
    responses(
        (status = 200, description = "Updated account", body = Account),
        (status = 400, description = "Invalid id or field"),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn update_account(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
    ValidatedUpdate(update): ValidatedUpdate,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.accounts.update(id, &update).await?))
}

/// Delete an account
///
/// DELETE /accounts/{id}
///
/// Returns the account as it was before deletion.
#[utoipa::path(
    delete,
    path = "/accounts/{id}",
    params(
        ("id" = i64, Path, description = "Account ID")
    ),
    responses(
        (status = 200, description = "Account deleted", body = Account),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Account not found")
    ),
    tag = "Accounts"
)]
pub async fn delete_account(
    State(state): State<Arc<AppState>>,
    AccountId(id): AccountId,
) -> Result<Json<Account>, ApiError> {
    Ok(Json(state.accounts.delete(id).await?))
}
