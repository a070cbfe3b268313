//! Account request types and extractors
//!
//! - `CreateAccountRequest` / `UpdateAccountRequest`: JSON request bodies
//! - `ValidatedCreate` / `ValidatedUpdate`: extractors that reject bad bodies
//!   with 400 before the handler runs
//! - `AccountId`: path extractor; a non-integer id is an unknown route (404)

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::account::validation::{validate_new_account, validate_update};
use crate::account::{AccountError, AccountUpdate, NewAccount};

use super::response::ApiError;

// ============================================================================
// Request bodies
// ============================================================================

/// Create account request
///
/// Fields are optional at the serde layer so a missing field is reported by
/// name instead of as a generic JSON error.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAccountRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "€")]
    pub currency: Option<String>,
    #[schema(example = "France")]
    pub country: Option<String>,
}

/// Update account request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    #[schema(example = "John Smith")]
    pub name: Option<String>,
    pub currency: Option<String>,
    #[schema(example = "Canada")]
    pub country: Option<String>,
}

// ============================================================================
// Extractors
// ============================================================================

/// Validated create body, already turned into an unsaved account
#[derive(Debug)]
pub struct ValidatedCreate(pub NewAccount);

impl<S> FromRequest<S> for ValidatedCreate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<CreateAccountRequest> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        let account = validate_new_account(body.name, body.currency, body.country)
            .map_err(AccountError::from)?;

        Ok(ValidatedCreate(account))
    }
}

/// Validated partial update
#[derive(Debug)]
pub struct ValidatedUpdate(pub AccountUpdate);

impl<S> FromRequest<S> for ValidatedUpdate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<UpdateAccountRequest> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        let update = validate_update(body.name, body.currency, body.country)
            .map_err(AccountError::from)?;

        Ok(ValidatedUpdate(update))
    }
}

/// `{id}` path segment
///
/// A segment that is not an integer does not name an account route, so it is
/// answered like any other unknown path (404).
#[derive(Debug, Clone, Copy)]
pub struct AccountId(pub i64);

impl<S> FromRequestParts<S> for AccountId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::route_not_found(parts.uri.path()))?;
        Ok(AccountId(id))
    }
}
