//! Home page, health check and fallback handlers

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode, http::Uri};
use utoipa::ToSchema;

use super::super::state::AppState;
use super::super::types::{ApiError, ApiResponse};

/// Crate version plus the git revision it was built from
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("GIT_HASH"));

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    #[schema(example = 1703494800000_u64)]
    pub timestamp_ms: u64,
    #[schema(example = "0.1.0+1a2b3c4")]
    pub version: String,
}

/// Home page
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "System"
)]
pub async fn home() -> &'static str {
    "Hello, World!"
}

/// Health check endpoint
///
/// Pings the account store. Store errors are logged, not exposed.
///
/// - Healthy: 200 OK + {code: 0, data: {timestamp_ms, version}}
/// - Unhealthy: 503 Service Unavailable + {code: 5001, msg: "unavailable"}
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<ApiResponse<HealthResponse>>), ApiError> {
    let timestamp_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    if let Err(e) = state.accounts.health_check().await {
        tracing::error!("[HEALTH] Account store ping failed: {}", e);
        return Err(ApiError::service_unavailable("unavailable"));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success(HealthResponse {
            timestamp_ms,
            version: VERSION.to_string(),
        })),
    ))
}

/// Fallback for unregistered paths
pub async fn route_not_found(uri: Uri) -> ApiError {
    tracing::debug!("No route for {}", uri.path());
    ApiError::route_not_found(uri.path())
}
