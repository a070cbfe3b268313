//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:5000/docs`
//! - OpenAPI JSON: `http://localhost:5000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::account::Account;
use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{CreateAccountRequest, UpdateAccountRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "IE Bank API",
        version = "1.0.0",
        description = "Bank account management: create, list, read, update and delete accounts.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::home,
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::account::list_accounts,
        crate::gateway::handlers::account::create_account,
        crate::gateway::handlers::account::get_account,
        crate::gateway::handlers::account::update_account,
        crate::gateway::handlers::account::delete_account,
    ),
    components(
        schemas(
            Account,
            CreateAccountRequest,
            UpdateAccountRequest,
            HealthResponse,
        )
    ),
    tags(
        (name = "Accounts", description = "Bank account CRUD"),
        (name = "System", description = "Home page and health checks")
    )
)]
pub struct ApiDoc;
