pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{Next, from_fn},
    response::Response,
    routing::get,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::account::{AccountStore, MemoryAccountStore, PgAccountRepository};
use crate::config::AppConfig;
use crate::db::{Database, init_schema};
use state::AppState;

/// Axum middleware: one log line per request
async fn log_requests(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "request"
    );
    response
}

/// Build the application router over the given state
pub fn app_router(state: Arc<AppState>) -> Router {
    let account_routes = Router::new()
        .route(
            "/accounts",
            get(handlers::list_accounts).post(handlers::create_account),
        )
        .route(
            "/accounts/{id}",
            get(handlers::get_account)
                .put(handlers::update_account)
                .delete(handlers::delete_account),
        );

    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health_check))
        .merge(account_routes)
        .fallback(handlers::route_not_found)
        .with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(from_fn(log_requests))
}

/// Pick the account store: PostgreSQL when configured, memory otherwise
pub async fn build_store(
    config: &AppConfig,
    force_memory: bool,
) -> anyhow::Result<Arc<dyn AccountStore>> {
    match (&config.postgres_url, force_memory) {
        (Some(url), false) => {
            let db = Database::connect(url).await?;
            init_schema(db.pool()).await?;
            tracing::info!("Account store: PostgreSQL");
            Ok(Arc::new(PgAccountRepository::new(db.pool().clone())))
        }
        _ => {
            tracing::warn!("Account store: in-memory (data is lost on exit)");
            Ok(Arc::new(MemoryAccountStore::new()))
        }
    }
}

/// Start HTTP server and run until Ctrl-C
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = app_router(state);

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (is the port already in use?)",
            addr,
            e
        )
    })?;

    tracing::info!("🚀 IE Bank API listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutdown signal received");
        })
        .await?;
    Ok(())
}
