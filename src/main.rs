//! IE Bank API server
//!
//! ```text
//! iebank_api [--env dev] [--port 5000] [--memory]
//! ```
//!
//! `--env` selects `config/{env}.yaml`; `--memory` ignores `postgres_url` and
//! keeps accounts in process memory.

use std::sync::Arc;

use iebank_api::config::AppConfig;
use iebank_api::gateway::{self, state::AppState};

fn arg_value(names: &[&str]) -> Option<String> {
    let args: Vec<String> = std::env::args().collect();
    args.iter()
        .position(|a| names.contains(&a.as_str()))
        .and_then(|i| args.get(i + 1).cloned())
}

fn get_env() -> String {
    arg_value(&["--env", "-e"]).unwrap_or_else(|| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    arg_value(&["--port"]).and_then(|p| p.parse().ok())
}

fn use_memory_store() -> bool {
    std::env::args().any(|a| a == "--memory")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }
    let _log_guard = iebank_api::logging::init_logging(&app_config);

    tracing::info!("Starting IE Bank API in {} mode", env);

    let store = gateway::build_store(&app_config, use_memory_store()).await?;
    let state = Arc::new(AppState::new(store));

    gateway::run_server(&app_config.bind_addr(), state).await
}
