//! Hook documentation build.
//!
//! Loads every compiled-in plugin, documents the hook specifications they
//! declare and writes the reST reference page. Takes no arguments; settings
//! come from `config/*.toml` and `TASKHOOKS__*` environment variables.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use plugin_push::PushPlugin;
use taskhooks_core::config::{AppConfig, LoggingConfig};
use taskhooks_core::error::AppError;
use taskhooks_docs::build_docs;
use taskhooks_plugin::{Plugin, PluginSession};

fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "Hook documentation build failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("TASKHOOKS_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

/// Plugins linked into this build.
fn compiled_plugins() -> Vec<Arc<dyn Plugin>> {
    vec![Arc::new(PushPlugin::new())]
}

/// Open the plugin session and build the page; the session unloads on return.
fn run(config: &AppConfig) -> Result<(), AppError> {
    tracing::info!("Building hook documentation v{}", env!("CARGO_PKG_VERSION"));

    let session = PluginSession::open(compiled_plugins())?;
    let build = build_docs(&session, &config.docs)?;

    tracing::info!(
        hooks = build.hook_count,
        output = %build.output.display(),
        "Done"
    );
    Ok(())
}
