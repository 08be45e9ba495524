//! # Pricegate Server
//!
//! Serves product prices over HTTP with a Redis cache in front of a slow
//! price source.

use pricegate_config::ConfigLoader;
use pricegate_core::{init_telemetry, shutdown_telemetry, PricegateError, PricegateResult};
use pricegate_rest::create_router;
use pricegate_server::{
    di::{build_module, create_cache_pool},
    startup::{print_banner, print_startup_info},
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed if startup failed early
        eprintln!("Application error: {}", e);
        error!("Application error: {}", e);
        shutdown_telemetry();
        std::process::exit(1);
    }
}

async fn run() -> PricegateResult<()> {
    // Load configuration
    let config_loader = ConfigLoader::from_default_location()?;
    let config = config_loader.get().await;

    init_telemetry(&config.observability.telemetry_config(&config.app.name))?;

    print_banner();
    info!("Starting Pricegate server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    // The pool handle is kept here so it can be closed after shutdown
    let cache_pool = create_cache_pool(&config)?;
    let module = build_module(&config, cache_pool.clone());

    let router = create_router(module.as_ref(), &config.server);

    let rest_addr = config.server.rest_addr();
    let listener = tokio::net::TcpListener::bind(&rest_addr)
        .await
        .map_err(|e| PricegateError::Internal(format!("Failed to bind REST: {}", e)))?;

    print_startup_info(&config);
    info!("Starting REST server on http://{}", rest_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PricegateError::Internal(format!("REST server error: {}", e)))?;

    if let Some(pool) = cache_pool {
        pool.close();
        info!("Redis connection pool closed");
    }

    shutdown_telemetry();
    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
