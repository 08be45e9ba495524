//! Server startup utilities.

use pricegate_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ____       _                       __
   / __ \_____(_)_______  ____ _____ _/ /____
  / /_/ / ___/ / ___/ _ \/ __ `/ __ `/ __/ _ \
 / ____/ /  / / /__/  __/ /_/ / /_/ / /_/  __/
/_/   /_/  /_/\___/\___/\__, /\__,_/\__/\___/
                       /____/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let port = config.server.port;
    info!("{}", separator);
    info!("REST API:  http://{}", config.server.rest_addr());
    info!("Health:    http://0.0.0.0:{}/health", port);
    if config.server.swagger_enabled {
        info!("API Docs:  http://0.0.0.0:{}/swagger-ui", port);
    }
    if config.redis.enabled {
        info!("Cache:     {} (ttl {}s)", config.redis.url, config.cache.ttl_secs);
    } else {
        info!("Cache:     disabled");
    }
    info!("Source:    simulated, {}ms latency", config.source.latency_ms);
    info!("{}", separator);
}
