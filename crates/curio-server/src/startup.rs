//! Server startup utilities.

use tracing::info;

/// Prints server startup information.
pub fn print_startup_info(rest_port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://0.0.0.0:{}", rest_port);
    info!("Health:    http://0.0.0.0:{}/health", rest_port);
    info!("API Docs:  http://0.0.0.0:{}/swagger-ui", rest_port);
    info!("{}", separator);
}
