//! Serve command handler

use crate::config::Config;
use crate::error::Result;
use crate::server;

/// Run the HTTP server, applying CLI overrides to the configured bind
/// address.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    server::run(&config).await
}
