//! Static preview HTTP server for dox.
//!
//! Serves the generated site directory over HTTP for local preview. Every
//! response carries permissive CORS headers and a no-cache directive so the
//! browser always picks up a fresh build. A port that is already bound is
//! detected before serving and reported with guidance instead of a panic.

mod headers;

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Preview server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Site root directory served as static files.
    pub site_dir: PathBuf,
}

/// Error returned when the server fails to start or serve.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// The requested port is already bound by another process.
    #[error(
        "Port {0} is already in use (is another preview server running?). Stop it or pass a different --port."
    )]
    AddrInUse(u16),
    /// Host/port did not form a valid socket address.
    #[error("Invalid listen address: {0}")]
    Addr(#[from] std::net::AddrParseError),
    /// I/O error binding or serving.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the router serving static files with preview headers.
fn create_app(site_dir: &Path) -> Router {
    Router::new()
        .fallback_service(ServeDir::new(site_dir))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(headers::cors_origin_layer())
                .layer(headers::cors_methods_layer())
                .layer(headers::no_cache_layer()),
        )
}

/// Run the preview server until interrupted.
///
/// # Errors
///
/// Returns [`ServeError::AddrInUse`] when the port is already bound, or an
/// I/O error if binding or serving fails.
pub async fn run_server(config: ServerConfig) -> Result<(), ServeError> {
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    let app = create_app(&config.site_dir);

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            return Err(ServeError::AddrInUse(config.port));
        }
        Err(e) => return Err(ServeError::Io(e)),
    };

    tracing::info!(address = %addr, root = %config.site_dir.display(), "Serving static site");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}
