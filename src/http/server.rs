//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum Router around the static file responder
//! - Wire up middleware (header augmentation, request tracing)
//! - Run the accept loop on a bound listener

use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::files;
use crate::http::headers::{HeaderError, HeaderSet};

/// HTTP server for the static file tree.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The root directory is taken from `config` as-is; the process working
    /// directory is never consulted or changed.
    pub fn new(config: ServerConfig) -> Result<Self, HeaderError> {
        let headers = HeaderSet::from_config(&config.headers)?;
        let router = Self::build_router(&config, &headers);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServerConfig, headers: &HeaderSet) -> Router {
        let router = files::router(&config.root_dir, &config.static_files);
        headers
            .apply(router)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until the
    /// process is terminated.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            root = %self.config.root_dir.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router).await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
