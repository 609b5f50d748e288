//! isolated-serve
//!
//! Serves a directory over HTTP with cross-origin isolation and CORS headers.
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ listener ─▶ ServeDir ─▶ directory listing  │
//!                             │                  │            (on miss)      │
//!     Client Response         │                  ▼                           │
//!     ◀───────────────────────┼── trace ◀── header set (COOP/COEP/CORS)     │
//!                             └──────────────────────────────────────────────┘
//! ```

use isolated_serve::{lifecycle, observability, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::default();

    observability::logging::init(&config.observability);

    tracing::info!("isolated-serve v{} starting", env!("CARGO_PKG_VERSION"));

    let ready = match lifecycle::prepare(config).await {
        Ok(ready) => ready,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            return Err(e.into());
        }
    };

    let port = ready.local_addr()?.port();
    tracing::info!("Server running at http://127.0.0.1:{port}");
    tracing::info!("Open http://127.0.0.1:{port}/index.html in your browser");

    ready.run().await?;

    Ok(())
}
