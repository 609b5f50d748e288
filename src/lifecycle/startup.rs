//! Startup orchestration.
//!
//! # Responsibilities
//! - Validate configuration
//! - Pin the root directory to an absolute path
//! - Build the HTTP server
//! - Bind the listener and hand back a server ready to accept traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Listener binds last, so a config error never leaves a socket open

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::loader::join_errors;
use crate::config::{validate_config, ServerConfig, ValidationError};
use crate::http::headers::HeaderError;
use crate::http::HttpServer;
use crate::net::{self, ListenerError};

/// Everything that can stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {}", join_errors(.0))]
    Config(Vec<ValidationError>),

    #[error("cannot resolve root directory: {0}")]
    Root(#[source] std::io::Error),

    #[error(transparent)]
    Headers(#[from] HeaderError),

    #[error(transparent)]
    Listener(#[from] ListenerError),
}

/// A bound server that has not started accepting yet.
pub struct Ready {
    server: HttpServer,
    listener: TcpListener,
}

impl Ready {
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub fn server(&self) -> &HttpServer {
        &self.server
    }

    /// Enter the accept loop.
    pub async fn run(self) -> Result<(), std::io::Error> {
        self.server.run(self.listener).await
    }
}

/// Validate `config`, build the server, then bind.
pub async fn prepare(mut config: ServerConfig) -> Result<Ready, StartupError> {
    validate_config(&config).map_err(StartupError::Config)?;

    config.root_dir = tokio::fs::canonicalize(&config.root_dir)
        .await
        .map_err(StartupError::Root)?;

    tracing::info!(
        root = %config.root_dir.display(),
        bind_address = %config.listener.bind_address,
        headers = config.headers.len(),
        directory_listing = config.static_files.directory_listing,
        "Configuration loaded"
    );

    let listener_config = config.listener.clone();
    let server = HttpServer::new(config)?;
    let listener = net::bind(&listener_config).await?;

    Ok(Ready { server, listener })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepares_with_absolute_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.root_dir = dir.path().join(".");

        let ready = prepare(config).await.unwrap();
        let root = &ready.server().config().root_dir;
        assert!(root.is_absolute());
        assert_eq!(root, &dir.path().canonicalize().unwrap());
        assert_ne!(ready.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn missing_root_fails_before_binding() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ServerConfig::default();
        config.listener.bind_address = "127.0.0.1:0".into();
        config.root_dir = dir.path().join("gone");

        let err = prepare(config).await.err().unwrap();
        assert!(matches!(err, StartupError::Config(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("root directory does not exist"));
    }
}
