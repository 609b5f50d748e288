//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse the configured bind address
//! - Bind the socket once, failing fast if the port is taken
//!
//! # Design Decisions
//! - No retry and no fallback port: a bind failure is a startup failure
//! - Nothing is left open on failure; the socket only exists once bound

use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// Bind address is not a socket address.
    #[error("invalid bind address {address:?}: {source}")]
    Address {
        address: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind to the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let addr: SocketAddr =
        config
            .bind_address
            .parse()
            .map_err(|source| ListenerError::Address {
                address: config.bind_address.clone(),
                source,
            })?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind {
            address: addr,
            source,
        })?;

    let local_addr = listener.local_addr().map_err(|source| ListenerError::Bind {
        address: addr,
        source,
    })?;

    tracing::info!(address = %local_addr, "Listener bound");
    Ok(listener)
}
