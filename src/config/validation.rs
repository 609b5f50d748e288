//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the root directory exists and is a directory
//! - Check the bind address parses as a socket address
//! - Check every configured header is a legal name/value pair, without duplicates
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure apart from reading root metadata:
//!   ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before any socket is bound

use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;

use axum::http::{HeaderName, HeaderValue};

use crate::config::schema::ServerConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("root directory does not exist: {}", .0.display())]
    RootMissing(PathBuf),

    #[error("root path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("invalid bind address {address:?}: {reason}")]
    InvalidBindAddress { address: String, reason: String },

    #[error("invalid header name {0:?}")]
    InvalidHeaderName(String),

    #[error("invalid value for header {name:?}")]
    InvalidHeaderValue { name: String },

    #[error("header {0:?} configured more than once")]
    DuplicateHeader(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match std::fs::metadata(&config.root_dir) {
        Ok(meta) if !meta.is_dir() => {
            errors.push(ValidationError::RootNotDirectory(config.root_dir.clone()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::RootMissing(config.root_dir.clone())),
    }

    if let Err(e) = config.listener.bind_address.parse::<SocketAddr>() {
        errors.push(ValidationError::InvalidBindAddress {
            address: config.listener.bind_address.clone(),
            reason: e.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for header in &config.headers {
        let Ok(name) = HeaderName::from_bytes(header.name.as_bytes()) else {
            errors.push(ValidationError::InvalidHeaderName(header.name.clone()));
            continue;
        };
        if HeaderValue::from_str(&header.value).is_err() {
            errors.push(ValidationError::InvalidHeaderValue {
                name: header.name.clone(),
            });
        }
        if !seen.insert(name) {
            errors.push(ValidationError::DuplicateHeader(header.name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
