//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the server.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Port the server listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 3000;

/// Root configuration for the static server.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Directory whose contents are served.
    pub root_dir: PathBuf,

    /// Headers set on every response, in order.
    pub headers: Vec<HeaderConfig>,

    /// Static file behaviour.
    pub static_files: StaticFilesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            root_dir: PathBuf::from("."),
            headers: default_headers(),
            static_files: StaticFilesConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_PORT}"),
        }
    }
}

/// A single response header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HeaderConfig {
    pub name: String,
    pub value: String,
}

impl HeaderConfig {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Cross-origin isolation (needed for `SharedArrayBuffer`) plus open CORS.
///
/// The wildcard origin next to COOP/COEP only makes sense for local
/// development; do not reuse this set on an internet-facing host.
pub fn default_headers() -> Vec<HeaderConfig> {
    vec![
        HeaderConfig::new("Cross-Origin-Opener-Policy", "same-origin"),
        HeaderConfig::new("Cross-Origin-Embedder-Policy", "require-corp"),
        HeaderConfig::new("Access-Control-Allow-Origin", "*"),
        HeaderConfig::new("Access-Control-Allow-Methods", "GET, POST, OPTIONS"),
        HeaderConfig::new("Access-Control-Allow-Headers", "Content-Type"),
    ]
}

/// Static file serving configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Render an HTML index for directories that have no `index.html`.
    pub directory_listing: bool,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            directory_listing: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
