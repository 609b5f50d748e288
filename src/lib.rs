//! Static file server for local development of cross-origin isolated pages.
//!
//! Every response carries COOP/COEP (so pages can use `SharedArrayBuffer`)
//! and permissive CORS headers.

pub mod config;
pub mod files;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::{prepare, StartupError};
