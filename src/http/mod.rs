//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request tracing)
//!     → files (static responder: ServeDir + directory listing)
//!     → headers.rs (add the configured header set)
//!     → Send to client
//! ```

pub mod headers;
pub mod server;

pub use headers::{HeaderError, HeaderSet};
pub use server::HttpServer;
