//! Static file responder.
//!
//! # Data Flow
//! ```text
//! Request
//!     → ServeDir (path resolution, MIME type, conditional/range, index.html)
//!     → on miss: listing.rs (HTML index for directories, otherwise 404)
//! ```
//!
//! # Design Decisions
//! - File serving is delegated to `tower_http::services::ServeDir`
//! - Traversal protection is whatever `ServeDir` and the listing resolver
//!   already apply; nothing is layered on top
//! - Knows nothing about the extra response headers (see `http::headers`)

pub mod listing;

use std::path::Path;

use axum::handler::Handler;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::StaticFilesConfig;
use self::listing::{list_directory, ListingState};

/// Build a router that serves `root` for every path.
pub fn router(root: &Path, config: &StaticFilesConfig) -> Router {
    let serve_dir = ServeDir::new(root).append_index_html_on_directories(true);

    if config.directory_listing {
        let listing = list_directory.with_state(ListingState::new(root));
        Router::new().fallback_service(serve_dir.fallback(listing))
    } else {
        Router::new().fallback_service(serve_dir)
    }
}
