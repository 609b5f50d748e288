//! Response header augmentation.
//!
//! # Responsibilities
//! - Turn the configured header list into typed name/value pairs
//! - Wrap a router so every response carries those headers, whatever its
//!   status (files, listings, redirects, 404, 405, 500)
//!
//! # Design Decisions
//! - Composition, not inheritance: the static responder is unaware of the
//!   extra headers; they are added by response layers around it
//! - Override semantics: a configured header replaces any value the inner
//!   service produced, so each name appears exactly once
//! - Layers are applied at the Router level, so fallback services are covered

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::HeaderConfig;

/// Error building a [`HeaderSet`] from configuration.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    #[error("invalid header name {name:?}: {source}")]
    Name {
        name: String,
        #[source]
        source: axum::http::header::InvalidHeaderName,
    },

    #[error("invalid value for header {name:?}: {source}")]
    Value {
        name: String,
        #[source]
        source: axum::http::header::InvalidHeaderValue,
    },
}

/// Ordered, immutable set of headers added to every response.
#[derive(Debug, Clone, Default)]
pub struct HeaderSet {
    entries: Vec<(HeaderName, HeaderValue)>,
}

impl HeaderSet {
    /// Parse the configured headers, keeping their order.
    pub fn from_config(headers: &[HeaderConfig]) -> Result<Self, HeaderError> {
        let entries = headers
            .iter()
            .map(|h| -> Result<(HeaderName, HeaderValue), HeaderError> {
                let name = HeaderName::from_bytes(h.name.as_bytes()).map_err(|source| {
                    HeaderError::Name {
                        name: h.name.clone(),
                        source,
                    }
                })?;
                let value = HeaderValue::from_str(&h.value).map_err(|source| HeaderError::Value {
                    name: h.name.clone(),
                    source,
                })?;
                Ok((name, value))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&HeaderName, &HeaderValue)> {
        self.entries.iter().map(|(name, value)| (name, value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wrap `router` so every response it produces carries this header set.
    ///
    /// The first configured header is the innermost layer, so headers are
    /// inserted into the response map in configuration order.
    pub fn apply(&self, router: Router) -> Router {
        self.entries.iter().fold(router, |router, (name, value)| {
            router.layer(SetResponseHeaderLayer::overriding(
                name.clone(),
                value.clone(),
            ))
        })
    }
}
