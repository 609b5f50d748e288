//! Observability subsystem.
//!
//! Structured `tracing` events from startup and per-request spans from
//! `tower_http::trace::TraceLayer`, written to stdout.

pub mod logging;
