//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Validate config → Resolve root → Build server → Bind listener
//!
//! Shutdown:
//!     Process termination; there is no drain phase
//! ```

pub mod startup;

pub use startup::{prepare, Ready, StartupError};
