//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServerConfig::default() or config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ServerConfig (validated, immutable)
//!     → handed to the server constructor by value
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - The root directory is explicit configuration, never the process cwd

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    HeaderConfig, ListenerConfig, ObservabilityConfig, ServerConfig, StaticFilesConfig,
};
pub use validation::{validate_config, ValidationError};
