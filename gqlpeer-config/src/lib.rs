//! Domain-driven configuration for gqlpeer
//!
//! Configuration is split by functional domain (logging, translator),
//! with validation, defaults, and environment variable overrides.

pub mod error;
pub mod loader;
pub mod validation;

// Domain-specific configuration modules
pub mod domains;

// Re-export main types
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;

// Re-export domain configurations
pub use domains::{
    logging::{LogFormat, LogLevel, LoggingConfig},
    translator::TranslatorConfig,
    PeerConfig,
};
