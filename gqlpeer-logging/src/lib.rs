//! Diagnostic logging infrastructure for gqlpeer
//!
//! Components receive a [`DiagnosticLogger`] instead of reaching for a
//! process-wide logger. The default implementation forwards to `tracing`;
//! [`MemoryLogger`] captures events for inspection.

pub mod context;
pub mod event;
pub mod init;
pub mod logger;

// Re-export main types for convenience
pub use context::LogContext;
pub use event::LogEvent;
pub use gqlpeer_config::LogLevel;
pub use init::{init_logging_from_config, init_simple_tracing};
pub use logger::{DiagnosticLogger, MemoryLogger, NoopLogger, TracingLogger};
