//! Diagnostic logger capability and its implementations

use crate::context::LogContext;
use crate::event::LogEvent;
use gqlpeer_config::LogLevel;
use std::sync::{Arc, Mutex};

/// Logging capability handed to components that emit diagnostics
pub trait DiagnosticLogger: Send + Sync {
    /// Record a single event
    fn log(&self, event: LogEvent);

    /// Record a debug-level message with structured context
    fn debug(&self, message: &str, context: &LogContext) {
        self.log(LogEvent::new(LogLevel::Debug, message).with_context(context.clone()));
    }
}

impl<L: DiagnosticLogger + ?Sized> DiagnosticLogger for Arc<L> {
    fn log(&self, event: LogEvent) {
        (**self).log(event)
    }
}

impl<L: DiagnosticLogger + ?Sized> DiagnosticLogger for &L {
    fn log(&self, event: LogEvent) {
        (**self).log(event)
    }
}

/// Forwards events to the `tracing` subscriber
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("gqlpeer")
    }
}

impl DiagnosticLogger for TracingLogger {
    fn log(&self, event: LogEvent) {
        let logger = self.name.as_str();
        let context = &event.context;
        match event.level {
            LogLevel::Error => tracing::error!(logger, %context, "{}", event.message),
            LogLevel::Warn => tracing::warn!(logger, %context, "{}", event.message),
            LogLevel::Info => tracing::info!(logger, %context, "{}", event.message),
            LogLevel::Debug => tracing::debug!(logger, %context, "{}", event.message),
            LogLevel::Trace => tracing::trace!(logger, %context, "{}", event.message),
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryLogger {
    events: Mutex<Vec<LogEvent>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<LogEvent> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DiagnosticLogger for MemoryLogger {
    fn log(&self, event: LogEvent) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DiagnosticLogger for NoopLogger {
    fn log(&self, _event: LogEvent) {}
}
