//! Log event captured by a diagnostic logger

use crate::context::LogContext;
use gqlpeer_config::LogLevel;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: String,
    #[serde(skip_serializing_if = "LogContext::is_empty")]
    pub context: LogContext,
}

impl LogEvent {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            context: LogContext::new(),
        }
    }

    pub fn with_context(mut self, context: LogContext) -> Self {
        self.context = context;
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl serde::Serialize) -> Self {
        self.context = self.context.with_field(key, value);
        self
    }
}
