//! Structured fields attached to a log event

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use std::fmt;

/// Ordered set of JSON fields carried alongside a log message
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogContext {
    fields: Map<String, JsonValue>,
}

impl LogContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Values that fail to serialize are skipped.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.fields.insert(key.into(), json_value);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(&self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_field() {
        let context = LogContext::new()
            .with_field("operation", "GetUser")
            .with_field("attempt", 2);

        assert_eq!(context.len(), 2);
        assert_eq!(context.get("operation"), Some(&json!("GetUser")));
        assert_eq!(context.get("attempt"), Some(&json!(2)));
        assert!(context.get("missing").is_none());
    }

    #[test]
    fn test_display_renders_json() {
        let context = LogContext::new().with_field("code", "BAD_INPUT");
        assert_eq!(context.to_string(), r#"{"code":"BAD_INPUT"}"#);
        assert_eq!(LogContext::new().to_string(), "{}");
    }

    #[test]
    fn test_later_field_replaces_earlier() {
        let context = LogContext::new()
            .with_field("key", "first")
            .with_field("key", "second");
        assert_eq!(context.len(), 1);
        assert_eq!(context.get("key"), Some(&json!("second")));
    }
}
