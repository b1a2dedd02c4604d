//! Structural shape tests
//!
//! Shapes are recognised by the fields they carry rather than by a type
//! tag, because the same shape can come from several producers.

use crate::model::TransportError;
use serde_json::Value as JsonValue;

/// Fields that must all be present on a composite client error
pub const COMPOSITE_ERROR_FIELDS: [&str; 4] =
    ["networkError", "clientErrors", "graphQLErrors", "message"];

/// A raw payload is a composite error when it carries every composite field
pub fn is_composite_error(value: &JsonValue) -> bool {
    value.as_object().is_some_and(|object| {
        COMPOSITE_ERROR_FIELDS
            .iter()
            .all(|field| object.contains_key(*field))
    })
}

/// The server answered with an error body (`result` present)
pub fn is_server_error(error: &TransportError) -> bool {
    error.result.is_some()
}

/// The response body could not be parsed (`statusCode` present, even as null)
pub fn is_server_parse_error(error: &TransportError) -> bool {
    error.status_code.is_some()
}
