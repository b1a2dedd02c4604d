//! Operation result shapes produced by a GraphQL client
//!
//! Field names follow the client's wire format. Fields this crate does not
//! interpret are kept in `extra` so an error re-serializes to the object it
//! was read from.

use crate::error::PeerError;
use crate::predicates::is_composite_error;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::borrow::Cow;

/// Server-assigned metadata of a protocol error
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorExtensions {
    /// Usually a string, but servers are free to put any JSON value here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<JsonValue>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// Error listed inside a GraphQL response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProtocolError {
    #[serde(default)]
    pub message: String,

    /// Application-assigned classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<ErrorExtensions>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ProtocolError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.extensions.get_or_insert_with(Default::default).code =
            Some(JsonValue::String(code.into()));
        self
    }

    /// `key`, unless absent or empty
    pub fn explicit_key(&self) -> Option<&str> {
        non_empty(self.key.as_deref())
    }

    /// `extensions.code`, unless absent, null or empty
    ///
    /// Non-string codes are rendered as their JSON text.
    pub fn extension_code(&self) -> Option<Cow<'_, str>> {
        let code = match self.extensions.as_ref()?.code.as_ref()? {
            JsonValue::Null => return None,
            JsonValue::String(code) => Cow::Borrowed(code.as_str()),
            other => Cow::Owned(other.to_string()),
        };
        Some(code).filter(|code| !code.is_empty())
    }
}

/// Client-side error raised before the request was sent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    #[serde(default)]
    pub message: String,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            extra: Map::new(),
        }
    }
}

/// Parsed body attached to a server fault
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaultBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ProtocolError>>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl FaultBody {
    pub fn with_errors(errors: Vec<ProtocolError>) -> Self {
        Self {
            errors: Some(errors),
            extra: Map::new(),
        }
    }
}

/// Body attached to a server fault: parsed, or kept as sent
///
/// A body that is not an error object (an HTML page read as a string, an
/// object with a malformed `errors` list) is kept raw and contributes no
/// nested errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaultResult {
    Body(FaultBody),
    Raw(JsonValue),
}

/// Failure while obtaining or parsing the HTTP response
///
/// The kind is structural: a `statusCode` field marks a parse failure, a
/// `result` marks a server fault, and neither marks a plain transport
/// failure (DNS, refused connection, timeout). Both may be present at once.
/// `statusCode` counts by presence, so `"statusCode": null` is
/// `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransportError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(
        rename = "statusCode",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<Option<u16>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<FaultResult>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl TransportError {
    /// Plain transport failure
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Response body could not be parsed
    pub fn parse_failure(status_code: u16) -> Self {
        Self {
            status_code: Some(Some(status_code)),
            ..Default::default()
        }
    }

    /// Server answered with an error body
    pub fn server_fault(result: FaultBody) -> Self {
        Self {
            result: Some(FaultResult::Body(result)),
            ..Default::default()
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(Some(status_code));
        self
    }

    pub fn with_result(mut self, result: FaultBody) -> Self {
        self.result = Some(FaultResult::Body(result));
        self
    }

    pub fn with_raw_result(mut self, result: JsonValue) -> Self {
        self.result = Some(FaultResult::Raw(result));
        self
    }

    /// HTTP status, when one was reported
    pub fn status(&self) -> Option<u16> {
        self.status_code.flatten()
    }

    /// Protocol errors nested in the fault body
    pub fn fault_errors(&self) -> &[ProtocolError] {
        match &self.result {
            Some(FaultResult::Body(body)) => body.errors.as_deref().unwrap_or_default(),
            _ => &[],
        }
    }
}

/// Response that reached the server, possibly listing errors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SuccessEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ProtocolError>>,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl SuccessEnvelope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_errors(errors: Vec<ProtocolError>) -> Self {
        Self {
            errors: Some(errors),
            ..Default::default()
        }
    }

    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }
}

/// Aggregate error thrown by the client for one failed operation attempt
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositeError {
    #[serde(rename = "networkError", default)]
    pub network_error: Option<TransportError>,

    #[serde(
        rename = "graphQLErrors",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub graphql_errors: Vec<ProtocolError>,

    #[serde(rename = "clientErrors", default, deserialize_with = "null_as_empty")]
    pub client_errors: Vec<ValidationError>,

    #[serde(default)]
    pub message: String,

    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl CompositeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_network_error(mut self, error: TransportError) -> Self {
        self.network_error = Some(error);
        self
    }

    pub fn with_graphql_error(mut self, error: ProtocolError) -> Self {
        self.graphql_errors.push(error);
        self
    }

    pub fn with_client_error(mut self, error: ValidationError) -> Self {
        self.client_errors.push(error);
        self
    }
}

/// Outcome of a completed operation attempt
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationResult {
    Composite(CompositeError),
    Envelope(SuccessEnvelope),
}

impl OperationResult {
    /// Decode a raw payload, telling the two shapes apart by their fields
    pub fn from_value(value: JsonValue) -> Result<Self, PeerError> {
        let kind = json_kind(&value);
        if !value.is_object() {
            return Err(PeerError::UnexpectedShape(kind));
        }

        if is_composite_error(&value) {
            Ok(OperationResult::Composite(serde_json::from_value(value)?))
        } else {
            Ok(OperationResult::Envelope(serde_json::from_value(value)?))
        }
    }

    pub fn from_json_str(payload: &str) -> Result<Self, PeerError> {
        let value: JsonValue = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    pub fn is_composite_error(&self) -> bool {
        matches!(self, OperationResult::Composite(_))
    }
}

impl<'de> Deserialize<'de> for OperationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        OperationResult::from_value(value).map_err(serde::de::Error::custom)
    }
}

impl From<CompositeError> for OperationResult {
    fn from(error: CompositeError) -> Self {
        OperationResult::Composite(error)
    }
}

impl From<SuccessEnvelope> for OperationResult {
    fn from(envelope: SuccessEnvelope) -> Self {
        OperationResult::Envelope(envelope)
    }
}

/// Caller context passed through to diagnostics, never inspected
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationOptions {
    #[serde(rename = "operationName", default, skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,

    #[serde(flatten)]
    pub context: Map<String, JsonValue>,
}

impl OperationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn with_context_value(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.context.insert(key.into(), value);
        self
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
