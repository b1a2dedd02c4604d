//! Normalized error record returned by the translator

use crate::keys::ServiceErrorKey;
use crate::model::{OperationResult, ProtocolError, TransportError, ValidationError};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// The object a [`ServiceError`] was produced from
///
/// Serializes as that object, untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorData {
    Transport(TransportError),
    Protocol(ProtocolError),
    Validation(ValidationError),
    /// Whole input, only used by the unknown-error fallback
    Operation(Box<OperationResult>),
    /// Raw payload that could not be decoded, only used by the fallback
    Raw(JsonValue),
}

impl ErrorData {
    pub fn as_transport(&self) -> Option<&TransportError> {
        match self {
            ErrorData::Transport(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_protocol(&self) -> Option<&ProtocolError> {
        match self {
            ErrorData::Protocol(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ErrorData::Validation(error) => Some(error),
            _ => None,
        }
    }

    pub fn as_operation(&self) -> Option<&OperationResult> {
        match self {
            ErrorData::Operation(result) => Some(result.as_ref()),
            _ => None,
        }
    }
}

/// Uniform error handed to presentation and recovery code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceError {
    pub key: ServiceErrorKey,
    pub message: String,
    pub data: ErrorData,
}

impl ServiceError {
    pub fn new(key: impl Into<ServiceErrorKey>, message: impl Into<String>, data: ErrorData) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
            data,
        }
    }

    pub fn is_network_error(&self) -> bool {
        self.key == ServiceErrorKey::NetworkError
    }

    pub fn is_client_error(&self) -> bool {
        self.key == ServiceErrorKey::ClientError
    }

    pub fn is_server_error(&self) -> bool {
        self.key == ServiceErrorKey::ServerError
    }

    pub fn is_unknown_error(&self) -> bool {
        self.key == ServiceErrorKey::UnknownError
    }
}
