//! GraphQL client error translation
//!
//! A GraphQL-over-HTTP call fails in one of two shapes: a response envelope
//! that lists protocol errors, or a composite client error bundling a
//! transport failure, protocol errors and client-side validation errors.
//! This crate flattens either shape into an ordered, never-empty list of
//! [`ServiceError`]s so callers only deal with one error shape.

pub mod error;
pub mod keys;
pub mod model;
pub mod predicates;
pub mod service_error;
pub mod translator;

// Re-export commonly used types
pub use error::PeerError;
pub use keys::{ServiceErrorKey, CLIENT_ERROR, NETWORK_ERROR, SERVER_ERROR, UNKNOWN_ERROR};
pub use model::{
    CompositeError, ErrorExtensions, FaultBody, FaultResult, OperationOptions, OperationResult,
    ProtocolError, SuccessEnvelope, TransportError, ValidationError,
};
pub use predicates::{is_composite_error, is_server_error, is_server_parse_error};
pub use service_error::{ErrorData, ServiceError};
pub use translator::{
    default_error_response_translator, ErrorResponseTranslator, ErrorTranslator,
    TRANSLATE_LOG_MESSAGE, UNKNOWN_ERROR_MESSAGE,
};
