//! Translation of operation results into service errors

use crate::keys::ServiceErrorKey;
use crate::model::{non_empty, CompositeError, OperationOptions, OperationResult, ProtocolError};
use crate::predicates::{is_server_error, is_server_parse_error};
use crate::service_error::{ErrorData, ServiceError};
use gqlpeer_config::TranslatorConfig;
use gqlpeer_logging::{DiagnosticLogger, LogContext, TracingLogger};
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Message of the diagnostic record emitted for every translation
pub const TRANSLATE_LOG_MESSAGE: &str = "TRANSLATE GRAPH_QL ERROR RESPONSE";

/// Message of the fallback entry when nothing could be classified
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// Policy turning an operation result into service errors
pub trait ErrorResponseTranslator: Send + Sync {
    /// Never fails and never returns an empty list
    fn translate(&self, result: &OperationResult, options: &OperationOptions) -> Vec<ServiceError>;
}

/// Default translation policy
///
/// Entries come out in the order they were encountered: the transport
/// error, then the protocol errors nested in its fault body, then the
/// top-level protocol errors, then client validation errors. When nothing
/// is found a single `UNKNOWN_ERROR` entry carrying the whole input is
/// returned.
#[derive(Debug, Clone)]
pub struct ErrorTranslator<L = TracingLogger> {
    logger: L,
    config: TranslatorConfig,
}

impl ErrorTranslator<TracingLogger> {
    pub fn new() -> Self {
        Self::from_config(TranslatorConfig::default())
    }

    /// Translator logging through `tracing` under the configured name
    pub fn from_config(config: TranslatorConfig) -> Self {
        Self {
            logger: TracingLogger::new(config.logger_name.clone()),
            config,
        }
    }
}

impl Default for ErrorTranslator<TracingLogger> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: DiagnosticLogger> ErrorTranslator<L> {
    pub fn with_logger(logger: L) -> Self {
        Self {
            logger,
            config: TranslatorConfig::default(),
        }
    }

    pub fn with_config(mut self, config: TranslatorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub fn translate(&self, result: &OperationResult, options: &OperationOptions) -> Vec<ServiceError> {
        self.log_translation(result, options, LogContext::new());

        let mut service_errors = Vec::new();
        match result {
            OperationResult::Composite(error) => collect_composite_errors(&mut service_errors, error),
            OperationResult::Envelope(envelope) => {
                for error in envelope.errors.iter().flatten() {
                    populate_protocol_error(&mut service_errors, error);
                }
            }
        }

        if service_errors.is_empty() {
            service_errors.push(unknown_error(ErrorData::Operation(Box::new(result.clone()))));
        }

        service_errors
    }

    /// Translate a raw JSON payload
    ///
    /// A payload that cannot be read as an operation result yields the
    /// unknown-error entry with the raw payload as its data.
    pub fn translate_value(&self, value: &JsonValue, options: &OperationOptions) -> Vec<ServiceError> {
        match OperationResult::from_value(value.clone()) {
            Ok(result) => self.translate(&result, options),
            Err(err) => {
                self.log_translation(
                    value,
                    options,
                    LogContext::new().with_field("decodeError", err.to_string()),
                );
                vec![unknown_error(ErrorData::Raw(value.clone()))]
            }
        }
    }

    fn log_translation(&self, response: &impl Serialize, options: &OperationOptions, extra: LogContext) {
        let mut context = LogContext::new();
        if self.config.log_payloads {
            context = context
                .with_field("response", response)
                .with_field("options", options);
        }
        for (key, value) in extra.fields() {
            context = context.with_field(key.clone(), value);
        }
        self.logger.debug(TRANSLATE_LOG_MESSAGE, &context);
    }
}

impl<L: DiagnosticLogger> ErrorResponseTranslator for ErrorTranslator<L> {
    fn translate(&self, result: &OperationResult, options: &OperationOptions) -> Vec<ServiceError> {
        ErrorTranslator::translate(self, result, options)
    }
}

/// Translate with the default policy, logging through `tracing`
pub fn default_error_response_translator(
    result: &OperationResult,
    options: &OperationOptions,
) -> Vec<ServiceError> {
    ErrorTranslator::new().translate(result, options)
}

fn collect_composite_errors(service_errors: &mut Vec<ServiceError>, error: &CompositeError) {
    if let Some(network_error) = &error.network_error {
        let key = if is_server_parse_error(network_error) {
            ServiceErrorKey::ClientError
        } else {
            ServiceErrorKey::NetworkError
        };
        let message = non_empty(network_error.message.as_deref()).unwrap_or(&error.message);
        service_errors.push(ServiceError::new(
            key,
            message,
            ErrorData::Transport(network_error.clone()),
        ));

        if is_server_error(network_error) {
            for nested in network_error.fault_errors() {
                populate_protocol_error(service_errors, nested);
            }
        }
    }

    // Top-level protocol errors do not fall back to extensions.code
    for graphql_error in &error.graphql_errors {
        let key = graphql_error
            .explicit_key()
            .map(ServiceErrorKey::from)
            .unwrap_or(ServiceErrorKey::ClientError);
        let message = non_empty(Some(graphql_error.message.as_str())).unwrap_or(&error.message);
        service_errors.push(ServiceError::new(
            key,
            message,
            ErrorData::Protocol(graphql_error.clone()),
        ));
    }

    for client_error in &error.client_errors {
        service_errors.push(ServiceError::new(
            ServiceErrorKey::ClientError,
            client_error.message.clone(),
            ErrorData::Validation(client_error.clone()),
        ));
    }
}

/// key: own key, then extensions.code, then SERVER_ERROR; message as is
fn populate_protocol_error(service_errors: &mut Vec<ServiceError>, error: &ProtocolError) {
    let key = match error.explicit_key() {
        Some(key) => ServiceErrorKey::from(key),
        None => error
            .extension_code()
            .map(|code| ServiceErrorKey::from(code.into_owned()))
            .unwrap_or(ServiceErrorKey::ServerError),
    };
    service_errors.push(ServiceError::new(
        key,
        error.message.clone(),
        ErrorData::Protocol(error.clone()),
    ));
}

fn unknown_error(data: ErrorData) -> ServiceError {
    ServiceError::new(ServiceErrorKey::UnknownError, UNKNOWN_ERROR_MESSAGE, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FaultBody, SuccessEnvelope, TransportError, ValidationError};
    use gqlpeer_logging::{MemoryLogger, NoopLogger};
    use serde_json::json;
    use std::sync::Arc;

    fn translator() -> ErrorTranslator<NoopLogger> {
        ErrorTranslator::with_logger(NoopLogger)
    }

    #[test]
    fn test_envelope_error_uses_extension_code() {
        let error = ProtocolError::new("bad input").with_code("BAD_INPUT");
        let result = SuccessEnvelope::with_errors(vec![error.clone()]).into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(
            errors,
            vec![ServiceError::new("BAD_INPUT", "bad input", ErrorData::Protocol(error))]
        );
    }

    #[test]
    fn test_envelope_error_prefers_own_key() {
        let error = ProtocolError::new("nope").with_key("FORBIDDEN").with_code("UNAUTHENTICATED");
        let result = SuccessEnvelope::with_errors(vec![error]).into();

        let errors = translator().translate(&result, &OperationOptions::new());
        assert_eq!(errors[0].key, "FORBIDDEN");
    }

    #[test]
    fn test_envelope_error_defaults_to_server_error() {
        let error = ProtocolError::new("").with_key("").with_code("");
        let result = SuccessEnvelope::with_errors(vec![error]).into();

        let errors = translator().translate(&result, &OperationOptions::new());
        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_server_error());
        // Shared rule keeps the message as is, even when empty
        assert_eq!(errors[0].message, "");
    }

    #[test]
    fn test_envelope_without_errors_falls_back_to_unknown() {
        let result: OperationResult = SuccessEnvelope::new().with_data(json!({ "user": null })).into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_unknown_error());
        assert_eq!(errors[0].message, UNKNOWN_ERROR_MESSAGE);
        assert_eq!(errors[0].data.as_operation(), Some(&result));
    }

    #[test]
    fn test_envelope_with_empty_error_list_falls_back_to_unknown() {
        let result = SuccessEnvelope::with_errors(Vec::new()).into();
        let errors = translator().translate(&result, &OperationOptions::new());
        assert!(errors[0].is_unknown_error());
    }

    #[test]
    fn test_parse_failure_uses_composite_message() {
        let network_error = TransportError::parse_failure(502);
        let result = CompositeError::new("Bad Gateway")
            .with_network_error(network_error.clone())
            .into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(
            errors,
            vec![ServiceError::new(
                ServiceErrorKey::ClientError,
                "Bad Gateway",
                ErrorData::Transport(network_error)
            )]
        );
    }

    #[test]
    fn test_plain_transport_error_keeps_own_message() {
        let result = CompositeError::new("Network error: connect ECONNREFUSED")
            .with_network_error(TransportError::new("connect ECONNREFUSED"))
            .into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_network_error());
        assert_eq!(errors[0].message, "connect ECONNREFUSED");
    }

    #[test]
    fn test_server_fault_expands_nested_errors() {
        let nested = ProtocolError::new("x");
        let network_error =
            TransportError::server_fault(FaultBody::with_errors(vec![nested.clone()]));
        let result = CompositeError::new("net fail")
            .with_network_error(network_error.clone())
            .into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(
            errors,
            vec![
                ServiceError::new(
                    ServiceErrorKey::NetworkError,
                    "net fail",
                    ErrorData::Transport(network_error)
                ),
                ServiceError::new(ServiceErrorKey::ServerError, "x", ErrorData::Protocol(nested)),
            ]
        );
    }

    #[test]
    fn test_nested_errors_consult_extension_code() {
        let network_error = TransportError::server_fault(FaultBody::with_errors(vec![
            ProtocolError::new("expired").with_code("UNAUTHENTICATED"),
        ]))
        .with_status_code(401);
        let result = CompositeError::new("Response not successful")
            .with_network_error(network_error)
            .into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(errors.len(), 2);
        // statusCode present: keyed as a client error
        assert!(errors[0].is_client_error());
        assert_eq!(errors[1].key, "UNAUTHENTICATED");
        assert_eq!(errors[1].message, "expired");
    }

    #[test]
    fn test_top_level_protocol_error_ignores_extension_code() {
        let error = ProtocolError::new("denied").with_code("FORBIDDEN");
        let result = CompositeError::new("denied").with_graphql_error(error).into();

        let errors = translator().translate(&result, &OperationOptions::new());
        assert!(errors[0].is_client_error());
    }

    #[test]
    fn test_empty_key_and_message_fall_back() {
        let error = ProtocolError::new("").with_key("");
        let result = CompositeError::new("fallback msg")
            .with_graphql_error(error.clone())
            .into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(
            errors,
            vec![ServiceError::new(
                ServiceErrorKey::ClientError,
                "fallback msg",
                ErrorData::Protocol(error)
            )]
        );
    }

    #[test]
    fn test_client_errors_are_client_errors() {
        let validation = ValidationError::new("Variable $id of required type ID! was not provided");
        let result = CompositeError::new("").with_client_error(validation.clone()).into();

        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(
            errors,
            vec![ServiceError::new(
                ServiceErrorKey::ClientError,
                validation.message.clone(),
                ErrorData::Validation(validation)
            )]
        );
    }

    #[test]
    fn test_empty_composite_falls_back_to_unknown() {
        let result: OperationResult = CompositeError::new("nothing here").into();
        let errors = translator().translate(&result, &OperationOptions::new());

        assert_eq!(errors.len(), 1);
        assert!(errors[0].is_unknown_error());
        assert_eq!(errors[0].data.as_operation(), Some(&result));
    }

    #[test]
    fn test_one_debug_record_per_call() {
        let logger = Arc::new(MemoryLogger::new());
        let translator = ErrorTranslator::with_logger(logger.clone());
        let options = OperationOptions::new().with_operation_name("GetUser");
        let result = CompositeError::new("boom").into();

        translator.translate(&result, &options);

        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].level, gqlpeer_logging::LogLevel::Debug);
        assert_eq!(events[0].message, TRANSLATE_LOG_MESSAGE);
        assert_eq!(events[0].context.get("options"), Some(&json!({ "operationName": "GetUser" })));
        assert_eq!(
            events[0].context.get("response"),
            Some(&json!({
                "networkError": null,
                "graphQLErrors": [],
                "clientErrors": [],
                "message": "boom"
            }))
        );
    }

    #[test]
    fn test_payload_logging_can_be_disabled() {
        let logger = Arc::new(MemoryLogger::new());
        let translator = ErrorTranslator::with_logger(logger.clone()).with_config(TranslatorConfig {
            log_payloads: false,
            ..Default::default()
        });

        translator.translate(&SuccessEnvelope::new().into(), &OperationOptions::new());

        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert!(events[0].context.is_empty());
    }

    #[test]
    fn test_translate_value_decodes_payload() {
        let errors = translator().translate_value(
            &json!({ "errors": [{ "message": "bad input", "extensions": { "code": "BAD_INPUT" } }] }),
            &OperationOptions::new(),
        );

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].key, "BAD_INPUT");
    }

    #[test]
    fn test_translate_value_undecodable_payload() {
        let logger = Arc::new(MemoryLogger::new());
        let translator = ErrorTranslator::with_logger(logger.clone());
        let raw = json!({ "errors": "not a list" });

        let errors = translator.translate_value(&raw, &OperationOptions::new());

        assert_eq!(errors, vec![ServiceError::new(
            ServiceErrorKey::UnknownError,
            UNKNOWN_ERROR_MESSAGE,
            ErrorData::Raw(raw.clone())
        )]);

        let events = logger.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].context.get("response"), Some(&raw));
        assert!(events[0].context.get("decodeError").is_some());
    }

    #[test]
    fn test_trait_object_dispatch() {
        let translator: Box<dyn ErrorResponseTranslator> = Box::new(translator());
        let errors = translator.translate(
            &CompositeError::new("offline")
                .with_network_error(TransportError::default())
                .into(),
            &OperationOptions::new(),
        );

        assert!(errors[0].is_network_error());
        assert_eq!(errors[0].message, "offline");
    }
}
