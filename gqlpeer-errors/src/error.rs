//! Errors raised while reading raw operation results

/// Error type for decoding an operation result payload
#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    #[error("Invalid operation result payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Unexpected operation result shape: expected a JSON object, found {0}")]
    UnexpectedShape(&'static str),
}
