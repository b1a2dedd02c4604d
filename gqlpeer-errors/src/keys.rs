//! Classification keys carried by service errors

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const CLIENT_ERROR: &str = "CLIENT_ERROR";
pub const SERVER_ERROR: &str = "SERVER_ERROR";
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Classification tag of a [`crate::ServiceError`]
///
/// The four well-known kinds have dedicated variants. Any other key, either
/// assigned by the application or taken from `extensions.code`, is kept
/// verbatim in [`ServiceErrorKey::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ServiceErrorKey {
    /// Transport failed without a parseable response
    NetworkError,
    /// Unparseable response, client-side validation failure, or an unkeyed
    /// top-level protocol error
    ClientError,
    /// Nested protocol error without an explicit classification
    ServerError,
    /// Nothing classifiable was found
    UnknownError,
    Other(String),
}

impl ServiceErrorKey {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceErrorKey::NetworkError => NETWORK_ERROR,
            ServiceErrorKey::ClientError => CLIENT_ERROR,
            ServiceErrorKey::ServerError => SERVER_ERROR,
            ServiceErrorKey::UnknownError => UNKNOWN_ERROR,
            ServiceErrorKey::Other(key) => key,
        }
    }

    /// Whether this is one of the four built-in kinds
    pub fn is_well_known(&self) -> bool {
        !matches!(self, ServiceErrorKey::Other(_))
    }
}

impl From<&str> for ServiceErrorKey {
    fn from(key: &str) -> Self {
        match key {
            NETWORK_ERROR => ServiceErrorKey::NetworkError,
            CLIENT_ERROR => ServiceErrorKey::ClientError,
            SERVER_ERROR => ServiceErrorKey::ServerError,
            UNKNOWN_ERROR => ServiceErrorKey::UnknownError,
            other => ServiceErrorKey::Other(other.to_string()),
        }
    }
}

impl From<String> for ServiceErrorKey {
    fn from(key: String) -> Self {
        match key.as_str() {
            NETWORK_ERROR | CLIENT_ERROR | SERVER_ERROR | UNKNOWN_ERROR => {
                ServiceErrorKey::from(key.as_str())
            }
            _ => ServiceErrorKey::Other(key),
        }
    }
}

impl PartialEq<str> for ServiceErrorKey {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for ServiceErrorKey {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for ServiceErrorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ServiceErrorKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceErrorKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(ServiceErrorKey::from)
    }
}
