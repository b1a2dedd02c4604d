//! Error translator configuration

use crate::error::ConfigResult;
use crate::validation::{validate_required_string, Validatable};
use serde::{Deserialize, Serialize};

/// Configuration for the GraphQL error response translator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Attach the raw response and options to the diagnostic record
    #[serde(default = "crate::domains::default_true")]
    pub log_payloads: bool,

    /// Name reported by the diagnostic logger
    #[serde(default = "default_logger_name")]
    pub logger_name: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            log_payloads: true,
            logger_name: default_logger_name(),
        }
    }
}

impl Validatable for TranslatorConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_required_string(&self.logger_name, "logger_name", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "translator"
    }
}

fn default_logger_name() -> String {
    "gqlpeer.translator".to_string()
}
