use thiserror::Error;

use crate::browser::DriverError;
use crate::capability::CapabilityError;

/// Crate-wide error type for page objects, sessions and commands.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Driver(#[from] DriverError),

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("element '{selector}' missing: {context}")]
    ElementMissing { selector: String, context: String },

    #[error("device model has not been detected for this session")]
    NotDetected,

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl ConsoleError {
    pub fn missing(selector: &str, context: &str) -> Self {
        ConsoleError::ElementMissing {
            selector: selector.to_string(),
            context: context.to_string(),
        }
    }
}
