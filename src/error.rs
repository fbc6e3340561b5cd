use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("missing build-time configuration value {0}")]
    Missing(&'static str),
}

/// Failure of one relay request. The UI never shows these apart; they only
/// make the log line specific.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RelayError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode relay request: {0}")]
    Encode(String),
    #[error("relay request failed: {0}")]
    Network(String),
    #[error("relay rejected template {template}: {status} {body}")]
    Rejected {
        template: String,
        status: u16,
        body: String,
    },
}
