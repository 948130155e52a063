//! Error types for configuration, validation and transport.

use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("could not determine app data directory")]
    DataDir,

    #[error("unknown environment: '{0}'")]
    UnknownEnvironment(String),
}

/// A form rule that rejected the input. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    MissingField(String),

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Name must be less than {max} characters.")]
    NameTooLong { max: usize },

    #[error("Message must be at least {min} characters long.")]
    MessageTooShort { min: usize },

    #[error("Message must be less than {max} characters.")]
    MessageTooLong { max: usize },
}

/// Transport-level failures: no usable response reached the client
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(e: reqwest::Error) -> Self {
        SubmitError::Transport(e.to_string())
    }
}
