use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollyError {
    #[error("{message}")]
    InvalidParameter { field: String, message: String },

    #[error("Unauthorized: invalid or expired token")]
    Unauthorized,

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Response did not contain valid JSON data")]
    InvalidJson,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl PollyError {
    /// Errors derived from the server's response rather than from the caller
    /// or the transport.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            PollyError::Unauthorized
                | PollyError::NotFound { .. }
                | PollyError::Api { .. }
                | PollyError::InvalidJson
        )
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            PollyError::Unauthorized => Some(401),
            PollyError::NotFound { .. } => Some(404),
            PollyError::Api { status, .. } => Some(*status),
            PollyError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PollyError::InvalidParameter { .. } => {
                "Check the command arguments: ids must be positive integers and a token is required"
            }
            PollyError::Unauthorized => "Log in again and pass a fresh token via --token or POLLY_TOKEN",
            PollyError::NotFound { .. } => "Verify the poll id and option id exist on the server",
            PollyError::Api { status, .. } if *status >= 500 => {
                "The server reported an internal error; try again later"
            }
            PollyError::Api { .. } => "Inspect the server's error message and adjust the request",
            PollyError::InvalidJson => "Check that --base-url points at the Polly API",
            PollyError::Http(_) => "Check that the Polly API is running and reachable",
            PollyError::Io(_) => "Check the config file path and permissions",
            PollyError::Serialization(_) => "Report this as a bug",
            PollyError::ConfigError { .. } | PollyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line overrides"
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            PollyError::InvalidParameter { .. }
            | PollyError::ConfigError { .. }
            | PollyError::InvalidConfigValueError { .. } => 2,
            PollyError::Unauthorized => 3,
            PollyError::NotFound { .. } => 4,
            PollyError::Api { .. } | PollyError::InvalidJson => 5,
            PollyError::Http(_) => 6,
            PollyError::Io(_) | PollyError::Serialization(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PollyError>;
