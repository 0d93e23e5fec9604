use thiserror::Error;

/// Client-side operation errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// Request could not be sent or its body could not be read
    #[error("Network error: {message}")]
    Network { message: String },

    /// Body was readable but is not the expected JSON shape
    #[error("Invalid response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Configured base URL and path do not form a valid URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },
}

impl ClientError {
    pub(crate) fn network(context: &str, err: impl std::fmt::Display) -> Self {
        ClientError::Network {
            message: format!("{}: {}", context, err),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
