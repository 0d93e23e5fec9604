use thiserror::Error;

use crate::services::client::ClientError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid navigation list: {message}")]
    InvalidRouterLinks { message: String },

    #[error("Navigation list must contain at least one route")]
    EmptyRouterLinks,

    #[error("Invalid API base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

/// Failures of a login form operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoginError {
    #[error("Login form is incomplete or invalid")]
    InvalidForm,

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoginError {
    /// Text shown in the outcome area of the form
    pub fn user_message(&self) -> String {
        match self {
            LoginError::InvalidForm => "Please fix the highlighted fields".to_string(),
            LoginError::Client(e) => format!("Error: {}", e),
            LoginError::Config(e) => format!("Error: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_prefixed_for_display() {
        let error = LoginError::from(ClientError::Network {
            message: "connection refused".to_string(),
        });
        assert_eq!(error.user_message(), "Error: Network error: connection refused");
    }
}
