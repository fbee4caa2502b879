use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by the identity provider port.
///
/// These never leave the service layer: `UserManagementService` folds every
/// variant into a [`ProviderOperationError`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Identity provider returned HTTP {status}: {message}")]
    HttpFailure { status: u16, message: String },

    #[error("Identity provider unreachable: {message}")]
    Transport { message: String },
}

impl ProviderError {
    /// Status carried by the provider, if it is an error status (4xx/5xx).
    pub fn error_status(&self) -> Option<StatusCode> {
        match self {
            ProviderError::HttpFailure { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error()),
            ProviderError::Transport { .. } => None,
        }
    }
}

/// The single error kind surfaced by the user service.
///
/// Carries the message and the HTTP status the caller should answer with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderOperationError {
    message: String,
    status: StatusCode,
}

impl ProviderOperationError {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    /// Wrap a provider fault, keeping the provider's error status when it has
    /// one and using `fallback` otherwise.
    pub fn from_provider(context: &str, err: &ProviderError, fallback: StatusCode) -> Self {
        let status = err.error_status().unwrap_or(fallback);
        Self::new(format!("{context}: {err}"), status)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Result type for user service operations
pub type ServiceResult<T> = Result<T, ProviderOperationError>;

/// Authentication-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing bearer token")]
    MissingToken,

    #[error("Invalid token: {reason}")]
    InvalidToken { reason: String },

    #[error("Token introspection failed: {reason}")]
    IntrospectionFailed { reason: String },

    #[error("Insufficient role: one of {required:?} is required")]
    InsufficientRole { required: Vec<String> },
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {key}")]
    MissingRequired { key: String },

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
