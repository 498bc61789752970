use reqwest::StatusCode;
use serde_json::Value;
use std::fmt;

/// Errors raised while authenticating with the IG Markets API
#[derive(Debug)]
pub enum AuthError {
    /// Username, password or API key absent from the configuration
    MissingCredentials,
    /// The API rejected the supplied credentials
    Unauthorized,
    /// Network failure while reaching the session endpoint
    Network(reqwest::Error),
    /// Any other non-success status from the session endpoint
    Unexpected(StatusCode),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::MissingCredentials => {
                write!(f, "missing credentials: set IG_USERNAME, IG_PASSWORD and IG_API_KEY")
            }
            AuthError::Unauthorized => write!(f, "unauthorized"),
            AuthError::Network(e) => write!(f, "network error: {e}"),
            AuthError::Unexpected(status) => write!(f, "unexpected status: {status}"),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuthError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(e: reqwest::Error) -> Self {
        AuthError::Network(e)
    }
}

/// Main error type for the bridge
#[derive(Debug)]
pub enum AppError {
    /// Username, password or API key absent at construction time
    MissingCredentials,
    /// The instruction failed validation before any broker call
    Validation(String),
    /// The broker rejected the request body; carries the API error code
    BadRequest(String),
    /// Every payload convention was rejected by the broker; carries the last
    /// error code and the last attempted payload for diagnostics
    SubmissionFailed {
        reason: String,
        payload: Value,
    },
    /// Authentication failure
    Auth(AuthError),
    /// Session tokens rejected by the API
    Unauthorized,
    /// Resource not found
    NotFound,
    /// API allowance exhausted and retries gave up
    RateLimitExceeded,
    /// Any other non-success status
    Unexpected(StatusCode),
    /// Network failure
    Network(reqwest::Error),
    /// JSON encoding or decoding failure
    Json(serde_json::Error),
    /// I/O failure
    Io(std::io::Error),
}

impl AppError {
    /// Stable error class name used in structured results returned to the
    /// webhook layer.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingCredentials => "CredentialsMissing",
            AppError::Validation(_) => "ValidationError",
            AppError::BadRequest(_) => "BadRequest",
            AppError::SubmissionFailed { .. } => "SubmissionFailed",
            AppError::Auth(_) => "AuthError",
            AppError::Unauthorized => "Unauthorized",
            AppError::NotFound => "NotFound",
            AppError::RateLimitExceeded => "RateLimitExceeded",
            AppError::Unexpected(_) => "UnexpectedStatus",
            AppError::Network(_) => "NetworkError",
            AppError::Json(_) => "JsonError",
            AppError::Io(_) => "IoError",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredentials => {
                write!(f, "missing credentials: set IG_USERNAME, IG_PASSWORD and IG_API_KEY")
            }
            AppError::Validation(msg) => write!(f, "validation error: {msg}"),
            AppError::BadRequest(code) => write!(f, "bad request: {code}"),
            AppError::SubmissionFailed { reason, .. } => write!(f, "submission failed: {reason}"),
            AppError::Auth(e) => write!(f, "authentication error: {e}"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::NotFound => write!(f, "not found"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Auth(e) => Some(e),
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::MissingCredentials => AppError::MissingCredentials,
            other => AppError::Auth(other),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
