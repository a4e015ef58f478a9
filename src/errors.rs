use thiserror::Error;

/// Failure of a single call to the catalog API.
///
/// Missing or malformed fields inside an otherwise valid payload are not
/// errors; normalization degrades those to defaults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("response received is not ok [{0}]")]
    HttpStatus(u16),
    #[error("response is not valid JSON: {0}")]
    MalformedJson(String),
    #[error("catalog API error {code}: {message}")]
    Api { code: i64, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = err.status() {
            FetchError::HttpStatus(status.as_u16())
        } else if err.is_decode() {
            FetchError::MalformedJson(err.to_string())
        } else {
            FetchError::ConnectionFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedJson(err.to_string())
    }
}

/// Reasons a signup is refused.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Email already exists")]
    EmailTaken,
    #[error("Username already exists")]
    UsernameTaken,
    #[error("Username, email and password are required")]
    MissingField,
    #[error("Failed to hash password: {0}")]
    Hashing(String),
    #[error("Failed to store account: {0}")]
    Storage(String),
}
