//! Failure taxonomy for `/api` calls.

use thiserror::Error;

/// Every way an API call can fail.
///
/// UI code renders these as messages; nothing in the client panics on a
/// failed request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered 401; the interceptor has already acted on it.
    #[error("not signed in")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    /// A 2xx body that does not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// HTTP status behind the error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Status { status, .. } => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Unavailable => None,
        }
    }
}
