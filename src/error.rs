use thiserror::Error;

/// Why a dealer or reviews request produced nothing usable.
///
/// The view treats every variant the same way (log it, keep the safe default),
/// the distinction exists for the diagnostic line.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("backend reported status {0}")]
    Status(u16),
    #[error("status 200 without a dealer record")]
    NotFound,
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => FetchError::Decode(err.to_string()),
            other => FetchError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}
