use reqwest::StatusCode;
use thiserror::Error;

/// Failure of an upstream lookup.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// The request never produced a response.
    #[error("upstream request failed: {0}")]
    Transport(String),

    /// A 2xx response whose body was not JSON.
    #[error("invalid upstream response body: {0}")]
    Decode(String),

    #[error("cannot build upstream url: {0}")]
    InvalidUrl(String),
}

impl UpstreamError {
    /// Status reported by the upstream, if it got that far.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            UpstreamError::Status(status) => Some(*status),
            _ => None,
        }
    }
}
