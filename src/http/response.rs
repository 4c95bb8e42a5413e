//! Response bodies produced by the proxy itself.
//!
//! Successful lookups return the upstream record untouched; only errors and
//! the health route use the shapes defined here.

use serde::{Deserialize, Serialize};

/// JSON error payload: `{ "message": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}
