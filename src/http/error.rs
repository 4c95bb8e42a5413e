//! Lookup failures and their user-facing translation.
//!
//! Every failure leaves the proxy as `{ "message": ... }` with one of a
//! handful of fixed messages. Upstream bodies are never forwarded.

use std::time::Duration;

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::ErrorBody;
use crate::upstream::UpstreamError;

pub const MISSING_ID_MESSAGE: &str = "O campo id é obrigatório no body.";
pub const TOO_LARGE_MESSAGE: &str = "O Pokémon é grande demais";
pub const NOT_FOUND_MESSAGE: &str = "Pokémon não encontrado";
pub const BAD_UPSTREAM_REQUEST_MESSAGE: &str = "Requisição inválida à PokeAPI";
pub const INTERNAL_MESSAGE: &str = "Erro interno ao consultar a PokeAPI";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request body has no usable id")]
    MissingId,

    #[error("creature height {height} reaches the limit of {max_height}")]
    TooLarge { height: f64, max_height: u64 },

    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("request body rejected: {reason}")]
    BodyRejected { status: StatusCode, reason: String },

    #[error("lookup did not finish within {0:?}")]
    TimedOut(Duration),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingId | ApiError::TooLarge { .. } => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) | ApiError::TimedOut(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BodyRejected { status, .. } => *status,
            ApiError::Upstream(e) => match e.status() {
                Some(StatusCode::NOT_FOUND) => StatusCode::NOT_FOUND,
                Some(StatusCode::BAD_REQUEST) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingId => MISSING_ID_MESSAGE,
            ApiError::TooLarge { .. } => TOO_LARGE_MESSAGE,
            ApiError::MalformedBody(_) | ApiError::BodyRejected { .. } | ApiError::TimedOut(_) => {
                INTERNAL_MESSAGE
            }
            ApiError::Upstream(e) => match e.status() {
                Some(StatusCode::NOT_FOUND) => NOT_FOUND_MESSAGE,
                Some(StatusCode::BAD_REQUEST) => BAD_UPSTREAM_REQUEST_MESSAGE,
                _ => INTERNAL_MESSAGE,
            },
        }
    }

    /// Metric/log label for the failure kind.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::MissingId => "missing_id",
            ApiError::TooLarge { .. } => "too_large",
            ApiError::MalformedBody(_) => "malformed_body",
            ApiError::BodyRejected { .. } => "body_rejected",
            ApiError::TimedOut(_) => "timed_out",
            ApiError::Upstream(_) => "upstream_error",
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::BodyRejected {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::new(self.message()))).into_response()
    }
}
