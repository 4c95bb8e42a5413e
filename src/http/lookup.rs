//! Creature lookup handler.
//!
//! ```text
//! POST body ─▶ parse JSON ─▶ id present? ─▶ upstream GET ─▶ height rule ─▶ 200 record
//!                 │              │               │               │
//!                 ▼              ▼               ▼               ▼
//!                500            400        404/400/500          400
//! ```

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::creature::{CreatureId, CreatureRecord};
use crate::http::error::ApiError;
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;

pub async fn find_creature(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(&headers).to_string();

    let result = match body {
        Ok(body) => match state.request_timeout {
            Some(limit) => tokio::time::timeout(limit, lookup(&state, &body))
                .await
                .unwrap_or(Err(ApiError::TimedOut(limit))),
            None => lookup(&state, &body).await,
        },
        Err(rejection) => Err(ApiError::from(rejection)),
    };

    match result {
        Ok(record) => {
            tracing::info!(
                request_id = %request_id,
                creature_id = ?record.id(),
                name = record.name().unwrap_or_default(),
                "Creature found"
            );
            metrics::record_lookup("found", StatusCode::OK, start_time);
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            let status = err.status();
            if status.is_server_error() {
                tracing::error!(request_id = %request_id, status = %status, error = %err, "Creature lookup failed");
            } else {
                tracing::warn!(request_id = %request_id, status = %status, error = %err, "Creature lookup rejected");
            }
            metrics::record_lookup(err.outcome(), status, start_time);
            err.into_response()
        }
    }
}

async fn lookup(state: &AppState, body: &[u8]) -> Result<CreatureRecord, ApiError> {
    let payload = parse_body(body)?;
    let id = CreatureId::from_body(&payload).ok_or(ApiError::MissingId)?;

    tracing::debug!(creature_id = %id, "Looking up creature");
    let record = state.source.fetch_by_id(&id).await?;

    if !state.height_rule.allows(&record) {
        return Err(ApiError::TooLarge {
            height: record.height().unwrap_or_default(),
            max_height: state.height_rule.max_height(),
        });
    }

    Ok(record)
}

/// An empty body reads as `{}`.
fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| ApiError::MalformedBody(e.to_string()))
}
