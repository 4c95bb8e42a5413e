//! Search client for the proxy's lookup endpoint.

use reqwest::{header::ACCEPT, Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use url::Url;

use crate::analytics::{EventSink, SearchEvent};

/// Path the proxy serves lookups on unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "/_v/find-pokemon";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// What a search ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The creature record, exactly as the proxy returned it.
    Found(Value),
    /// The proxy refused; `message` is empty when its body had none.
    Failed { status: StatusCode, message: String },
}

/// Looks creatures up through the proxy and reports hits to an event sink.
pub struct CreatureFinder<S> {
    client: Client,
    endpoint: Url,
    sink: S,
}

impl<S: EventSink> CreatureFinder<S> {
    /// Finder for the default endpoint on `proxy_url`.
    pub fn new(proxy_url: &str, sink: S) -> Result<Self, ClientError> {
        Self::with_endpoint(proxy_url, DEFAULT_ENDPOINT, sink)
    }

    pub fn with_endpoint(proxy_url: &str, endpoint: &str, sink: S) -> Result<Self, ClientError> {
        let endpoint = Url::parse(proxy_url)?.join(endpoint)?;
        Ok(Self {
            client: Client::new(),
            endpoint,
            sink,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Search using the raw text of the id field.
    ///
    /// Blank input is sent as `{}` and non-numeric input as `{"id": null}`;
    /// either way the proxy answers with its missing-id message.
    pub async fn search(&self, input: &str) -> Result<SearchOutcome, ClientError> {
        let body = request_body(input);

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // An unreadable error body still counts as a failure, just without text.
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_default();
            return Ok(SearchOutcome::Failed { status, message });
        }

        let record: Value = response.json().await?;
        self.sink.publish(SearchEvent::from_record(&record));
        Ok(SearchOutcome::Found(record))
    }
}

// Largest integer an f64 holds exactly (2^53 - 1).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Body for the typed text. Numbers that are whole go out as integers;
/// anything that is not a finite number goes out as `null`.
fn request_body(input: &str) -> Value {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return json!({});
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return json!({ "id": id });
    }
    match trimmed.parse::<f64>() {
        Ok(id) if id.fract() == 0.0 && id.abs() <= MAX_EXACT_INTEGER => json!({ "id": id as i64 }),
        Ok(id) if id.is_finite() => json!({ "id": id }),
        _ => json!({ "id": null }),
    }
}
