//! Metrics collection and exposition.
//!
//! # Metrics
//! - `creature_proxy_requests_total` (counter): lookups by outcome, status
//! - `creature_proxy_request_duration_seconds` (histogram): lookup latency by outcome

use std::net::SocketAddr;
use std::time::Instant;

use axum::http::StatusCode;
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_lookup(outcome: &'static str, status: StatusCode, start_time: Instant) {
    metrics::counter!(
        "creature_proxy_requests_total",
        "outcome" => outcome,
        "status" => status.as_u16().to_string()
    )
    .increment(1);

    metrics::histogram!("creature_proxy_request_duration_seconds", "outcome" => outcome)
        .record(start_time.elapsed().as_secs_f64());
}
