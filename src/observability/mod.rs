//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and server produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (lookup counters and latency histograms)
//!
//! Consumers:
//!     → stdout
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Request ID is a field on every handler log line
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
