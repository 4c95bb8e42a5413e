//! Client for the creature lookup proxy.
//!
//! Mirrors what a search form does: send the typed id, show the creature or
//! the proxy's error message, and publish an analytics event on success.

pub mod analytics;
pub mod client;
pub mod summary;

pub use analytics::{EventSink, MemorySink, SearchDetails, SearchEvent, TracingSink};
pub use client::{ClientError, CreatureFinder, SearchOutcome, DEFAULT_ENDPOINT};
pub use summary::CreatureSummary;
