//! Upstream creature API subsystem.
//!
//! # Data Flow
//! ```text
//! CreatureId
//!     → CreatureSource::fetch_by_id (trait seam, injected into handlers)
//!     → client.rs (PokeApiClient: GET <base>/<id> via reqwest)
//!     → CreatureRecord | UpstreamError (status attached on non-2xx)
//! ```
//!
//! # Design Decisions
//! - One GET per lookup: no retries, no caching
//! - Timeout is the HTTP client's unless configured
//! - Handlers depend on the trait, never on the concrete client

pub mod client;
pub mod error;

use async_trait::async_trait;

use crate::creature::{CreatureId, CreatureRecord};

pub use client::PokeApiClient;
pub use error::UpstreamError;

/// Anything that can look up a creature by id.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    async fn fetch_by_id(&self, id: &CreatureId) -> Result<CreatureRecord, UpstreamError>;
}
