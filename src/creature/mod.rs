//! Creature domain types.
//!
//! # Data Flow
//! ```text
//! inbound body { id }
//!     → id.rs (CreatureId: presence + path segment coercion)
//!     → upstream lookup
//!     → record.rs (CreatureRecord: opaque JSON, typed read-only views)
//! ```

pub mod id;
pub mod record;

pub use id::CreatureId;
pub use record::CreatureRecord;
