//! Creature lookup proxy library.
//!
//! Accepts `{ "id": ... }` on a POST endpoint, fetches the creature from the
//! upstream API, rejects creatures that are too tall and answers with either
//! the upstream record or a fixed `{ "message": ... }` error.

// Core subsystems
pub mod config;
pub mod creature;
pub mod http;
pub mod rules;
pub mod upstream;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::schema::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
