//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID)
//!     → lookup.rs (parse body, upstream call, height rule)
//!     → error.rs / response.rs (status + JSON body)
//!     → Send to client
//! ```

pub mod error;
pub mod lookup;
pub mod request;
pub mod response;
pub mod server;

pub use error::ApiError;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use response::ErrorBody;
pub use server::{AppState, HttpServer};
