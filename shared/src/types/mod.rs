//! Type definitions shared by the API layer
//!
//! - `response` - the `{ ok, ... }` JSON envelope returned by every endpoint

pub mod response;

pub use response::{ApiResponse, ErrorResponse, HealthResponse};
