//! Response models for the gateway's service endpoints
//!
//! DTOs serialized into the health and cache-stats JSON bodies. Page
//! responses are raw markup and need no DTO.

pub mod responses;

pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
