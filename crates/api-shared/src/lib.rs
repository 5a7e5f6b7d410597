//! # API Shared
//!
//! Shared definitions for the vitals triage APIs.
//!
//! Contains:
//! - Request/response wire types (`wire` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` and anything else that needs to speak the same JSON.

pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
