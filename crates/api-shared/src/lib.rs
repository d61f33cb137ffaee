//! # API Shared
//!
//! Shared definitions for the image feed APIs.
//!
//! Contains:
//! - Wire types (`wire` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//! - Caller-identity header handling
//!
//! Used by `feed-core` for its domain types and by `api-rest` for request handling.

pub mod auth;
pub mod health;
pub mod wire;

pub use health::HealthService;
pub use wire::*;
