//! # Feed Core
//!
//! Core business logic for the image feed backend.
//!
//! This crate contains pure data operations:
//! - An in-memory post store seeded with a fixed initial set
//! - Post listing, lookup, creation, partial update and deletion with ownership checks
//! - The discovery adapter that fetches and reshapes images from the upstream image API
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod posts;
pub mod seed;
pub mod store;

// Domain types are shared with the API crates.
pub use api_shared::wire;

pub use config::{discovery_config_from_env_values, DiscoveryConfig};
pub use discovery::DiscoveryClient;
pub use error::{FeedError, FeedResult};
pub use posts::PostService;
pub use store::PostStore;
