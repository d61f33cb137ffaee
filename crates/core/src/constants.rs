//! Constants used throughout the feed core crate.

/// Page size used when a list request asks for a non-positive limit.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Number of images fetched when a discovery request does not say.
pub const DEFAULT_DISCOVER_COUNT: i64 = 10;

/// Smallest number of images a discovery request may ask for.
pub const MIN_DISCOVER_COUNT: u8 = 1;

/// Largest number of images a discovery request may ask for.
pub const MAX_DISCOVER_COUNT: u8 = 30;

/// Default upstream image API base URL.
pub const DEFAULT_UNSPLASH_API_URL: &str = "https://api.unsplash.com";

/// Default upstream timeout, in seconds.
pub const DEFAULT_DISCOVER_TIMEOUT_SECS: u64 = 10;

/// Author name used when the upstream item carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown";
