//! Discovery adapter over the upstream random-image API.
//!
//! One outbound request per fetch, bounded by the configured timeout, never retried. The
//! upstream body is decoded into explicit optional-field structs and then reshaped with pure
//! mapping functions, so the mapping can be tested without a network.

use crate::config::DiscoveryConfig;
use crate::constants::{MAX_DISCOVER_COUNT, MIN_DISCOVER_COUNT, UNKNOWN_AUTHOR};
use crate::wire::DiscoveryImage;
use crate::{FeedError, FeedResult};
use serde::Deserialize;

// ============================================================================
// UPSTREAM SHAPE
// ============================================================================

/// Upstream photo as far as discovery cares. Every field may be missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpstreamPhoto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub alt_description: Option<String>,
    #[serde(default)]
    pub urls: Option<UpstreamUrls>,
    #[serde(default)]
    pub links: Option<UpstreamLinks>,
    #[serde(default)]
    pub user: Option<UpstreamUser>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpstreamUrls {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub regular: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpstreamLinks {
    #[serde(default)]
    pub html: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpstreamUser {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub links: Option<UpstreamLinks>,
}

/// The upstream answers with a single object for one image and an array otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UpstreamPayload {
    Many(Vec<UpstreamPhoto>),
    One(Box<UpstreamPhoto>),
}

impl UpstreamPayload {
    pub fn into_photos(self) -> Vec<UpstreamPhoto> {
        match self {
            UpstreamPayload::Many(photos) => photos,
            UpstreamPayload::One(photo) => vec![*photo],
        }
    }
}

// ============================================================================
// MAPPING
// ============================================================================

fn non_empty(value: Option<&String>) -> Option<&String> {
    value.filter(|v| !v.is_empty())
}

/// Clamps a requested image count to the inclusive range the upstream accepts.
pub fn clamp_count(count: i64) -> u8 {
    // The clamp bounds the value to 1..=30, so the cast cannot truncate.
    count.clamp(i64::from(MIN_DISCOVER_COUNT), i64::from(MAX_DISCOVER_COUNT)) as u8
}

/// Reshapes one upstream photo.
///
/// Fallback chains:
/// - description: `description`, then `alt_description`, else absent
/// - display image: `urls.small`, then `urls.regular`, else empty
/// - source: `links.html`, else empty
/// - author: `user.name`, else "Unknown"
/// - author profile: `user.links.html`, else empty
pub fn map_photo(photo: &UpstreamPhoto) -> DiscoveryImage {
    let description = non_empty(photo.description.as_ref())
        .or_else(|| non_empty(photo.alt_description.as_ref()))
        .cloned();

    let display_image_url = photo
        .urls
        .as_ref()
        .and_then(|u| non_empty(u.small.as_ref()).or_else(|| non_empty(u.regular.as_ref())))
        .cloned()
        .unwrap_or_default();

    let source_url = photo
        .links
        .as_ref()
        .and_then(|l| non_empty(l.html.as_ref()))
        .cloned()
        .unwrap_or_default();

    let author_name = photo
        .user
        .as_ref()
        .and_then(|u| non_empty(u.name.as_ref()))
        .cloned()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

    let author_profile_url = photo
        .user
        .as_ref()
        .and_then(|u| u.links.as_ref())
        .and_then(|l| non_empty(l.html.as_ref()))
        .cloned()
        .unwrap_or_default();

    DiscoveryImage {
        id: photo.id.clone().unwrap_or_default(),
        description,
        display_image_url,
        source_url,
        author_name,
        author_profile_url,
    }
}

/// Reshapes a whole upstream payload, preserving upstream order.
pub fn map_payload(payload: UpstreamPayload) -> Vec<DiscoveryImage> {
    payload.into_photos().iter().map(map_photo).collect()
}

// ============================================================================
// CLIENT
// ============================================================================

/// Fetches random images from the upstream API.
#[derive(Clone, Debug)]
pub struct DiscoveryClient {
    http: reqwest::Client,
    cfg: DiscoveryConfig,
}

impl DiscoveryClient {
    /// Builds a client whose every request is bounded by the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidConfig`] if the HTTP client cannot be constructed.
    pub fn new(cfg: DiscoveryConfig) -> FeedResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(|e| FeedError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, cfg })
    }

    pub fn is_configured(&self) -> bool {
        self.cfg.is_configured()
    }

    /// Fetches `count` random images (clamped to 1..=30) and reshapes them.
    ///
    /// # Errors
    ///
    /// - [`FeedError::NotConfigured`] when no access key is set; no request is made
    /// - [`FeedError::UpstreamUnavailable`] on transport failure, including timeouts
    /// - [`FeedError::UpstreamStatus`] when upstream answers with a non-success status
    /// - [`FeedError::UpstreamDecode`] when the body is not the expected JSON
    pub async fn fetch(&self, count: i64) -> FeedResult<Vec<DiscoveryImage>> {
        let access_key = self.cfg.access_key().ok_or(FeedError::NotConfigured)?;
        let count = clamp_count(count);
        let url = format!("{}/photos/random", self.cfg.base_url());

        let response = self
            .http
            .get(&url)
            .query(&[("count", count)])
            .header("Authorization", format!("Client-ID {access_key}"))
            .header("Accept-Version", "v1")
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("discovery upstream unreachable: {e}");
                FeedError::UpstreamUnavailable(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "discovery upstream returned an error");
            return Err(FeedError::UpstreamStatus(status.as_u16()));
        }

        let payload = response.json::<UpstreamPayload>().await.map_err(|e| {
            tracing::warn!("discovery upstream body rejected: {e}");
            if e.is_timeout() {
                FeedError::UpstreamUnavailable(e.to_string())
            } else {
                FeedError::UpstreamDecode(e.to_string())
            }
        })?;

        let images = map_payload(payload);
        tracing::debug!(requested = count, returned = images.len(), "discovery fetch");
        Ok(images)
    }
}
