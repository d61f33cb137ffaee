//! Wire types for the image feed API.
//!
//! Field names are camelCase on the wire. Input bodies also accept the field names used by the
//! legacy Spanish-language feed client (`titulo`, `imagen`, `descripcion`, `url`, `alt`) as aliases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single feed entry.
///
/// `id`, `owner` and `created_at` are assigned by the store at creation and never change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub owner: String,
    pub created_at: DateTime<Utc>,
    pub title: String,
    /// URL or path of the image.
    pub image_ref: String,
    pub description: Option<String>,
    pub external_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub alt_text: Option<String>,
}

/// Body of `POST /api/posts`.
///
/// `title` and `image_ref` are optional at the wire level so that a missing value is reported as
/// a validation failure rather than a deserialisation failure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    #[serde(default, alias = "imagen")]
    pub image_ref: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "url")]
    pub external_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, alias = "alt")]
    pub alt_text: Option<String>,
}

/// Body of `PUT /api/posts/{id}`.
///
/// Each field is applied only when present; an absent (or `null`) field leaves the stored value
/// untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    #[serde(default, alias = "titulo")]
    pub title: Option<String>,
    #[serde(default, alias = "imagen")]
    pub image_ref: Option<String>,
    #[serde(default, alias = "descripcion")]
    pub description: Option<String>,
    #[serde(default, alias = "url")]
    pub external_url: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, alias = "alt")]
    pub alt_text: Option<String>,
}

/// An externally sourced image, reshaped from the upstream discovery API.
///
/// Computed per request and never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryImage {
    pub id: String,
    pub description: Option<String>,
    pub display_image_url: String,
    pub source_url: String,
    pub author_name: String,
    pub author_profile_url: String,
}

/// Liveness response for `GET /`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub count: usize,
}

/// Error body returned with every non-success status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub detail: String,
}
