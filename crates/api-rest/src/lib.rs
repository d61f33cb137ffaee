//! # API REST
//!
//! REST API implementation for the image feed.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialisation, CORS, status mapping, `X-User` extraction)
//!
//! Business rules live in `feed-core`; this crate only routes and translates.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod identity;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{DiscoveryImage, ErrorRes, HealthRes, HealthService, NewPost, Post, PostPatch};
use feed_core::constants::DEFAULT_DISCOVER_COUNT;
use feed_core::{discovery_config_from_env_values, DiscoveryClient, PostService, PostStore};
use std::sync::Arc;

pub use error::ApiError;
pub use identity::CallerIdentity;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub post_service: PostService,
    pub discovery: DiscoveryClient,
}

impl AppState {
    /// Creates state over a freshly seeded store.
    pub fn new(discovery: DiscoveryClient) -> Self {
        Self {
            post_service: PostService::new(Arc::new(PostStore::seeded())),
            discovery,
        }
    }

    /// Resolves discovery settings from the process environment and seeds a new store.
    ///
    /// # Environment Variables
    /// - `UNSPLASH_ACCESS_KEY`: upstream credential (discovery answers 500 without it)
    /// - `UNSPLASH_API_URL`: upstream base URL (default: "https://api.unsplash.com")
    /// - `DISCOVER_TIMEOUT_SECS`: upstream timeout in seconds (default: 10)
    ///
    /// # Errors
    /// Returns an error if the timeout is not a positive integer or the HTTP client cannot be
    /// built.
    pub fn from_env() -> anyhow::Result<Self> {
        let cfg = discovery_config_from_env_values(
            std::env::var("UNSPLASH_API_URL").ok(),
            std::env::var("UNSPLASH_ACCESS_KEY").ok(),
            std::env::var("DISCOVER_TIMEOUT_SECS").ok(),
        )?;
        if !cfg.is_configured() {
            tracing::warn!("UNSPLASH_ACCESS_KEY not set; /api/discover will answer 500");
        }
        Ok(Self::new(DiscoveryClient::new(cfg)?))
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Offset into the feed; negative values count as 0.
    pub skip: Option<i64>,
    /// Page size; non-positive values fall back to 10.
    pub limit: Option<i64>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscoverParams {
    /// Number of images, clamped to 1..=30.
    pub count: Option<i64>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_posts,
        get_post,
        create_post,
        update_post,
        delete_post,
        discover,
    ),
    components(schemas(HealthRes, Post, NewPost, PostPatch, DiscoveryImage, ErrorRes))
)]
pub struct ApiDoc;

/// Builds the full REST router: API routes, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/api/posts", get(list_posts).post(create_post))
        .route(
            "/api/posts/:id",
            get(get_post).put(update_post).delete(delete_post),
        )
        .route("/api/discover", get(discover))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Liveness and current post count", body = HealthRes)
    )
)]
/// Health check endpoint.
///
/// Reports that the API is alive along with the number of stored posts.
#[axum::debug_handler]
async fn health(State(state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health(state.post_service.count()))
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(ListParams),
    responses(
        (status = 200, description = "Page of posts in creation order", body = [Post])
    )
)]
/// List posts with offset/limit pagination.
#[axum::debug_handler]
async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Json<Vec<Post>> {
    let posts = state
        .post_service
        .list(params.skip.unwrap_or(0), params.limit.unwrap_or(0));
    Json(posts)
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    params(("id" = u64, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Post not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.post_service.get(id)?))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = NewPost,
    params(("X-User" = String, Header, description = "Caller identity")),
    responses(
        (status = 200, description = "Post created", body = Post),
        (status = 400, description = "Missing title, image or X-User header", body = ErrorRes)
    )
)]
/// Create a post owned by the caller.
///
/// The store assigns the id and creation time. `altText` defaults to the title.
#[axum::debug_handler]
async fn create_post(
    State(state): State<AppState>,
    CallerIdentity(user): CallerIdentity,
    Json(req): Json<NewPost>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.post_service.create(req, &user)?))
}

#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    request_body = PostPatch,
    params(
        ("id" = u64, Path, description = "Post id"),
        ("X-User" = String, Header, description = "Caller identity")
    ),
    responses(
        (status = 200, description = "Post updated", body = Post),
        (status = 400, description = "Bad request", body = ErrorRes),
        (status = 403, description = "Caller is not the owner", body = ErrorRes),
        (status = 404, description = "Post not found", body = ErrorRes)
    )
)]
/// Partially update a post. Only fields present in the body change.
#[axum::debug_handler]
async fn update_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    CallerIdentity(user): CallerIdentity,
    Json(req): Json<PostPatch>,
) -> Result<Json<Post>, ApiError> {
    Ok(Json(state.post_service.update(id, req, &user)?))
}

#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    params(
        ("id" = u64, Path, description = "Post id"),
        ("X-User" = String, Header, description = "Caller identity")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 400, description = "Missing X-User header", body = ErrorRes),
        (status = 403, description = "Caller is not the owner", body = ErrorRes),
        (status = 404, description = "Post not found", body = ErrorRes)
    )
)]
#[axum::debug_handler]
async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    CallerIdentity(user): CallerIdentity,
) -> Result<StatusCode, ApiError> {
    state.post_service.delete(id, &user)?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/discover",
    params(DiscoverParams),
    responses(
        (status = 200, description = "Images from the upstream image API", body = [DiscoveryImage]),
        (status = 500, description = "Discovery is not configured", body = ErrorRes),
        (status = 502, description = "Upstream failure", body = ErrorRes)
    )
)]
/// Fetch random images from the upstream image API, reshaped for the feed.
///
/// # Errors
/// Returns `500` if no upstream credential is configured and `502` on any upstream failure.
#[axum::debug_handler]
async fn discover(
    State(state): State<AppState>,
    Query(params): Query<DiscoverParams>,
) -> Result<Json<Vec<DiscoveryImage>>, ApiError> {
    let count = params.count.unwrap_or(DEFAULT_DISCOVER_COUNT);
    Ok(Json(state.discovery.fetch(count).await?))
}
