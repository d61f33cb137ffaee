//! Translation of core outcomes into HTTP responses.

use api_shared::auth::IdentityError;
use api_shared::ErrorRes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use feed_core::FeedError;

/// Error returned by every handler; rendered as `{ "detail": ... }` with the mapped status.
#[derive(Debug)]
pub enum ApiError {
    Feed(FeedError),
    Identity(IdentityError),
}

impl From<FeedError> for ApiError {
    fn from(e: FeedError) -> Self {
        ApiError::Feed(e)
    }
}

impl From<IdentityError> for ApiError {
    fn from(e: IdentityError) -> Self {
        ApiError::Identity(e)
    }
}

impl ApiError {
    /// Status code and client-facing message for this error.
    pub fn status_and_detail(&self) -> (StatusCode, String) {
        match self {
            ApiError::Identity(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Feed(e) => match e {
                FeedError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                FeedError::NotFound(_) => (StatusCode::NOT_FOUND, "Post not found".into()),
                FeedError::Forbidden => (
                    StatusCode::FORBIDDEN,
                    "You are not allowed to modify this post".into(),
                ),
                FeedError::NotConfigured => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Discovery is not configured".into(),
                ),
                FeedError::UpstreamUnavailable(_)
                | FeedError::UpstreamStatus(_)
                | FeedError::UpstreamDecode(_) => (
                    StatusCode::BAD_GATEWAY,
                    "Failed to fetch images from the upstream service".into(),
                ),
                FeedError::InvalidConfig(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".into())
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = self.status_and_detail();
        if status.is_server_error() {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::debug!("request rejected: {:?}", self);
        }
        (status, Json(ErrorRes { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(e: impl Into<ApiError>) -> StatusCode {
        e.into().status_and_detail().0
    }

    #[test]
    fn maps_every_outcome_to_its_status() {
        assert_eq!(status(FeedError::Validation("x".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status(FeedError::NotFound(1)), StatusCode::NOT_FOUND);
        assert_eq!(status(FeedError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status(FeedError::NotConfigured),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status(FeedError::UpstreamUnavailable("down".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status(FeedError::UpstreamStatus(500)), StatusCode::BAD_GATEWAY);
        assert_eq!(
            status(FeedError::UpstreamDecode("bad".into())),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(status(IdentityError::Missing), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_message_reaches_the_client() {
        let (_, detail) =
            ApiError::from(FeedError::Validation("title is required".into())).status_and_detail();
        assert_eq!(detail, "title is required");
    }
}
