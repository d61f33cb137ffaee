use api_shared::auth::{caller_identity, USER_HEADER};
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;

/// Caller identity asserted through the `X-User` header.
///
/// Required by every mutating endpoint; a missing or blank header rejects the request with 400.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallerIdentity(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for CallerIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts.headers.get(USER_HEADER).map(|v| v.as_bytes());
        let identity = caller_identity(raw)?;
        Ok(CallerIdentity(identity))
    }
}
