#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("post {0} not found")]
    NotFound(u64),
    #[error("caller does not own this post")]
    Forbidden,

    #[error("discovery is not configured (no upstream access key)")]
    NotConfigured,
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
    #[error("failed to decode upstream response: {0}")]
    UpstreamDecode(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
