/// Header carrying the caller identity on mutating requests.
pub const USER_HEADER: &str = "X-User";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("missing X-User header")]
    Missing,
    #[error("X-User header is not valid UTF-8")]
    Invalid,
}

/// Validates the raw `X-User` header bytes and returns the caller identity.
///
/// The identity is trusted as asserted: no check is made that the caller really is that user.
/// An absent or blank header is reported as `Missing`.
pub fn caller_identity(raw: Option<&[u8]>) -> Result<String, IdentityError> {
    let raw = raw.ok_or(IdentityError::Missing)?;
    let value = std::str::from_utf8(raw)
        .map_err(|_| IdentityError::Invalid)?
        .trim();

    if value.is_empty() {
        return Err(IdentityError::Missing);
    }
    Ok(value.to_string())
}
