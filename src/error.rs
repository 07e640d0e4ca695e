//! Error types for token operations.

use thiserror::Error;

/// Token operation result type.
pub type JwtResult<T> = Result<T, JwtError>;

/// Hard failures raised on the encoding path.
///
/// Decode-time conditions (bad signature, malformed token, failed claim
/// checks) are never surfaced through this type for untrusted input; they
/// are reported as data in [`crate::Verification`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Empty or otherwise unusable key material.
    #[error("invalid key: {0}")]
    InvalidKey(String),
    /// Claims could not be serialized to JSON.
    #[error("claims serialization failed: {0}")]
    Encoding(String),
    /// Token text does not have the three-segment compact shape.
    #[error("malformed token: {0}")]
    MalformedToken(String),
}

impl JwtError {
    pub(crate) fn invalid_key(msg: &str) -> Self {
        JwtError::InvalidKey(msg.to_string())
    }

    pub(crate) fn malformed(msg: &str) -> Self {
        JwtError::MalformedToken(msg.to_string())
    }
}
