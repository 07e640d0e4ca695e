//! Token header and verification result types.

use crate::claims::Claims;
use crate::error::JwtError;
use serde::{Deserialize, Serialize};

/// Protected header of a compact token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    /// Algorithm identifier, canonical form.
    pub alg: String,
    /// Token type, always `"JWT"` on the encoding path.
    pub typ: String,
}

impl Header {
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            alg: alg.to_string(),
            typ: "JWT".to_string(),
        }
    }
}

/// Outcome of decoding a compact token.
///
/// Signature verification and claim validation are independent: a token
/// with a bad signature still gets its claims parsed and validated, and a
/// signed token past its expiry still reports `is_verified == true`.
/// Callers must check `is_verified` explicitly; an empty `errors` field
/// does not imply it.
#[derive(Debug, Clone, PartialEq)]
pub struct Verification {
    /// Decoded claims, or `None` when the payload could not be parsed.
    pub payload: Option<Claims>,
    /// Whether the recomputed MAC matched the token's signature segment.
    pub is_verified: bool,
    /// First structural or claim-validation failure, if any.
    pub errors: Option<String>,
}

impl Verification {
    /// Result for a token rejected before signature recomputation.
    pub(crate) fn rejected(reason: &JwtError) -> Self {
        Self {
            payload: None,
            is_verified: false,
            errors: Some(reason.to_string()),
        }
    }
}
