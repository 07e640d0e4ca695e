//! Token decoding: parse, recompute the MAC, validate temporal claims.
//!
//! Decoding is total for untrusted input. Every failure mode lands in the
//! returned [`Verification`]; nothing here panics or returns `Err` for a
//! hostile token.

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::Verification;
use crate::validation::validate_claims;
use chrono::Utc;
use subtle::ConstantTimeEq;

/// Decode and verify a compact token against the current system clock.
///
/// The clock is read once and reused across all temporal checks; see
/// [`decode_at`] for an injected reference timestamp.
#[must_use]
pub fn decode(token: &str, key: &[u8], algorithm_id: &str) -> Verification {
    decode_at(token, key, algorithm_id, Utc::now().timestamp())
}

/// Decode and verify a compact token against an explicit `now`.
///
/// The explicit algorithm argument is authoritative; the token header's
/// `alg` field is not consulted, so a header cannot downgrade or redirect
/// the verification algorithm.
///
/// Signature verification and claim validation run independently:
/// `is_verified` reflects only the constant-time MAC comparison, `errors`
/// carries the first structural or temporal-claim failure, and `payload`
/// is populated whenever the payload segment parses as JSON.
#[must_use]
pub fn decode_at(token: &str, key: &[u8], algorithm_id: &str, now: i64) -> Verification {
    let algorithm = Algorithm::resolve(algorithm_id);

    let (header_b64, payload_b64, signature_b64) = match split_segments(token) {
        Ok(segments) => segments,
        Err(reason) => {
            tracing::debug!(%reason, "token rejected");
            return Verification::rejected(&reason);
        }
    };

    // All three segments must be valid base64url text, even when the
    // token is otherwise semantically invalid.
    if base64url::decode(header_b64).is_err() {
        let reason = JwtError::malformed("header segment is not valid base64url");
        tracing::debug!(%reason, "token rejected");
        return Verification::rejected(&reason);
    }
    let payload_bytes = match base64url::decode(payload_b64) {
        Ok(bytes) => bytes,
        Err(_) => {
            let reason = JwtError::malformed("payload segment is not valid base64url");
            tracing::debug!(%reason, "token rejected");
            return Verification::rejected(&reason);
        }
    };
    let signature = match base64url::decode(signature_b64) {
        Ok(bytes) => bytes,
        Err(_) => {
            let reason = JwtError::malformed("signature segment is not valid base64url");
            tracing::debug!(%reason, "token rejected");
            return Verification::rejected(&reason);
        }
    };

    // Recompute over the exact transmitted bytes. The claims are never
    // re-serialized for comparison.
    let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
    let is_verified = match algorithm.sign(signing_input, key) {
        Ok(expected) => bool::from(expected.as_slice().ct_eq(&signature)),
        Err(_) => false,
    };

    let (payload, mut errors) = match serde_json::from_slice::<Claims>(&payload_bytes) {
        Ok(claims) => (Some(claims), None),
        Err(e) => (None, Some(format!("payload is not a JSON claim set: {e}"))),
    };
    if errors.is_none() {
        if let Some(claims) = &payload {
            errors = validate_claims(claims, now);
        }
    }

    Verification {
        payload,
        is_verified,
        errors,
    }
}

/// Split a token into exactly three non-empty dot-delimited segments.
fn split_segments(token: &str) -> JwtResult<(&str, &str, &str)> {
    let mut parts = token.split('.');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(p), Some(s), None) if !h.is_empty() && !p.is_empty() && !s.is_empty() => {
            Ok((h, p, s))
        }
        _ => Err(JwtError::malformed(
            "expected three non-empty dot-separated segments",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_accepts_exactly_three_segments() {
        assert!(split_segments("a.b.c").is_ok());
        assert!(split_segments("a.b").is_err());
        assert!(split_segments("a.b.c.d").is_err());
        assert!(split_segments("a..c").is_err());
        assert!(split_segments("").is_err());
    }
}
