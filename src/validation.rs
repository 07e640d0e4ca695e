//! Temporal claim validation.

use crate::claims::Claims;

/// Validate the temporal claims of a decoded claim set against a single
/// reference timestamp.
///
/// Checks run in order `iat`, `nbf`, `exp`, each only when the claim is
/// present as an integer; the first failure short-circuits and its message
/// is returned. All three absent, or all passing, yields `None`.
///
/// `now` is applied to every check so a token cannot straddle a clock read
/// mid-validation. Boundary semantics: `iat` and `nbf` fail only when
/// strictly in the future; `exp` fails when it is `now` or earlier.
#[must_use]
pub fn validate_claims(claims: &Claims, now: i64) -> Option<String> {
    if let Some(iat) = claims.temporal("iat") {
        if iat > now {
            return Some("token issued in the future".to_string());
        }
    }
    if let Some(nbf) = claims.temporal("nbf") {
        if nbf > now {
            return Some("token not yet valid".to_string());
        }
    }
    if let Some(exp) = claims.temporal("exp") {
        if exp <= now {
            return Some("token expired".to_string());
        }
    }
    None
}
