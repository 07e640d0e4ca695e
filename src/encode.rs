//! Token encoding: claims in, compact three-segment token out.

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::claims::Claims;
use crate::error::{JwtError, JwtResult};
use crate::types::Header;

/// Encode a claim set into a signed compact token.
///
/// The algorithm identifier resolves through [`Algorithm::resolve`]; its
/// canonical name is written into the header, so `"hs384"` and `"HS384"`
/// produce byte-identical tokens. Encoding is deterministic for identical
/// inputs.
///
/// # Errors
/// [`JwtError::InvalidKey`] when `key` is empty; [`JwtError::Encoding`]
/// when the claims cannot be serialized to JSON. Both indicate caller
/// misuse and are raised as hard failures.
pub fn encode(claims: &Claims, key: &[u8], algorithm_id: &str) -> JwtResult<String> {
    if key.is_empty() {
        return Err(JwtError::invalid_key("empty key material"));
    }

    let algorithm = Algorithm::resolve(algorithm_id);
    let header = Header::new(algorithm.name());

    let header_json =
        serde_json::to_vec(&header).map_err(|e| JwtError::Encoding(e.to_string()))?;
    let payload_json =
        serde_json::to_vec(claims).map_err(|e| JwtError::Encoding(e.to_string()))?;

    let signing_input = format!(
        "{}.{}",
        base64url::encode(&header_json),
        base64url::encode(&payload_json)
    );
    let mac = algorithm.sign(&signing_input, key)?;

    tracing::trace!(alg = algorithm.name(), claims = claims.len(), "token issued");
    Ok(format!("{signing_input}.{}", base64url::encode(&mac)))
}
