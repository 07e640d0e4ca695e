//! Base64url (no padding) segment codec, RFC 7515 style.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};

#[inline]
pub(crate) fn encode(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

#[inline]
pub(crate) fn decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
