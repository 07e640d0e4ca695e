//! Octet key supply.
//!
//! The signing core consumes raw key bytes and never generates, stores or
//! rotates keys; this module is the thin collaborator that supplies them.
//! Key material is zeroized on drop and redacted from `Debug` output.

use crate::algorithm::Algorithm;
use crate::base64url;
use crate::error::{JwtError, JwtResult};
use rand::Rng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A symmetric octet key for signing use (`"sig"`).
///
/// The algorithm label carried here is advisory: `encode` and `decode`
/// take their own algorithm argument, which is authoritative, and no
/// cross-check is performed against the label.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct OctKey {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    algorithm: Algorithm,
}

impl OctKey {
    /// Generate a random key of `bits` length, labeled for `algorithm_id`.
    ///
    /// # Errors
    /// [`JwtError::InvalidKey`] when `bits` is zero or not a multiple of 8.
    pub fn generate(bits: usize, algorithm_id: &str) -> JwtResult<Self> {
        if bits == 0 || bits % 8 != 0 {
            return Err(JwtError::InvalidKey(format!(
                "key size must be a positive multiple of 8 bits, got {bits}"
            )));
        }

        let mut rng = rand::rng();
        let mut bytes = vec![0u8; bits / 8];
        rng.fill(&mut bytes[..]);

        Ok(Self {
            bytes,
            algorithm: Algorithm::resolve(algorithm_id),
        })
    }

    /// Wrap an existing shared secret, labeled for `algorithm_id`.
    ///
    /// # Errors
    /// [`JwtError::InvalidKey`] when the secret is empty.
    pub fn from_secret(secret: impl AsRef<[u8]>, algorithm_id: &str) -> JwtResult<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(JwtError::invalid_key("empty key material"));
        }

        Ok(Self {
            bytes: secret.to_vec(),
            algorithm: Algorithm::resolve(algorithm_id),
        })
    }

    /// Raw key bytes, as consumed by `encode` and `decode`.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Advisory algorithm label.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Intended key use.
    #[must_use]
    pub const fn intended_use(&self) -> &'static str {
        "sig"
    }

    /// Export the key material as base64url text, JWK `k`-parameter style.
    #[must_use]
    pub fn to_base64url(&self) -> String {
        base64url::encode(&self.bytes)
    }
}

impl fmt::Debug for OctKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OctKey")
            .field("algorithm", &self.algorithm)
            .field("bytes", &"[redacted]")
            .finish()
    }
}
