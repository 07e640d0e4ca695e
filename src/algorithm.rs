//! HMAC algorithm registry.
//!
//! Maps algorithm identifiers to their MAC function and key-size hint.
//! Resolution happens once at the operation boundary; everything past it
//! dispatches on the enum, never on strings.

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha384, Sha512};
use std::fmt;

type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Supported HMAC signing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// HMAC with SHA-256.
    #[default]
    HS256,
    /// HMAC with SHA-384.
    HS384,
    /// HMAC with SHA-512.
    HS512,
}

impl Algorithm {
    /// Resolve an algorithm identifier, case-insensitively.
    ///
    /// Unrecognized identifiers resolve to [`Algorithm::HS256`]. The
    /// fallback is a deliberate compatibility policy, not an error path.
    #[must_use]
    pub fn resolve(identifier: &str) -> Self {
        match identifier.to_ascii_uppercase().as_str() {
            "HS256" => Algorithm::HS256,
            "HS384" => Algorithm::HS384,
            "HS512" => Algorithm::HS512,
            // Default policy: anything else signs and verifies as HS256.
            _ => Algorithm::HS256,
        }
    }

    /// Canonical identifier, as written into the token header.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// Recommended key size in bytes (matches the hash output width).
    ///
    /// A hint for key generation only; the signing path accepts keys of
    /// any non-zero length.
    #[must_use]
    pub const fn recommended_key_size(self) -> usize {
        match self {
            Algorithm::HS256 => 32,
            Algorithm::HS384 => 48,
            Algorithm::HS512 => 64,
        }
    }

    /// Length in bytes of the MAC this algorithm produces.
    #[must_use]
    pub const fn mac_len(self) -> usize {
        self.recommended_key_size()
    }

    /// Compute the keyed MAC over `message`.
    pub(crate) fn sign(self, message: &str, key: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            Algorithm::HS256 => {
                let mut mac = HmacSha256::new_from_slice(key)
                    .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
                mac.update(message.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS384 => {
                let mut mac = HmacSha384::new_from_slice(key)
                    .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
                mac.update(message.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Algorithm::HS512 => {
                let mut mac = HmacSha512::new_from_slice(key)
                    .map_err(|_| JwtError::invalid_key("invalid HMAC key"))?;
                mac.update(message.as_bytes());
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn resolve_is_case_insensitive() {
        assert_eq!(Algorithm::resolve("hs384"), Algorithm::HS384);
        assert_eq!(Algorithm::resolve("Hs512"), Algorithm::HS512);
        assert_eq!(Algorithm::resolve("HS256"), Algorithm::HS256);
    }

    #[test]
    fn unrecognized_identifier_falls_back_to_hs256() {
        assert_eq!(Algorithm::resolve("none"), Algorithm::HS256);
        assert_eq!(Algorithm::resolve("RS256"), Algorithm::HS256);
        assert_eq!(Algorithm::resolve(""), Algorithm::HS256);
    }

    #[test]
    fn mac_lengths_match_hash_width() {
        let key = b"0123456789abcdef0123456789abcdef";
        for alg in [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512] {
            assert_eq!(alg.sign("m", key).unwrap().len(), alg.mac_len());
        }
        assert_eq!(Algorithm::HS256.mac_len(), 32);
        assert_eq!(Algorithm::HS384.mac_len(), 48);
        assert_eq!(Algorithm::HS512.mac_len(), 64);
    }

    // RFC 4231 test case 2 ("Jefe").
    #[test]
    fn rfc4231_known_answer() {
        let key = b"Jefe";
        let msg = "what do ya want for nothing?";
        assert_eq!(
            Algorithm::HS256.sign(msg, key).unwrap(),
            hex!("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
        );
        assert_eq!(
            Algorithm::HS384.sign(msg, key).unwrap(),
            hex!(
                "af45d2e376484031617f78d2b58a6b1b9c7ef464f5a01b47e42ec3736322445e"
                "8e2240ca5e69e2c78b3239ecfab21649"
            )
        );
        assert_eq!(
            Algorithm::HS512.sign(msg, key).unwrap(),
            hex!(
                "164b7a7bfcf819e2e395fbe73b56e0a387bd64222e831fd610270cd7ea250554"
                "9758bf75c05a994a6d034f65f8f0e6fdcaeab1a34d4a6b4b636e070a38bce737"
            )
        );
    }
}
