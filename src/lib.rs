//! Compact HMAC-signed JSON tokens.
//!
//! This crate issues and verifies three-segment compact tokens
//! (`header.payload.signature`, each segment base64url without padding)
//! signed with one of the HMAC-SHA2 algorithms HS256, HS384 or HS512.
//!
//! Signing and verification are pure, synchronous functions over the
//! caller's key bytes. Verification never fails with an error for
//! attacker-controlled input: malformed tokens, bad signatures and
//! expired claims are all reported as data in [`Verification`].
//!
//! ```
//! use hstoken::{decode_at, encode, Claims};
//!
//! # fn main() -> hstoken::JwtResult<()> {
//! let key = hstoken::keys::OctKey::generate(1024, "HS256")?;
//! let claims = Claims::new()
//!     .issued_at(1000)
//!     .not_before(1000)
//!     .expires_at(2000)
//!     .claim("sub", "user-1");
//!
//! let token = encode(&claims, key.as_bytes(), "HS256")?;
//! let result = decode_at(&token, key.as_bytes(), "HS256", 1500);
//! assert!(result.is_verified);
//! assert!(result.errors.is_none());
//! # Ok(())
//! # }
//! ```

mod algorithm;
mod base64url;
mod claims;
mod decode;
mod encode;
mod error;
pub mod keys;
mod types;
mod validation;

pub use algorithm::Algorithm;
pub use claims::Claims;
pub use decode::{decode, decode_at};
pub use encode::encode;
pub use error::{JwtError, JwtResult};
pub use types::{Header, Verification};
pub use validation::validate_claims;
