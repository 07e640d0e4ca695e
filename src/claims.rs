//! Ordered claim set carried in the token payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered mapping from claim name to JSON value.
///
/// Claims serialize in insertion order (`serde_json` with `preserve_order`)
/// with no extraneous whitespace. That byte encoding is the compatibility
/// contract for signing: the decoder verifies over the raw transmitted
/// payload bytes, never over a re-serialization, so both sides of an
/// interop boundary must pin the same encoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Create an empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add or replace a claim, preserving first-insertion order for
    /// existing keys.
    #[must_use]
    pub fn claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set the issued-at (`iat`) claim, in seconds since the epoch.
    #[must_use]
    pub fn issued_at(self, iat: i64) -> Self {
        self.claim("iat", iat)
    }

    /// Set the not-before (`nbf`) claim, in seconds since the epoch.
    #[must_use]
    pub fn not_before(self, nbf: i64) -> Self {
        self.claim("nbf", nbf)
    }

    /// Set the expiration (`exp`) claim, in seconds since the epoch.
    #[must_use]
    pub fn expires_at(self, exp: i64) -> Self {
        self.claim("exp", exp)
    }

    /// Look up a claim by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Number of claims present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the claim set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate claims in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// A temporal claim as integer seconds, if present with that shape.
    pub(crate) fn temporal(&self, name: &str) -> Option<i64> {
        self.0.get(name).and_then(Value::as_i64)
    }
}

impl From<Map<String, Value>> for Claims {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for Claims {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
