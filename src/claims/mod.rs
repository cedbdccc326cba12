//! The claim set carried in a token payload
//!
//! [`ClaimSet`] is an ordered map from claim name to JSON value, with typed
//! accessors for the registered claims of
//! [RFC 7519 Section 4.1](https://datatracker.ietf.org/doc/html/rfc7519#section-4.1).
//! The map only ever holds claims that are present: setting a registered claim
//! to an absent value (`None`, a non-positive timestamp, an empty audience
//! list) removes the key.

mod validator;

pub use validator::ClaimsValidation;
pub(crate) use validator::validate_claims;

use crate::error::{FormatError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub(crate) const ISSUER: &str = "iss";
pub(crate) const SUBJECT: &str = "sub";
pub(crate) const AUDIENCE: &str = "aud";
pub(crate) const EXPIRATION: &str = "exp";
pub(crate) const NOT_BEFORE: &str = "nbf";
pub(crate) const ISSUED_AT: &str = "iat";
pub(crate) const JWT_ID: &str = "jti";

/// Claims of a JWT payload
///
/// A written token must stay within [`MAX_TOKEN_LENGTH`](crate::MAX_TOKEN_LENGTH)
/// bytes, which bounds the serialized claims to roughly 48 KiB.
///
/// # Examples
///
/// ```
/// use hsjwt::ClaimSet;
///
/// let mut claims = ClaimSet::new();
/// claims
///     .set_issuer(Some("example.com"))
///     .set_subject(Some("user123"))
///     .set_expiration(1_900_000_000)
///     .set_custom("role", "admin");
///
/// assert_eq!(claims.issuer(), Some("example.com"));
/// assert_eq!(claims.expiration(), Some(1_900_000_000));
/// assert_eq!(claims.get("role").and_then(|v| v.as_str()), Some("admin"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimSet {
    claims: Map<String, Value>,
}

impl ClaimSet {
    /// Create an empty claim set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a claim set from any value that serializes to a JSON object
    pub fn from_claims<T: Serialize>(claims: &T) -> Result<Self> {
        match serde_json::to_value(claims) {
            Ok(Value::Object(map)) => Ok(Self::from(map)),
            Ok(_) => Err(FormatError::ClaimsNotObject.into()),
            Err(e) => {
                Err(FormatError::InvalidJson(format!("Failed to serialize claims: {e}")).into())
            }
        }
    }

    /// Deserialize the claim set into a typed structure
    ///
    /// Use this for custom claims beyond the registered ones.
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.claims.clone()))
            .map_err(|e| FormatError::InvalidJson(format!("Failed to parse claims: {e}")).into())
    }

    /// Canonical JSON serialization of the full claim map
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.claims).expect("a JSON map with string keys always serializes")
    }

    // ============================================================================
    // Registered string claims
    // ============================================================================

    /// Issuer (iss) - identifies the principal that issued the JWT
    pub fn issuer(&self) -> Option<&str> {
        self.string_claim(ISSUER)
    }

    /// Set or clear the issuer (iss)
    pub fn set_issuer(&mut self, value: Option<&str>) -> &mut Self {
        self.set_string_claim(ISSUER, value)
    }

    /// Subject (sub) - identifies the principal that is the subject of the JWT
    pub fn subject(&self) -> Option<&str> {
        self.string_claim(SUBJECT)
    }

    /// Set or clear the subject (sub)
    pub fn set_subject(&mut self, value: Option<&str>) -> &mut Self {
        self.set_string_claim(SUBJECT, value)
    }

    /// JWT ID (jti) - provides a unique identifier for the JWT
    pub fn jwt_id(&self) -> Option<&str> {
        self.string_claim(JWT_ID)
    }

    /// Set or clear the JWT ID (jti)
    pub fn set_jwt_id(&mut self, value: Option<&str>) -> &mut Self {
        self.set_string_claim(JWT_ID, value)
    }

    // ============================================================================
    // Audience
    // ============================================================================

    /// Audience (aud) when stored as a single string
    ///
    /// Returns `None` when the audience is stored as an array.
    pub fn audience(&self) -> Option<&str> {
        self.string_claim(AUDIENCE)
    }

    /// Store the audience as a single string, replacing any list form
    pub fn set_audience(&mut self, value: Option<&str>) -> &mut Self {
        self.set_string_claim(AUDIENCE, value)
    }

    /// Audience (aud) when stored as an array
    ///
    /// Returns an empty list when the audience is absent or stored as a
    /// single string. Non-string array members are skipped.
    pub fn audiences(&self) -> Vec<&str> {
        match self.claims.get(AUDIENCE) {
            Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
            _ => Vec::new(),
        }
    }

    /// Store the audience as an array, replacing any single-string form
    ///
    /// An empty list clears the claim.
    pub fn set_audiences<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<Value> = values
            .into_iter()
            .map(|value| Value::String(value.into()))
            .collect();

        if values.is_empty() {
            self.claims.remove(AUDIENCE);
        } else {
            self.claims.insert(AUDIENCE.into(), Value::Array(values));
        }
        self
    }

    // ============================================================================
    // Registered timestamp claims
    // ============================================================================

    /// Expiration Time (exp) - seconds since Unix epoch
    pub fn expiration(&self) -> Option<i64> {
        self.timestamp_claim(EXPIRATION)
    }

    /// Set the expiration time; zero or negative clears the claim
    pub fn set_expiration(&mut self, timestamp: i64) -> &mut Self {
        self.set_timestamp_claim(EXPIRATION, timestamp)
    }

    /// Not Before (nbf) - seconds since Unix epoch
    pub fn not_before(&self) -> Option<i64> {
        self.timestamp_claim(NOT_BEFORE)
    }

    /// Set the not-before time; zero or negative clears the claim
    pub fn set_not_before(&mut self, timestamp: i64) -> &mut Self {
        self.set_timestamp_claim(NOT_BEFORE, timestamp)
    }

    /// Issued At (iat) - seconds since Unix epoch
    pub fn issued_at(&self) -> Option<i64> {
        self.timestamp_claim(ISSUED_AT)
    }

    /// Set the issued-at time; zero or negative clears the claim
    pub fn set_issued_at(&mut self, timestamp: i64) -> &mut Self {
        self.set_timestamp_claim(ISSUED_AT, timestamp)
    }

    // ============================================================================
    // Generic access
    // ============================================================================

    /// Set an arbitrary claim
    ///
    /// Registered claim names are not protected: `set_custom("exp", ...)`
    /// overwrites the raw `exp` value.
    pub fn set_custom(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.claims.insert(key.into(), value.into());
        self
    }

    /// Raw value of any claim
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// Remove a claim, returning its value
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.claims.remove(key)
    }

    /// Whether a claim is present
    pub fn contains(&self, key: &str) -> bool {
        self.claims.contains_key(key)
    }

    /// Iterate over all claims
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.claims.iter()
    }

    /// Number of claims present
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claims are present
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Consume the claim set, returning the underlying map
    pub fn into_map(self) -> Map<String, Value> {
        self.claims
    }

    fn string_claim(&self, key: &str) -> Option<&str> {
        self.claims.get(key).and_then(Value::as_str)
    }

    fn set_string_claim(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        match value {
            Some(value) => {
                self.claims.insert(key.into(), Value::String(value.into()));
            }
            None => {
                self.claims.remove(key);
            }
        }
        self
    }

    // Non-numeric and non-positive values read as absent
    fn timestamp_claim(&self, key: &str) -> Option<i64> {
        let value = self.claims.get(key)?;
        let timestamp = value
            .as_i64()
            .or_else(|| value.as_f64().map(|f| f as i64))?;
        (timestamp > 0).then_some(timestamp)
    }

    fn set_timestamp_claim(&mut self, key: &str, timestamp: i64) -> &mut Self {
        if timestamp > 0 {
            self.claims.insert(key.into(), Value::from(timestamp));
        } else {
            self.claims.remove(key);
        }
        self
    }
}

impl From<Map<String, Value>> for ClaimSet {
    /// Wrap a parsed JSON object without validation
    fn from(claims: Map<String, Value>) -> Self {
        Self { claims }
    }
}
