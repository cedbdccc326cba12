//! Token writer
//!
//! Serializes a [`ClaimSet`] into a compact HS256-signed JWT:
//!
//! ```text
//! base64url(header) "." base64url(claims) "." base64url(HMAC-SHA256(secret, signing input))
//! ```

use crate::algorithm::hmac::sign_hs256;
use crate::claims::ClaimSet;
use crate::limits::MAX_TOKEN_LENGTH;
use crate::token::HS256_HEADER;
use crate::utils::base64url;
use tracing::debug;

/// Sign `claims` with `secret` and return the compact token
///
/// The header is always `{"typ":"JWT","alg":"HS256"}`. Any secret is
/// accepted, including an empty one.
///
/// The token must fit in [`MAX_TOKEN_LENGTH`] bytes to be readable. That
/// leaves roughly 48 KiB for the serialized claims. Writing a larger claim
/// set is a caller error and trips a debug assertion.
///
/// # Examples
///
/// ```
/// use hsjwt::{ClaimSet, read, write};
///
/// let mut claims = ClaimSet::new();
/// claims.set_issuer(Some("example.com"));
///
/// let token = write(&claims, "test");
/// assert_eq!(read(&token, "test").unwrap().issuer(), Some("example.com"));
/// ```
pub fn write(claims: &ClaimSet, secret: impl AsRef<[u8]>) -> String {
    let header_b64 = base64url::encode(HS256_HEADER);
    let claims_b64 = base64url::encode(&claims.to_json());
    let signing_input = format!("{header_b64}.{claims_b64}");

    let signature = sign_hs256(&signing_input, secret.as_ref());
    let token = format!("{signing_input}.{}", base64url::encode_bytes(&signature));

    debug_assert!(
        token.len() <= MAX_TOKEN_LENGTH,
        "token of {} bytes exceeds MAX_TOKEN_LENGTH ({MAX_TOKEN_LENGTH})",
        token.len()
    );

    debug!(claims = claims.len(), size = token.len(), "token written");
    token
}
