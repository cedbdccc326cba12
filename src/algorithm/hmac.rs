use crate::error::{Error, Result};

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the raw HS256 signature of `signing_input`
pub(crate) fn sign_hs256(signing_input: &str, secret: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(signing_input.as_bytes());
    mac.finalize().into_bytes().to_vec()
}

/// Verify HS256 signature with constant-time comparison
pub(crate) fn verify_hs256(signing_input: &str, signature: &[u8], secret: &[u8]) -> Result<()> {
    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| Error::SignatureInvalid)?;
    mac.update(signing_input.as_bytes());
    let expected_signature = mac.finalize().into_bytes();

    if signature.len() != expected_signature.len() {
        return Err(Error::SignatureInvalid);
    }

    if constant_time_eq(signature, &expected_signature) {
        Ok(())
    } else {
        Err(Error::SignatureInvalid)
    }
}
