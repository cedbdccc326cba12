use crate::algorithm::hmac::verify_hs256;
use crate::claims::ClaimSet;
use crate::error::{FormatError, Result};
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_SIGNATURE_B64_SIZE, MAX_TOKEN_LENGTH,
};
use crate::token::{TokenHeader, VerifiedToken};
use crate::utils::base64url;
use serde_json::Value;

/// A JWT token that has been parsed but not yet verified
///
/// This is the first stage in the reading pipeline. At this stage we have:
/// - Split the token into three non-empty parts
/// - Decoded all three parts
/// - Validated the header (`typ` and `alg`)
/// - Checked that the payload is a JSON object
///
/// Nothing here is trusted until [`verify_signature`](Self::verify_signature)
/// succeeds.
pub(crate) struct ParsedToken<'a> {
    header: TokenHeader,
    signing_input: &'a str,
    signature: Vec<u8>,
    claims: ClaimSet,
}

impl<'a> ParsedToken<'a> {
    /// Parse a JWT token from a string
    pub(crate) fn from_string(token: &'a str) -> Result<Self> {
        if token.len() > MAX_TOKEN_LENGTH {
            return Err(FormatError::TokenTooLarge {
                size: token.len(),
                max: MAX_TOKEN_LENGTH,
            }
            .into());
        }

        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or(FormatError::InvalidStructure)?;
        let payload_b64 = parts.next().ok_or(FormatError::InvalidStructure)?;
        let signature_b64 = parts.next().ok_or(FormatError::InvalidStructure)?;
        if parts.next().is_some() {
            return Err(FormatError::InvalidStructure.into());
        }
        if header_b64.is_empty() || payload_b64.is_empty() || signature_b64.is_empty() {
            return Err(FormatError::InvalidStructure.into());
        }

        if signature_b64.len() > MAX_SIGNATURE_B64_SIZE {
            return Err(FormatError::SignatureTooLarge {
                size: signature_b64.len(),
                max: MAX_SIGNATURE_B64_SIZE,
            }
            .into());
        }

        let header_json = base64url::decode_string(header_b64, MAX_DECODED_HEADER_SIZE)?;
        let payload_json = base64url::decode_string(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?;
        let signature = base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?;

        let header = TokenHeader::from_json(&header_json)?;

        let payload: Value = serde_json::from_str(&payload_json)
            .map_err(|e| FormatError::InvalidJson(format!("Failed to parse payload: {e}")))?;
        let Value::Object(claims) = payload else {
            return Err(FormatError::ClaimsNotObject.into());
        };

        Ok(Self {
            header,
            signing_input: &token[..header_b64.len() + 1 + payload_b64.len()],
            signature,
            claims: ClaimSet::from(claims),
        })
    }

    /// Verify the signature and move to VerifiedToken state
    pub(crate) fn verify_signature(self, secret: &[u8]) -> Result<VerifiedToken> {
        verify_hs256(self.signing_input, &self.signature, secret)?;
        Ok(VerifiedToken::new(self.header, self.claims))
    }
}
