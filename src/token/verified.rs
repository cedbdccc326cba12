use crate::claims::{ClaimSet, ClaimsValidation, validate_claims};
use crate::error::Result;
use crate::token::TokenHeader;

/// A JWT token whose signature has been cryptographically verified
///
/// This is the second stage in the reading pipeline. The claims can now be
/// inspected; only temporal validation remains.
pub(crate) struct VerifiedToken {
    header: TokenHeader,
    claims: ClaimSet,
}

impl VerifiedToken {
    pub(crate) fn new(header: TokenHeader, claims: ClaimSet) -> Self {
        Self { header, claims }
    }

    /// Get the token header
    pub(crate) fn header(&self) -> &TokenHeader {
        &self.header
    }

    /// Validate `exp`/`nbf` against `now` and release the claims
    pub(crate) fn validate(self, config: &ClaimsValidation, now: i64) -> Result<ClaimSet> {
        validate_claims(&self.claims, config, now)?;
        Ok(self.claims)
    }
}
