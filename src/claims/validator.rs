use crate::claims::ClaimSet;
use crate::error::{Error, Result};
use crate::limits::MAX_CLOCK_SKEW_SECONDS;

/// Configuration for temporal claims validation
///
/// The default checks `exp` and `nbf` with no clock skew: a token is expired
/// once `exp <= now`, and not yet valid while `nbf > now`.
#[derive(Debug, Clone)]
pub struct ClaimsValidation {
    validate_exp: bool,
    validate_nbf: bool,
    clock_skew_seconds: u64,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            validate_exp: true,
            validate_nbf: true,
            clock_skew_seconds: 0,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set clock skew tolerance
    ///
    /// # Security
    /// Values above 300 seconds (5 minutes) are clamped so that skew cannot
    /// effectively disable expiration checks.
    pub fn clock_skew(mut self, seconds: u64) -> Self {
        self.clock_skew_seconds = seconds.min(MAX_CLOCK_SKEW_SECONDS);
        self
    }

    /// Disable expiration validation
    pub fn no_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    /// Disable not-before validation
    pub fn no_nbf_validation(mut self) -> Self {
        self.validate_nbf = false;
        self
    }
}

/// Validate time-bound claims against `now`
///
/// Absent, zero and negative timestamps are not checked.
pub(crate) fn validate_claims(
    claims: &ClaimSet,
    config: &ClaimsValidation,
    now: i64,
) -> Result<()> {
    let skew = config.clock_skew_seconds as i64;

    if config.validate_exp {
        if let Some(exp) = claims.expiration() {
            if now >= exp.saturating_add(skew) {
                return Err(Error::TokenExpired {
                    expired_at: exp,
                    now,
                    skew: config.clock_skew_seconds,
                });
            }
        }
    }

    if config.validate_nbf {
        if let Some(nbf) = claims.not_before() {
            if nbf.saturating_sub(skew) > now {
                return Err(Error::TokenNotYetValid {
                    not_before: nbf,
                    now,
                    skew: config.clock_skew_seconds,
                });
            }
        }
    }

    Ok(())
}
