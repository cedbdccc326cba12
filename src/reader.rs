use crate::claims::{ClaimSet, ClaimsValidation};
use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::token::ParsedToken;
use std::sync::Arc;
use tracing::{debug, warn};

/// Clock shared across reader clones
pub(crate) type SharedClock = Arc<dyn Clock + Send + Sync + 'static>;

/// HS256 token reader
///
/// The reader is configured once and can be reused for multiple tokens.
/// Checks run in a fixed order: structure, then signature, then `exp`/`nbf`.
/// A token with a bad signature is reported as such even if it has also
/// expired.
///
/// # Examples
///
/// ```
/// use hsjwt::{ClaimSet, ClaimsValidation, FixedClock, TokenReader, write};
///
/// let mut claims = ClaimSet::new();
/// claims.set_subject(Some("user123")).set_expiration(1_700_000_060);
/// let token = write(&claims, b"secret");
///
/// let reader = TokenReader::new(b"secret")
///     .validate(ClaimsValidation::default().clock_skew(30))
///     .clock(FixedClock(1_700_000_000))
///     .build();
///
/// assert_eq!(reader.read(&token).unwrap().subject(), Some("user123"));
/// ```
#[derive(Clone)]
pub struct TokenReader {
    config_secret: Arc<[u8]>,
    config_claims: ClaimsValidation,
    config_clock: SharedClock,
}

impl TokenReader {
    /// Create a reader for tokens signed with `secret`
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            config_secret: secret.as_ref().into(),
            config_claims: ClaimsValidation::default(),
            config_clock: Arc::new(SystemClock),
        }
    }

    /// Configure claims validation
    pub fn validate(&mut self, config: ClaimsValidation) -> &mut Self {
        self.config_claims = config;
        self
    }

    /// Configure the clock used for `exp`/`nbf` checks
    pub fn clock<C>(&mut self, clock: C) -> &mut Self
    where
        C: Clock + Send + Sync + 'static,
    {
        self.config_clock = Arc::new(clock);
        self
    }

    /// Finish configuration
    pub fn build(&mut self) -> Self {
        self.clone()
    }

    /// Read and validate a token
    ///
    /// Returns the claims only when every check passes.
    pub fn read(&self, token: &str) -> Result<ClaimSet> {
        let parsed = ParsedToken::from_string(token)
            .inspect_err(|e| debug!(error = %e, "rejected malformed token"))?;

        let verified = parsed
            .verify_signature(&self.config_secret)
            .inspect_err(|_| warn!("rejected token with invalid signature"))?;
        let algorithm = verified.header().algorithm;

        let now = self.config_clock.now();
        let claims = verified
            .validate(&self.config_claims, now)
            .inspect_err(|e| debug!(error = %e, "rejected token outside its validity window"))?;

        debug!(%algorithm, claims = claims.len(), "token accepted");
        Ok(claims)
    }
}

impl std::fmt::Debug for TokenReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenReader")
            .field("config_secret", &"<redacted>")
            .field("config_claims", &self.config_claims)
            .finish_non_exhaustive()
    }
}

/// Read and validate a token with default settings
///
/// Equivalent to `TokenReader::new(secret).read(token)`: HS256 only, `exp`
/// and `nbf` checked against the system clock with no skew.
pub fn read(token: &str, secret: impl AsRef<[u8]>) -> Result<ClaimSet> {
    TokenReader::new(secret).read(token)
}
