//! Error types for token writing and reading
//!
//! Every failure of [`read`](crate::read) is one of four kinds: the token is
//! malformed, its signature does not match, it has expired, or it is not yet
//! valid. Collaborator failures (Base64URL, UTF-8, JSON) are folded into
//! [`FormatError`] before they reach the caller.

use thiserror::Error;

/// Errors returned while reading a token
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Format Errors
    // ============================================================================
    #[error("Invalid JWT format: {0}")]
    Format(#[from] FormatError),

    // ============================================================================
    // Signature Errors
    // ============================================================================
    #[error("Signature verification failed")]
    SignatureInvalid,

    // ============================================================================
    // Token Errors
    // ============================================================================
    #[error("Token expired at {expired_at} (now: {now}, skew: {skew}s)")]
    TokenExpired {
        expired_at: i64,
        now: i64,
        skew: u64,
    },

    #[error("Token not valid until {not_before} (now: {now}, skew: {skew}s)")]
    TokenNotYetValid {
        not_before: i64,
        now: i64,
        skew: u64,
    },
}

/// Structural problems found before the signature is checked
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("token too large: {size} bytes (maximum: {max} bytes)")]
    TokenTooLarge { size: usize, max: usize },

    #[error("expected three non-empty parts separated by '.'")]
    InvalidStructure,

    #[error("signature segment too large: {size} bytes (maximum: {max} bytes)")]
    SignatureTooLarge { size: usize, max: usize },

    #[error("Base64URL decoding failed: {0}")]
    InvalidBase64(String),

    #[error("decoded segment is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    #[error("JSON parsing failed: {0}")]
    InvalidJson(String),

    #[error("header is not a JSON object")]
    HeaderNotObject,

    #[error("header is missing the '{0}' field")]
    MissingHeaderField(&'static str),

    #[error("header field '{0}' is not a string")]
    HeaderFieldNotString(&'static str),

    #[error("unsupported token type '{0}', expected 'JWT'")]
    UnsupportedTokenType(String),

    #[error("algorithm '{0}' is not supported, only HS256 is accepted")]
    UnsupportedAlgorithm(String),

    #[error("the 'none' algorithm is rejected (RFC 8725)")]
    NoneAlgorithmRejected,

    #[error("claims payload is not a JSON object")]
    ClaimsNotObject,
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token could not be parsed
    Format,
    /// The token parsed but its signature did not match
    Verification,
    /// The `exp` claim is at or before the current time
    Expired,
    /// The `nbf` claim is after the current time
    NotYetValid,
}

impl Error {
    /// Kind of failure, for callers that only care about the category
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Format(_) => ErrorKind::Format,
            Error::SignatureInvalid => ErrorKind::Verification,
            Error::TokenExpired { .. } => ErrorKind::Expired,
            Error::TokenNotYetValid { .. } => ErrorKind::NotYetValid,
        }
    }
}

/// Result type alias for token operations
pub type Result<T> = std::result::Result<T, Error>;
