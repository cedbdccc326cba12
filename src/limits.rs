//! Size limit constants for input validation

/// Maximum length for a JWT token string (64KB)
///
/// Tokens longer than this are rejected by the reader, so [`write`](crate::write)
/// must not produce them either.
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
/// Headers are typically small (< 1KB), but we allow reasonable margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT payload JSON (64KB)
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 64 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// An HS256 signature is 32 bytes; anything near this limit is garbage
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

/// Maximum size for Base64URL-encoded signature string (1.5KB)
pub(crate) const MAX_SIGNATURE_B64_SIZE: usize = 1536;

/// Maximum clock skew tolerance (300 seconds = 5 minutes)
/// Larger values are clamped so skew cannot disable expiration checks
pub(crate) const MAX_CLOCK_SKEW_SECONDS: u64 = 300;
