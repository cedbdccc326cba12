//! # hsjwt - Minimal HS256 JSON Web Tokens
//!
//! **hsjwt** issues and validates compact JSON Web Tokens signed with HMAC-SHA256.
//! It targets applications that need stateless, verifiable claims (session
//! assertions and the like) without a server-side session store.
//!
//! ## Quick Start
//!
//! ```
//! use hsjwt::{ClaimSet, read, write};
//!
//! let mut claims = ClaimSet::new();
//! claims.set_issuer(Some("example.com")).set_subject(Some("user123"));
//!
//! let token = write(&claims, b"secret");
//! let claims = read(&token, b"secret")?;
//!
//! assert_eq!(claims.issuer(), Some("example.com"));
//! # Ok::<(), hsjwt::Error>(())
//! ```
//!
//! ## Reading Pipeline
//!
//! ```text
//! token string
//!     │ split into three non-empty parts, decode, validate header and payload shape
//!     ▼
//! ParsedToken (internal)              ── Error::Format
//!     │ HMAC-SHA256 over "header.payload", constant-time comparison
//!     ▼
//! VerifiedToken (internal)            ── Error::SignatureInvalid
//!     │ exp / nbf against the clock
//!     ▼
//! ClaimSet                            ── Error::TokenExpired / Error::TokenNotYetValid
//! ```
//!
//! Stages run in order and each gates the next, so a token with a bad
//! signature is never reported as expired. Claims are only released after
//! every check passes.
//!
//! ## Security
//!
//! - Only `HS256` is accepted; `none` and every other algorithm are rejected
//!   as format errors, which rules out algorithm confusion.
//! - Signature comparison is constant-time via
//!   [`constant_time_eq`](https://crates.io/crates/constant_time_eq).
//! - Token, segment and decoded sizes are bounded before any JSON is parsed.
//!
//! ## References
//!
//! - [RFC 7515](https://datatracker.ietf.org/doc/html/rfc7515): JSON Web Signature (JWS)
//! - [RFC 7519](https://datatracker.ietf.org/doc/html/rfc7519): JSON Web Token (JWT)
//! - [RFC 8725](https://datatracker.ietf.org/doc/html/rfc8725): JSON Web Signature Best Practices

mod error;

// Internal modules
pub(crate) mod algorithm;
pub(crate) mod claims;
pub(crate) mod clock;
pub(crate) mod reader;
pub(crate) mod token;
pub(crate) mod utils;
pub(crate) mod writer;

pub(crate) mod limits;

// Public Interface
pub use claims::{ClaimSet, ClaimsValidation};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, ErrorKind, FormatError, Result};
pub use limits::MAX_TOKEN_LENGTH;
pub use reader::{TokenReader, read};
pub use writer::write;
