mod header;
mod parsed;
mod verified;

pub(crate) use header::{HS256_HEADER, TokenHeader};
pub(crate) use parsed::ParsedToken;
pub(crate) use verified::VerifiedToken;
