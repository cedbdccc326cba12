use crate::algorithm::AlgorithmId;
use crate::error::{FormatError, Result};
use serde_json::{Map, Value};

/// The only header this crate emits
pub(crate) const HS256_HEADER: &str = r#"{"typ":"JWT","alg":"HS256"}"#;

/// JWT header after structural validation
///
/// Fields other than `typ` and `alg` are tolerated and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenHeader {
    /// Algorithm used for signing
    pub algorithm: AlgorithmId,
}

impl TokenHeader {
    /// Parse and validate decoded header JSON
    ///
    /// `typ` must be the string `"JWT"` and `alg` must be the string
    /// `"HS256"`; `typ` is checked first.
    pub(crate) fn from_json(header_json: &str) -> Result<Self> {
        let header: Value = serde_json::from_str(header_json)
            .map_err(|e| FormatError::InvalidJson(format!("Failed to parse header: {e}")))?;
        let header = header.as_object().ok_or(FormatError::HeaderNotObject)?;

        let token_type = string_field(header, "typ")?;
        if token_type != "JWT" {
            return Err(FormatError::UnsupportedTokenType(token_type.to_string()).into());
        }

        let algorithm = AlgorithmId::from_str(string_field(header, "alg")?)?;

        Ok(Self { algorithm })
    }
}

fn string_field<'a>(header: &'a Map<String, Value>, field: &'static str) -> Result<&'a str> {
    match header.get(field) {
        Some(Value::String(value)) => Ok(value.as_str()),
        Some(_) => Err(FormatError::HeaderFieldNotString(field).into()),
        None => Err(FormatError::MissingHeaderField(field).into()),
    }
}
