pub(crate) mod hmac;

use crate::error::{FormatError, Result};

/// Algorithm identifier from JWT header
///
/// HS256 is the only signing algorithm this crate produces or accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AlgorithmId {
    /// HMAC with SHA-256
    HS256,
}

impl AlgorithmId {
    /// Parse algorithm string from JWT header
    pub(crate) fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Err(FormatError::NoneAlgorithmRejected.into()),
            "HS256" => Ok(AlgorithmId::HS256),
            _ => Err(FormatError::UnsupportedAlgorithm(s.to_string()).into()),
        }
    }

    /// Convert to string representation
    pub(crate) const fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HS256 => "HS256",
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_algorithm_from_str() {
        assert_eq!(AlgorithmId::from_str("HS256").unwrap(), AlgorithmId::HS256);

        assert!(matches!(
            AlgorithmId::from_str("none"),
            Err(Error::Format(FormatError::NoneAlgorithmRejected))
        ));

        for alg in ["HS384", "HS512", "RS256", "ES256", "hs256", ""] {
            assert_eq!(
                AlgorithmId::from_str(alg),
                Err(Error::Format(FormatError::UnsupportedAlgorithm(alg.into())))
            );
        }
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(format!("{}", AlgorithmId::HS256), "HS256");
        assert_eq!(AlgorithmId::HS256.as_str(), "HS256");
    }
}
