use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length of the hex portion of a sha256 digest.
const SHA256_HEX_LEN: usize = 64;

/// Length of the truncated digest prefix used in status output and state keys.
pub const SHORT_LEN: usize = 12;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestError {
    #[error("digest '{0}' is missing the ':' algorithm separator")]
    MissingSeparator(String),
    #[error("unsupported digest algorithm '{0}', expected sha256")]
    UnsupportedAlgorithm(String),
    #[error("sha256 digest must be {SHA256_HEX_LEN} hex characters, got {0}")]
    InvalidLength(usize),
    #[error("digest contains non-hex character '{0}'")]
    InvalidHex(char),
}

/// Algorithm-prefixed content digest, e.g. `sha256:2c26b4...`.
///
/// The inner string is stored verbatim. [`Digest::parse`] validates untrusted
/// input; [`Digest::new`] wraps a string the caller vouches for, and
/// [`Digest::from_bytes`] computes a digest that is well-formed by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Digest(String);

impl Digest {
    /// Wrap a digest string without validation.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Validate and wrap an untrusted digest string.
    pub fn parse(s: &str) -> Result<Self, DigestError> {
        let (algorithm, hex) = s
            .split_once(':')
            .ok_or_else(|| DigestError::MissingSeparator(s.to_owned()))?;
        if algorithm != "sha256" {
            return Err(DigestError::UnsupportedAlgorithm(algorithm.to_owned()));
        }
        if hex.len() != SHA256_HEX_LEN {
            return Err(DigestError::InvalidLength(hex.len()));
        }
        if let Some(bad) = hex.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DigestError::InvalidHex(bad));
        }
        Ok(Self(s.to_owned()))
    }

    /// Compute the sha256 digest of the given content.
    pub fn from_bytes(content: &[u8]) -> Self {
        let hash = Sha256::digest(content);
        Self(format!("sha256:{hash:x}"))
    }

    /// Return the full digest string, algorithm prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The algorithm portion before the separator, or the whole string if
    /// the value carries no separator.
    pub fn algorithm(&self) -> &str {
        self.0.split(':').next().unwrap_or(&self.0)
    }

    /// The hex portion after the separator.
    pub fn hex(&self) -> &str {
        self.0.split_once(':').map_or("", |(_, hex)| hex)
    }

    /// The truncated 12-character prefix of the hex portion, as printed in
    /// status output and used by state keys.
    pub fn short(&self) -> &str {
        let hex = self.hex();
        &hex[..hex.len().min(SHORT_LEN)]
    }

    /// Consume self and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Digest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Digest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Digest {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Digest {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOO: &str = "sha256:2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae";

    #[test]
    fn parse_accepts_well_formed_sha256() {
        let d = Digest::parse(FOO).unwrap();
        assert_eq!(d.as_str(), FOO);
        assert_eq!(d.algorithm(), "sha256");
        assert_eq!(d.hex().len(), 64);
    }

    #[test]
    fn parse_rejects_missing_separator() {
        let err = Digest::parse("2c26b46b68ff").unwrap_err();
        assert!(matches!(err, DigestError::MissingSeparator(_)));
    }

    #[test]
    fn parse_rejects_unknown_algorithm() {
        let err = Digest::parse("sha512:abcd").unwrap_err();
        assert_eq!(
            err,
            DigestError::UnsupportedAlgorithm("sha512".to_owned())
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = Digest::parse("sha256:abcd").unwrap_err();
        assert_eq!(err, DigestError::InvalidLength(4));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let mut s = String::from("sha256:");
        s.push_str(&"z".repeat(64));
        let err = Digest::parse(&s).unwrap_err();
        assert_eq!(err, DigestError::InvalidHex('z'));
    }

    #[test]
    fn from_bytes_matches_known_vector() {
        assert_eq!(Digest::from_bytes(b"foo").as_str(), FOO);
    }

    #[test]
    fn from_bytes_is_always_parseable() {
        let d = Digest::from_bytes(b"anything at all");
        assert!(Digest::parse(d.as_str()).is_ok());
    }

    #[test]
    fn short_is_first_12_hex_chars() {
        let d = Digest::parse(FOO).unwrap();
        assert_eq!(d.short(), "2c26b46b68ff");
        assert_eq!(d.short().len(), SHORT_LEN);
        assert!(d.hex().starts_with(d.short()));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        let d: Digest = FOO.parse().unwrap();
        assert_eq!(d.to_string(), FOO);
    }

    #[test]
    fn serde_is_a_plain_string() {
        let d = Digest::new(FOO);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, format!("\"{FOO}\""));
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
