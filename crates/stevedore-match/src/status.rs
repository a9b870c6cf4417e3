use crate::key::{StateKey, KEY_PREFIX_LEN};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("malformed status line '{0}': expected '<verb> <digest-prefix> <name>'")]
    MalformedLine(String),
    #[error("status line '{0}' carries digest prefix '{1}', expected {KEY_PREFIX_LEN} hex characters")]
    BadDigestPrefix(String, String),
}

/// One parsed line of client status output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub verb: String,
    pub key: StateKey,
}

impl StatusLine {
    /// Parse `"<verb> <digest-prefix> <name>"`. The name keeps everything
    /// after the prefix, spaces included.
    pub fn parse(line: &str) -> Result<Self, MatchError> {
        let mut parts = line.trim().splitn(3, ' ');
        let (Some(verb), Some(prefix), Some(name)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(MatchError::MalformedLine(line.to_owned()));
        };
        if prefix.len() != KEY_PREFIX_LEN || !prefix.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(MatchError::BadDigestPrefix(
                line.to_owned(),
                prefix.to_owned(),
            ));
        }
        Ok(Self {
            verb: verb.to_owned(),
            key: StateKey::new(prefix, name),
        })
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.verb, self.key)
    }
}

/// Outcome of checking a transcript against a set of expected keys.
///
/// `missing` keys fail the match. `unexpected` keys are reported but
/// tolerated: transcripts interleave lines for content the expectation list
/// does not cover.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matched: Vec<StateKey>,
    pub missing: Vec<StateKey>,
    pub unexpected: Vec<StateKey>,
}

impl MatchReport {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Checks a captured status transcript against expected state keys.
///
/// Every expected key must appear on a line carrying the success verb.
/// Duplicate expectations must each be observed on their own line.
#[derive(Debug, Clone)]
pub struct StatusMatcher {
    verb: String,
    expected: Vec<StateKey>,
}

impl StatusMatcher {
    /// Matcher for lines carrying the given success verb, e.g. `"Uploaded"`.
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            verb: verb.into(),
            expected: Vec::new(),
        }
    }

    pub fn expect(mut self, key: StateKey) -> Self {
        self.expected.push(key);
        self
    }

    pub fn expect_all(mut self, keys: impl IntoIterator<Item = StateKey>) -> Self {
        self.expected.extend(keys);
        self
    }

    /// Check a transcript. Lines whose first token is not the success verb
    /// are ignored; lines that carry the verb must parse as status lines.
    pub fn check(&self, transcript: &str) -> Result<MatchReport, MatchError> {
        let mut remaining = self.expected.clone();
        let mut report = MatchReport::default();

        for line in transcript.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.split(' ').next() != Some(self.verb.as_str()) {
                trace!("ignoring non-status line: {trimmed}");
                continue;
            }
            let status = StatusLine::parse(trimmed)?;
            if let Some(pos) = remaining.iter().position(|k| *k == status.key) {
                debug!("matched {}", status.key);
                report.matched.push(remaining.remove(pos));
            } else {
                debug!("unexpected {}", status.key);
                report.unexpected.push(status.key);
            }
        }

        for key in &remaining {
            warn!("expected key never observed: {key}");
        }
        report.missing = remaining;
        Ok(report)
    }
}
