//! Voter and candidate identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque voter identifier, unique within one ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The candidate a ballot selects.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Candidate(String);

impl Candidate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Candidate {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for Candidate {
    fn from(s: String) -> Self {
        Self(s)
    }
}
