//! Core type definitions for yanews

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a news item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NewsId(pub u64);

impl fmt::Display for NewsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NewsId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(NewsId(s.trim().parse()?))
    }
}

/// Unique identifier for a comment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CommentId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CommentId(s.trim().parse()?))
    }
}

/// An authenticated requester.
///
/// Two identities are equal iff they name the same user. Anonymous
/// requests carry no identity at all (`Option<Identity>::None`).
/// Deserialization goes through [`Identity::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    /// Create an identity for the given username
    pub fn new(username: impl Into<String>) -> crate::Result<Self> {
        let username = username.into();
        let trimmed = username.trim();
        if trimmed.is_empty() {
            return Err(crate::NewsError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }
        Ok(Identity(trimmed.to_string()))
    }

    /// Get the username
    pub fn username(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identity {
    type Error = crate::NewsError;

    fn try_from(username: String) -> crate::Result<Self> {
        Identity::new(username)
    }
}

impl From<Identity> for String {
    fn from(identity: Identity) -> Self {
        identity.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sequential id allocator.
///
/// Ids are never reissued, even after the entity they named is deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    last: u64,
}

impl Sequence {
    /// Create a sequence starting at 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next value
    pub fn next_value(&mut self) -> u64 {
        self.last += 1;
        self.last
    }

    /// Last value handed out (0 when none)
    pub fn last(&self) -> u64 {
        self.last
    }
}
