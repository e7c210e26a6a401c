//! Reference classification.
//!
//! A reference is either a URL or a local filesystem path. The distinction is
//! purely structural: a lowercase prefix match on the scheme. Context files
//! store references as plain strings, so this predicate is also the file
//! format's contract.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Schemes that route a reference to the URL handler.
const URL_PREFIXES: [&str; 3] = ["http://", "https://", "file://"];

/// The two kinds of reference a context can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceKind {
    Url,
    LocalPath,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Url => "url",
            ReferenceKind::LocalPath => "path",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a reference string. Every string maps to exactly one kind.
pub fn classify(s: &str) -> ReferenceKind {
    let lower = s.to_lowercase();
    if URL_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        ReferenceKind::Url
    } else {
        ReferenceKind::LocalPath
    }
}

/// A non-blank reference string.
///
/// Serializes as the bare string so context files stay plain arrays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reference(String);

impl Reference {
    /// Build a reference from user input, trimming surrounding whitespace.
    ///
    /// Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() { None } else { Some(Self(trimmed.to_string())) }
    }

    pub fn kind(&self) -> ReferenceKind {
        classify(&self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Reference {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
