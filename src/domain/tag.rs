use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Represents a git tag
///
/// Tags compare by their names, so sorting a list of tags orders it
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract version number from tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> &str {
        self.name.trim_start_matches('v').trim_start_matches('V')
    }

    /// Parse the tag name as a semantic version, if it is one
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(self.version_part()).ok()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::new(name)
    }
}

/// How tags are ordered when picking "latest" and "previous"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TagOrder {
    /// Plain string comparison of tag names
    #[default]
    Lexicographic,
    /// Semantic version comparison; names that aren't versions sort first
    Semver,
}

impl TagOrder {
    /// Compare two tags under this ordering
    pub fn compare(&self, a: &Tag, b: &Tag) -> Ordering {
        match self {
            TagOrder::Lexicographic => a.cmp(b),
            TagOrder::Semver => match (a.semver(), b.semver()) {
                (Some(va), Some(vb)) => va.cmp(&vb).then_with(|| a.cmp(b)),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => a.cmp(b),
            },
        }
    }

    /// Sort tags ascending under this ordering
    pub fn sort(&self, tags: &mut [Tag]) {
        tags.sort_by(|a, b| self.compare(a, b));
    }
}

/// User-supplied choice for one end of the tag range
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagSelector {
    /// Let the resolver pick
    #[default]
    Auto,
    /// A literal tag name
    Named(String),
}

impl TagSelector {
    pub fn is_auto(&self) -> bool {
        matches!(self, TagSelector::Auto)
    }
}

impl FromStr for TagSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TagSelector::from(s))
    }
}

impl From<&str> for TagSelector {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("auto") {
            TagSelector::Auto
        } else {
            TagSelector::Named(s.to_string())
        }
    }
}

impl fmt::Display for TagSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagSelector::Auto => f.write_str("auto"),
            TagSelector::Named(name) => f.write_str(name),
        }
    }
}

/// The resolved pair of tags bounding a changelog
///
/// `from` is the newer tag, `to` the older one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRange {
    pub from: Tag,
    pub to: Tag,
}
