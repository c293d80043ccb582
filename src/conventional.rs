//! Conventional commit message parsing
//!
//! Parses `type(scope)!: description` headers. A body, when present, must be
//! separated from the header by a blank line. Scope and the `!` marker are
//! accepted but not kept.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::CommitType;

static HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>[A-Za-z]+)(?:\([^()\r\n]+\))?!?: (?P<description>\S.*)$")
        .expect("header regex is valid")
});

/// Type and description of a conventional commit; the type keeps its case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommit {
    pub r#type: String,
    pub description: String,
}

/// Why a message is not a conventional commit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty commit message")]
    Empty,

    #[error("merge commit")]
    Merge,

    #[error("header does not match 'type(scope): description'")]
    MalformedHeader,

    #[error("missing blank line between header and body")]
    MissingBlankLine,

    #[error("type '{0}' is not a conventional commit type")]
    UnknownType(String),
}

/// Turns a raw commit message into a structured type/description pair
pub trait CommitMessageParser {
    fn parse(&self, message: &str) -> Result<ParsedCommit, ParseError>;
}

/// Regex-backed conventional commit parser
#[derive(Debug, Clone, Default)]
pub struct ConventionalParser {
    strict_types: bool,
}

impl ConventionalParser {
    /// Accepts any alphabetic type
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects types outside the conventional taxonomy
    pub fn strict() -> Self {
        ConventionalParser { strict_types: true }
    }

    pub fn with_strict_types(strict_types: bool) -> Self {
        ConventionalParser { strict_types }
    }
}

impl CommitMessageParser for ConventionalParser {
    fn parse(&self, message: &str) -> Result<ParsedCommit, ParseError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ParseError::Empty);
        }
        if message.starts_with("Merge ") {
            return Err(ParseError::Merge);
        }

        let mut lines = message.lines();
        let header = lines.next().unwrap_or_default().trim_end();
        let captures = HEADER_REGEX
            .captures(header)
            .ok_or(ParseError::MalformedHeader)?;

        let r#type = captures["type"].to_string();
        if self.strict_types && !CommitType::is_known(&r#type) {
            return Err(ParseError::UnknownType(r#type));
        }

        if lines.next().is_some_and(|separator| !separator.trim().is_empty()) {
            return Err(ParseError::MissingBlankLine);
        }

        Ok(ParsedCommit {
            r#type,
            description: captures["description"].trim_end().to_string(),
        })
    }
}
