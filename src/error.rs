use thiserror::Error;

/// Unified error type for git-changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not enough tags defined: found {found}, need at least 2")]
    InsufficientTags { found: usize },

    #[error("Tag '{tag}' is the first one, there is no previous tag to compare against")]
    NoPrecedingTag { tag: String },

    #[error("Couldn't find a to tag preceding '{from}'")]
    ToTagUnresolved { from: String },

    #[error("Unknown tag: '{tag}'")]
    UnknownTag { tag: String },

    #[error("Failed to render changelog onto {target}: {source}")]
    Render {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create an unknown tag error
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        ChangelogError::UnknownTag { tag: tag.into() }
    }

    /// Wrap an I/O failure on a named output target
    pub fn render(target: impl Into<String>, source: std::io::Error) -> Self {
        ChangelogError::Render {
            target: target.into(),
            source,
        }
    }
}
