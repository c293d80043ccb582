use std::fmt;

/// Identity of a commit author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Author {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// One commit as read from the repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Full hex commit hash
    pub id: String,
    pub author: Author,
    /// Raw, untrimmed commit message
    pub message: String,
}

impl CommitRecord {
    pub fn new(id: impl Into<String>, author: Author, message: impl Into<String>) -> Self {
        CommitRecord {
            id: id.into(),
            author,
            message: message.into(),
        }
    }
}

/// Conventional commit classification
///
/// Anything outside the known taxonomy lands in [`CommitType::Unclassified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommitType {
    Feat,
    Fix,
    Perf,
    Refactor,
    Revert,
    Docs,
    Build,
    Ci,
    Test,
    Style,
    Chore,
    Unclassified,
}

impl CommitType {
    /// Every variant, in the order sections are rendered
    pub const ALL: [CommitType; 12] = [
        CommitType::Feat,
        CommitType::Fix,
        CommitType::Perf,
        CommitType::Refactor,
        CommitType::Revert,
        CommitType::Docs,
        CommitType::Build,
        CommitType::Ci,
        CommitType::Test,
        CommitType::Style,
        CommitType::Chore,
        CommitType::Unclassified,
    ];

    /// Map a conventional commit type string to its variant.
    ///
    /// Exact match only; unknown strings map to `Unclassified`.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "feat" => CommitType::Feat,
            "fix" => CommitType::Fix,
            "perf" => CommitType::Perf,
            "refactor" => CommitType::Refactor,
            "revert" => CommitType::Revert,
            "docs" => CommitType::Docs,
            "build" => CommitType::Build,
            "ci" => CommitType::Ci,
            "test" => CommitType::Test,
            "style" => CommitType::Style,
            "chore" => CommitType::Chore,
            _ => CommitType::Unclassified,
        }
    }

    /// Canonical type string; `None` for the sentinel
    pub fn type_name(&self) -> Option<&'static str> {
        match self {
            CommitType::Feat => Some("feat"),
            CommitType::Fix => Some("fix"),
            CommitType::Perf => Some("perf"),
            CommitType::Refactor => Some("refactor"),
            CommitType::Revert => Some("revert"),
            CommitType::Docs => Some("docs"),
            CommitType::Build => Some("build"),
            CommitType::Ci => Some("ci"),
            CommitType::Test => Some("test"),
            CommitType::Style => Some("style"),
            CommitType::Chore => Some("chore"),
            CommitType::Unclassified => None,
        }
    }

    /// Section heading used in rendered changelogs
    pub fn section_title(&self) -> &'static str {
        match self {
            CommitType::Feat => "Features",
            CommitType::Fix => "Bug Fixes",
            CommitType::Perf => "Performance Improvements",
            CommitType::Refactor => "Code Refactoring",
            CommitType::Revert => "Reverts",
            CommitType::Docs => "Documentation",
            CommitType::Build => "Build System",
            CommitType::Ci => "Continuous Integration",
            CommitType::Test => "Tests",
            CommitType::Style => "Styles",
            CommitType::Chore => "Chores",
            CommitType::Unclassified => "Other Changes",
        }
    }

    /// Whether `name` is one of the known conventional types
    pub fn is_known(name: &str) -> bool {
        CommitType::from_type_name(name) != CommitType::Unclassified
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name().unwrap_or("unclassified"))
    }
}
