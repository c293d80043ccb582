use std::fmt;

/// Non-fatal conditions hit while assembling a changelog.
/// These are reported to the user but never stop the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A commit message is not a conventional commit and was left out
    UnparsableCommit { hash: String, reason: String },
    /// No conventional commits between the two tags
    EmptyChangelog { from_tag: String, to_tag: String },
    /// Neither stdout nor an output file was requested
    NoOutputTarget,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableCommit { hash, reason } => {
                let short_hash = if hash.len() > 7 { &hash[..7] } else { hash };
                write!(f, "Skipping commit {}: {}", short_hash, reason)
            }
            BoundaryWarning::EmptyChangelog { from_tag, to_tag } => {
                write!(
                    f,
                    "No conventional commits between '{}' and '{}'",
                    to_tag, from_tag
                )
            }
            BoundaryWarning::NoOutputTarget => {
                write!(f, "No output selected; pass --stdout or --out <PATH>")
            }
        }
    }
}
