//! Buckets a commit stream by conventional commit type

use tracing::{debug, warn};

use crate::boundary::BoundaryWarning;
use crate::conventional::CommitMessageParser;
use crate::domain::{AuthorRegistry, ClassifiedCommitSet, CommitRecord, CommitType};

/// Outcome of classifying one commit range
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub commits: ClassifiedCommitSet,
    pub authors: AuthorRegistry,
    /// Commits left out because their message didn't parse
    pub skipped: Vec<BoundaryWarning>,
}

pub struct CommitClassifier<'a, P: CommitMessageParser> {
    parser: &'a P,
}

impl<'a, P: CommitMessageParser> CommitClassifier<'a, P> {
    pub fn new(parser: &'a P) -> Self {
        CommitClassifier { parser }
    }

    /// Consume `commits` once, in order.
    ///
    /// Commits whose id equals `boundary_id` are skipped every time they
    /// show up. Unparsable messages are logged and left out; they never
    /// reach a bucket or the author registry.
    pub fn classify<I>(&self, commits: I, boundary_id: &str) -> Classification
    where
        I: IntoIterator<Item = CommitRecord>,
    {
        let mut classification = Classification::default();

        for commit in commits {
            if commit.id == boundary_id {
                continue;
            }

            let message = commit.message.trim();
            let parsed = match self.parser.parse(message) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!(hash = %commit.id, %message, reason = %e, "not a conventional commit");
                    classification
                        .skipped
                        .push(BoundaryWarning::UnparsableCommit {
                            hash: commit.id,
                            reason: e.to_string(),
                        });
                    continue;
                }
            };

            let commit_type = CommitType::from_type_name(&parsed.r#type);
            debug!(hash = %commit.id, %commit_type, "classified commit");

            classification
                .commits
                .insert(commit_type, commit.id, parsed.description);
            classification
                .authors
                .record(commit.author.email, commit.author.name);
        }

        classification
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventional::ConventionalParser;
    use crate::domain::Author;
    use tracing_test::traced_test;

    fn record(id: &str, email: &str, message: &str) -> CommitRecord {
        CommitRecord::new(id, Author::new(email.split('@').next().unwrap(), email), message)
    }

    fn classify(commits: Vec<CommitRecord>, boundary: &str) -> Classification {
        let parser = ConventionalParser::new();
        CommitClassifier::new(&parser).classify(commits, boundary)
    }

    #[test]
    fn test_parsed_commit_lands_in_its_bucket() {
        let result = classify(
            vec![
                record("aaa", "ann@example.com", "fix: correct off-by-one"),
                record("bbb", "bob@example.com", "not a commit format"),
            ],
            "zzz",
        );

        let fixes = result.commits.get(CommitType::Fix).unwrap();
        assert_eq!(fixes.len(), 1);
        assert_eq!(fixes.get("aaa"), Some(&"correct off-by-one".to_string()));
        assert!(!result.commits.contains_id("bbb"));
        assert_eq!(result.commits.len(), 1);
    }

    #[test]
    fn test_unparsable_commit_is_not_an_author() {
        let result = classify(
            vec![
                record("aaa", "ann@example.com", "fix: correct off-by-one"),
                record("bbb", "bob@example.com", "not a commit format"),
            ],
            "zzz",
        );

        assert_eq!(result.authors.len(), 1);
        assert_eq!(result.authors.name_for("bob@example.com"), None);
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    fn test_unknown_type_is_unclassified() {
        let result = classify(vec![record("aaa", "ann@example.com", "wip: half done")], "zzz");

        let other = result.commits.get(CommitType::Unclassified).unwrap();
        assert_eq!(other.get("aaa"), Some(&"half done".to_string()));
        assert_eq!(result.authors.len(), 1);
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let result = classify(vec![record("aaa", "ann@example.com", "FIX: upper")], "zzz");

        assert!(result.commits.get(CommitType::Fix).is_none());
        let other = result.commits.get(CommitType::Unclassified).unwrap();
        assert_eq!(other.get("aaa"), Some(&"upper".to_string()));
    }

    #[test]
    fn test_boundary_commit_is_always_skipped() {
        let result = classify(
            vec![
                record("aaa", "ann@example.com", "feat: one"),
                record("end", "bob@example.com", "fix: boundary"),
                record("bbb", "cat@example.com", "feat: two"),
                record("end", "bob@example.com", "fix: boundary"),
            ],
            "end",
        );

        assert!(!result.commits.contains_id("end"));
        assert_eq!(result.commits.len(), 2);
        assert_eq!(result.authors.name_for("bob@example.com"), None);
    }

    #[test]
    fn test_message_is_trimmed_before_parsing() {
        let result = classify(
            vec![record("aaa", "ann@example.com", "\n\n  docs: explain flags \n")],
            "zzz",
        );

        let docs = result.commits.get(CommitType::Docs).unwrap();
        assert_eq!(docs.get("aaa"), Some(&"explain flags".to_string()));
    }

    #[test]
    fn test_last_author_name_wins() {
        let result = classify(
            vec![
                CommitRecord::new("aaa", Author::new("Ann", "ann@example.com"), "feat: a"),
                CommitRecord::new("bbb", Author::new("Ann Lee", "ann@example.com"), "fix: b"),
            ],
            "zzz",
        );

        assert_eq!(result.authors.len(), 1);
        assert_eq!(result.authors.name_for("ann@example.com"), Some("Ann Lee"));
    }

    #[test]
    fn test_strict_parser_drops_unknown_types() {
        let parser = ConventionalParser::strict();
        let result = CommitClassifier::new(&parser).classify(
            vec![record("aaa", "ann@example.com", "wip: half done")],
            "zzz",
        );

        assert!(result.commits.is_empty());
        assert_eq!(result.skipped.len(), 1);
    }

    #[test]
    #[traced_test]
    fn test_skipped_commit_is_logged() {
        classify(
            vec![record("deadbeef", "ann@example.com", "Update README")],
            "zzz",
        );

        assert!(logs_contain("not a conventional commit"));
        assert!(logs_contain("deadbeef"));
    }
}
