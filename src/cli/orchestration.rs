//! Main workflow orchestration logic
//!
//! Runs the changelog pipeline end to end: tag resolution, range lookup,
//! classification, aggregation and rendering. CLI parsing lives in
//! `main.rs`; this module only sees the already-merged arguments.

use std::path::PathBuf;

use tracing::info;

use crate::aggregator::{aggregate, AggregateOptions};
use crate::classifier::CommitClassifier;
use crate::config::Config;
use crate::conventional::ConventionalParser;
use crate::domain::{ChangelogDocument, RenderOptions, Tag, TagOrder, TagSelector};
use crate::error::Result;
use crate::git::Repository;
use crate::render::{write_outputs, MarkdownRenderer, OutputTargets};
use crate::resolver;

/// Arguments for the changelog workflow
///
/// Built once from CLI flags and configuration, then only read. This
/// decoupling allows the workflow to be called programmatically without
/// depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangelogWorkflowArgs {
    pub from: TagSelector,
    pub to: TagSelector,
    pub tag_order: TagOrder,
    pub release_name: Option<String>,
    pub strict_types: bool,
    pub render: RenderOptions,
    pub short_hash_length: usize,
    pub targets: OutputTargets,
}

impl Default for ChangelogWorkflowArgs {
    fn default() -> Self {
        ChangelogWorkflowArgs::from_config(&Config::default())
    }
}

impl ChangelogWorkflowArgs {
    /// Defaults taken from a configuration file; tag selectors start as auto
    pub fn from_config(config: &Config) -> Self {
        ChangelogWorkflowArgs {
            from: TagSelector::Auto,
            to: TagSelector::Auto,
            tag_order: config.tags.order,
            release_name: None,
            strict_types: config.commits.strict_types,
            render: RenderOptions {
                include_email: config.output.email,
                gh_markdown: config.output.gh_markdown,
            },
            short_hash_length: config.output.short_hash_length,
            targets: OutputTargets {
                stdout: config.output.stdout,
                file: None,
            },
        }
    }

    /// Set the output file; an empty path means no file
    pub fn with_output_file(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.targets.file = (!path.as_os_str().is_empty()).then_some(path);
        self
    }
}

/// Main changelog workflow
///
/// Orchestrates the entire process:
/// 1. List and resolve the tag pair
/// 2. Look both tags up in the repository
/// 3. Walk and classify the commits between them
/// 4. Aggregate and render onto the requested targets
///
/// Stops at the first failure in any of these steps; unparsable commits
/// are not failures.
pub fn run_changelog_workflow<R: Repository>(
    repo: &R,
    args: &ChangelogWorkflowArgs,
) -> Result<ChangelogDocument> {
    let tags: Vec<Tag> = repo
        .list_tags()?
        .into_iter()
        .map(Tag::new)
        .collect();

    let range = resolver::resolve(&tags, &args.from, &args.to, args.tag_order)?;
    info!(from = %range.from, to = %range.to, "generating changelog");

    let from_oid = repo.resolve_tag_oid(&range.from.name)?;
    let to_oid = repo.resolve_tag_oid(&range.to.name)?;
    let commits = repo.get_commits_between(from_oid, to_oid)?;

    let parser = ConventionalParser::with_strict_types(args.strict_types);
    let classification = CommitClassifier::new(&parser).classify(commits, &to_oid.to_string());

    if !classification.skipped.is_empty() {
        info!(
            skipped = classification.skipped.len(),
            "left out commits that aren't conventional commits"
        );
    }

    let doc = aggregate(
        &range,
        &classification.commits,
        &classification.authors,
        &AggregateOptions {
            release_name: args.release_name.clone(),
            render: args.render,
        },
    );

    let renderer = MarkdownRenderer::new().with_short_hash_length(args.short_hash_length);
    write_outputs(&renderer, &doc, &args.targets)?;

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, CommitRecord, CommitType};
    use crate::error::ChangelogError;
    use crate::git::MockRepository;
    use git2::Oid;

    fn oid(byte: u8) -> Oid {
        Oid::from_bytes(&[byte; 20]).unwrap()
    }

    fn record(byte: u8, name: &str, message: &str) -> CommitRecord {
        CommitRecord::new(
            oid(byte).to_string(),
            Author::new(name, format!("{}@example.com", name.to_lowercase())),
            message,
        )
    }

    /// v1.0.0 at commit 1, v1.1.0 at commit 5
    fn release_repo() -> MockRepository {
        let mut repo = MockRepository::new();
        repo.push_commit(record(5, "Dee", "chore: release 1.1.0"));
        repo.push_commit(record(4, "Cat", "chore: bump deps"));
        repo.push_commit(record(3, "Bob", "fix: null check"));
        repo.push_commit(record(2, "Ann", "feat: add export"));
        repo.push_commit(record(1, "Eve", "chore: release 1.0.0"));
        repo.add_tag("v1.0.0", oid(1));
        repo.add_tag("v1.1.0", oid(5));
        repo
    }

    #[test]
    fn test_workflow_with_auto_tags() {
        let repo = release_repo();
        let doc = run_changelog_workflow(&repo, &ChangelogWorkflowArgs::default()).unwrap();

        assert_eq!(doc.release_name, "v1.1.0");
        assert_eq!(doc.from_tag, "v1.1.0");
        assert_eq!(doc.to_tag, "v1.0.0");
        assert_eq!(doc.bucket(CommitType::Feat).len(), 1);
        assert_eq!(doc.bucket(CommitType::Fix).len(), 1);
        assert_eq!(doc.bucket(CommitType::Chore).len(), 2);
        assert!(!doc.bucket(CommitType::Chore).contains_key(&oid(1).to_string()));
        assert_eq!(doc.authors.len(), 4);
    }

    #[test]
    fn test_workflow_unknown_explicit_tag() {
        let repo = release_repo();
        let args = ChangelogWorkflowArgs {
            from: TagSelector::Named("v2.0.0".to_string()),
            to: TagSelector::Named("v1.0.0".to_string()),
            ..Default::default()
        };

        match run_changelog_workflow(&repo, &args) {
            Err(ChangelogError::UnknownTag { tag }) => assert_eq!(tag, "v2.0.0"),
            other => panic!("expected UnknownTag, got {:?}", other),
        }
    }

    #[test]
    fn test_workflow_needs_two_tags() {
        let mut repo = MockRepository::new();
        repo.push_commit(record(1, "Ann", "feat: first"));
        repo.add_tag("v1.0.0", oid(1));

        assert!(matches!(
            run_changelog_workflow(&repo, &ChangelogWorkflowArgs::default()),
            Err(ChangelogError::InsufficientTags { found: 1 })
        ));
    }

    #[test]
    fn test_with_output_file_ignores_empty_path() {
        let args = ChangelogWorkflowArgs::default().with_output_file("");
        assert_eq!(args.targets.file, None);

        let args = ChangelogWorkflowArgs::default().with_output_file("CHANGELOG.md");
        assert_eq!(args.targets.file, Some(PathBuf::from("CHANGELOG.md")));
    }

    #[test]
    fn test_args_follow_config() {
        let mut config = Config::default();
        config.output.email = true;
        config.tags.order = TagOrder::Semver;
        config.commits.strict_types = true;

        let args = ChangelogWorkflowArgs::from_config(&config);
        assert!(args.render.include_email);
        assert_eq!(args.tag_order, TagOrder::Semver);
        assert!(args.strict_types);
        assert!(args.from.is_auto() && args.to.is_auto());
    }
}
