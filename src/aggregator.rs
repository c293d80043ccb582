//! Assembles classified commits into a renderable document

use std::collections::BTreeMap;

use crate::domain::{
    AuthorRegistry, ChangelogDocument, ClassifiedCommitSet, CommitType, RenderOptions, TagRange,
};

/// Knobs for [`aggregate`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateOptions {
    /// Heading for the changelog; the from-tag name when unset
    pub release_name: Option<String>,
    pub render: RenderOptions,
}

/// Build the document handed to the renderer.
///
/// Every [`CommitType`] gets a bucket, so renderers can walk the full
/// taxonomy without existence checks.
pub fn aggregate(
    range: &TagRange,
    commits: &ClassifiedCommitSet,
    authors: &AuthorRegistry,
    options: &AggregateOptions,
) -> ChangelogDocument {
    let buckets: BTreeMap<_, _> = CommitType::ALL
        .into_iter()
        .map(|t| (t, commits.get(t).cloned().unwrap_or_default()))
        .collect();

    ChangelogDocument {
        release_name: options
            .release_name
            .clone()
            .unwrap_or_else(|| range.from.name.clone()),
        from_tag: range.from.name.clone(),
        to_tag: range.to.name.clone(),
        buckets,
        authors: authors.clone(),
        options: options.render,
    }
}
