use std::collections::BTreeMap;

use super::commit::CommitType;

/// Commit descriptions keyed by commit id
pub type Bucket = BTreeMap<String, String>;

/// Parsed commits grouped by type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedCommitSet {
    buckets: BTreeMap<CommitType, Bucket>,
}

impl ClassifiedCommitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a commit under `commit_type`; a repeated id overwrites the
    /// previous description
    pub fn insert(
        &mut self,
        commit_type: CommitType,
        id: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.buckets
            .entry(commit_type)
            .or_default()
            .insert(id.into(), description.into());
    }

    pub fn get(&self, commit_type: CommitType) -> Option<&Bucket> {
        self.buckets.get(&commit_type)
    }

    /// Whether any bucket holds `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.buckets.values().any(|bucket| bucket.contains_key(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CommitType, &Bucket)> {
        self.buckets.iter()
    }

    /// Total number of classified commits
    pub fn len(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Author names keyed by email; the last name seen for an email wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorRegistry {
    authors: BTreeMap<String, String>,
}

impl AuthorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, email: impl Into<String>, name: impl Into<String>) {
        self.authors.insert(email.into(), name.into());
    }

    pub fn name_for(&self, email: &str) -> Option<&str> {
        self.authors.get(email).map(String::as_str)
    }

    /// `(email, name)` pairs ordered by email
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.authors.iter().map(|(e, n)| (e.as_str(), n.as_str()))
    }

    pub fn len(&self) -> usize {
        self.authors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.authors.is_empty()
    }
}

/// Presentation switches carried into the document
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub include_email: bool,
    pub gh_markdown: bool,
}

/// Everything a renderer needs to produce one changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogDocument {
    pub release_name: String,
    pub from_tag: String,
    pub to_tag: String,
    /// One entry per [`CommitType`], empty or not
    pub buckets: BTreeMap<CommitType, Bucket>,
    pub authors: AuthorRegistry,
    pub options: RenderOptions,
}

impl ChangelogDocument {
    /// The bucket for `commit_type`. Every type has one.
    pub fn bucket(&self, commit_type: CommitType) -> &Bucket {
        static EMPTY: Bucket = BTreeMap::new();
        self.buckets.get(&commit_type).unwrap_or(&EMPTY)
    }

    /// Non-empty buckets in rendering order
    pub fn sections(&self) -> impl Iterator<Item = (CommitType, &Bucket)> {
        CommitType::ALL
            .into_iter()
            .map(move |t| (t, self.bucket(t)))
            .filter(|(_, bucket)| !bucket.is_empty())
    }

    pub fn commit_count(&self) -> usize {
        self.buckets.values().map(BTreeMap::len).sum()
    }
}
