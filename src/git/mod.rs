//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only Git
//! operations the changelog pipeline needs: listing tags, resolving a tag
//! to its commit, and walking the history between two commits.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! ```rust
//! # use git_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> git_changelog::Result<()> {
//! let from = repo.resolve_tag_oid("v1.1.0")?;
//! let to = repo.resolve_tag_oid("v1.0.0")?;
//! let commits = repo.get_commits_between(from, to)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitRecord;
use crate::error::{ChangelogError, Result};
use git2::Oid;

/// Read-only view of a repository's tags and history
pub trait Repository {
    /// Get all tag names in the repository
    ///
    /// Order is unspecified; callers sort as they need.
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Find a tag by name and get the OID of the commit it points to
    ///
    /// Annotated tags are peeled to their target commit.
    ///
    /// # Returns
    /// * `Ok(Some(Oid))` - Commit the tag points to
    /// * `Ok(None)` - If the tag doesn't exist
    /// * `Err` - If there's a Git error
    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>>;

    /// Walk history from `from_oid` towards `to_oid`
    ///
    /// Commits are yielded newest first by commit time, starting with
    /// `from_oid` itself. The walk stops after yielding `to_oid`, so the
    /// boundary commit is part of the result and callers must skip it.
    /// If `to_oid` is not reachable the whole history is returned.
    fn get_commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitRecord>>;

    /// Like [`Repository::find_tag_oid`], but a missing tag is an error
    fn resolve_tag_oid(&self, tag_name: &str) -> Result<Oid> {
        self.find_tag_oid(tag_name)?
            .ok_or_else(|| ChangelogError::unknown_tag(tag_name))
    }
}
