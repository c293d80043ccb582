use crate::domain::CommitRecord;
use crate::error::Result;
use crate::git::Repository;
use git2::Oid;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// History is a single list kept newest first; walks start at the `from`
/// commit's position and run down the list.
pub struct MockRepository {
    history: Vec<CommitRecord>,
    tags: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            history: Vec::new(),
            tags: HashMap::new(),
        }
    }

    /// Append a commit to the history; call oldest last
    pub fn push_commit(&mut self, record: CommitRecord) {
        self.history.push(record);
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.insert(name.into(), oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        Ok(self.tags.get(tag_name).copied())
    }

    fn get_commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitRecord>> {
        let from = from_oid.to_string();
        let to = to_oid.to_string();

        let start = self
            .history
            .iter()
            .position(|c| c.id == from)
            .unwrap_or(self.history.len());

        let mut commits = Vec::new();
        for record in &self.history[start..] {
            commits.push(record.clone());
            if record.id == to {
                break;
            }
        }

        Ok(commits)
    }
}
