use crate::domain::{Author, CommitRecord};
use crate::error::{ChangelogError, Result};
use git2::{Oid, Repository as Git2Repo, Sort};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository at exactly `path`, without searching parents
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|e| {
            ChangelogError::config(format!(
                "Cannot open repository at '{}': {}",
                path.display(),
                e.message()
            ))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn commit_record(&self, oid: Oid) -> Result<CommitRecord> {
        let commit = self.repo.find_commit(oid)?;
        let author = commit.author();

        Ok(CommitRecord::new(
            oid.to_string(),
            Author::new(
                author.name().unwrap_or("unknown"),
                author.email().unwrap_or_default(),
            ),
            String::from_utf8_lossy(commit.message_bytes()),
        ))
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self.repo.tag_names(None)?;

        Ok(tags.iter().flatten().map(|s| s.to_string()).collect())
    }

    fn find_tag_oid(&self, tag_name: &str) -> Result<Option<Oid>> {
        let reference_name = format!("refs/tags/{}", tag_name);

        match self.repo.find_reference(&reference_name) {
            Ok(reference) => {
                let commit = reference.peel_to_commit().map_err(|e| {
                    ChangelogError::config(format!(
                        "Tag '{}' does not point to a commit: {}",
                        tag_name,
                        e.message()
                    ))
                })?;

                Ok(Some(commit.id()))
            }
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) if e.code() == git2::ErrorCode::InvalidSpec => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn get_commits_between(&self, from_oid: Oid, to_oid: Oid) -> Result<Vec<CommitRecord>> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push(from_oid)?;

        let mut commits = Vec::new();

        for oid_result in revwalk {
            let oid = oid_result?;
            commits.push(self.commit_record(oid)?);

            if oid == to_oid {
                break;
            }
        }

        debug!(from = %from_oid, to = %to_oid, count = commits.len(), "walked commit range");
        Ok(commits)
    }
}
