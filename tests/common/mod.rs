#![allow(dead_code)]

use git2::{Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// A throwaway git repository for tests
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit on top of HEAD as the given author
    pub fn commit(&self, message: &str, name: &str, email: &str) -> Oid {
        let sig = Signature::now(name, email).expect("Could not create signature");
        let tree_id = self
            .repo
            .index()
            .expect("Could not get index")
            .write_tree()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<_> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, oid: Oid) {
        let object = self.repo.find_object(oid, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    /// v1.0.0, then feat/fix/chore by three authors, then v1.1.0 on the last one
    pub fn release_history() -> (Self, Oid, Oid) {
        let test_repo = TestRepo::new();
        let base = test_repo.commit("chore: initial import", "Root", "root@example.com");
        test_repo.tag("v1.0.0", base);

        test_repo.commit("feat: add export", "Ann", "ann@example.com");
        test_repo.commit("fix: null check", "Bob", "bob@example.com");
        let head = test_repo.commit("chore: bump deps", "Cat", "cat@example.com");
        test_repo.tag("v1.1.0", head);

        (test_repo, base, head)
    }
}
