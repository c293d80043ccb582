//! Domain logic - pure data types independent of git operations

pub mod changelog;
pub mod commit;
pub mod tag;

pub use changelog::{AuthorRegistry, Bucket, ChangelogDocument, ClassifiedCommitSet, RenderOptions};
pub use commit::{Author, CommitRecord, CommitType};
pub use tag::{Tag, TagOrder, TagRange, TagSelector};
