//! Changelog rendering and output targets

mod markdown;

pub use markdown::{MarkdownRenderer, DEFAULT_SHORT_HASH_LENGTH};

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::boundary::BoundaryWarning;
use crate::domain::ChangelogDocument;
use crate::error::{ChangelogError, Result};

/// Trait for changelog renderers
pub trait Renderer {
    /// Write `doc` onto `out`
    fn render(&self, doc: &ChangelogDocument, out: &mut dyn Write) -> io::Result<()>;

    /// Render into a string
    fn render_to_string(&self, doc: &ChangelogDocument) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(doc, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// Where a rendered changelog goes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputTargets {
    pub stdout: bool,
    /// No file is written when unset
    pub file: Option<PathBuf>,
}

impl OutputTargets {
    pub fn is_empty(&self) -> bool {
        !self.stdout && self.file.is_none()
    }
}

/// Render `doc` onto every requested target: stdout first, then the file.
///
/// A failure names the target it happened on. Targets written before the
/// failure are left as they are.
pub fn write_outputs<R: Renderer + ?Sized>(
    renderer: &R,
    doc: &ChangelogDocument,
    targets: &OutputTargets,
) -> Result<()> {
    if targets.is_empty() {
        debug!("{}", BoundaryWarning::NoOutputTarget);
        return Ok(());
    }

    if targets.stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        renderer
            .render(doc, &mut handle)
            .and_then(|_| handle.flush())
            .map_err(|e| ChangelogError::render("stdout", e))?;
    }

    if let Some(path) = &targets.file {
        let target = path.display().to_string();
        let file = File::create(path).map_err(|e| ChangelogError::render(&target, e))?;
        let mut writer = BufWriter::new(file);
        renderer
            .render(doc, &mut writer)
            .and_then(|_| writer.flush())
            .map_err(|e| ChangelogError::render(&target, e))?;
        info!(path = %target, "changelog written");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::{aggregate, AggregateOptions};
    use crate::domain::{AuthorRegistry, ClassifiedCommitSet, CommitType, Tag, TagRange};
    use tempfile::TempDir;

    fn document() -> ChangelogDocument {
        let mut commits = ClassifiedCommitSet::new();
        commits.insert(CommitType::Feat, "0123456789abcdef", "add export");
        let mut authors = AuthorRegistry::new();
        authors.record("ann@example.com", "Ann");
        aggregate(
            &TagRange {
                from: Tag::new("v1.1.0"),
                to: Tag::new("v1.0.0"),
            },
            &commits,
            &authors,
            &AggregateOptions::default(),
        )
    }

    #[test]
    fn test_write_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let targets = OutputTargets {
            stdout: false,
            file: Some(path.clone()),
        };

        write_outputs(&MarkdownRenderer::new(), &document(), &targets).unwrap();

        let written = std::fs::read_to_string(path).unwrap();
        assert!(written.contains("add export"));
    }

    #[test]
    fn test_file_failure_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("CHANGELOG.md");
        let targets = OutputTargets {
            stdout: false,
            file: Some(path.clone()),
        };

        let err = write_outputs(&MarkdownRenderer::new(), &document(), &targets).unwrap_err();
        match err {
            ChangelogError::Render { target, .. } => {
                assert_eq!(target, path.display().to_string())
            }
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn test_no_targets_is_not_an_error() {
        let targets = OutputTargets::default();
        assert!(targets.is_empty());
        write_outputs(&MarkdownRenderer::new(), &document(), &targets).unwrap();
    }

    #[test]
    fn test_render_to_string_matches_render() {
        let renderer = MarkdownRenderer::new();
        let doc = document();
        let mut buf = Vec::new();
        renderer.render(&doc, &mut buf).unwrap();
        assert_eq!(
            renderer.render_to_string(&doc).unwrap(),
            String::from_utf8(buf).unwrap()
        );
    }
}
