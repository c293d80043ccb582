//! Markdown changelog renderer

use std::io::{self, Write};

use tracing::{debug, instrument};

use super::Renderer;
use crate::domain::ChangelogDocument;

pub const DEFAULT_SHORT_HASH_LENGTH: usize = 7;

/// Renders a changelog as Markdown
///
/// Plain flavor shows shortened hashes in code spans. GitHub flavor keeps
/// full hashes bare so GitHub links them, and folds the author list into a
/// `<details>` block.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    pub short_hash_length: usize,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self {
            short_hash_length: DEFAULT_SHORT_HASH_LENGTH,
        }
    }

    pub fn with_short_hash_length(mut self, length: usize) -> Self {
        self.short_hash_length = length.max(1);
        self
    }

    fn format_hash(&self, hash: &str, gh_markdown: bool) -> String {
        if gh_markdown {
            hash.to_string()
        } else {
            format!("`{}`", hash.get(..self.short_hash_length).unwrap_or(hash))
        }
    }

    /// Without emails, a name that is itself an address is cut at the `@`
    fn format_author(name: &str, email: &str, include_email: bool) -> String {
        if include_email {
            format!("- {} <{}>", name, email)
        } else {
            let name = name.split('@').next().unwrap_or(name);
            format!("- {}", name)
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for MarkdownRenderer {
    #[instrument(skip(self, doc, out), fields(release = %doc.release_name, commits = doc.commit_count()))]
    fn render(&self, doc: &ChangelogDocument, out: &mut dyn Write) -> io::Result<()> {
        let gh = doc.options.gh_markdown;

        writeln!(out, "# {}", doc.release_name)?;
        writeln!(out)?;
        if gh {
            writeln!(out, "**Full Changelog**: {}...{}", doc.to_tag, doc.from_tag)?;
        } else {
            writeln!(out, "Changes from `{}` to `{}`.", doc.to_tag, doc.from_tag)?;
        }

        for (commit_type, bucket) in doc.sections() {
            writeln!(out)?;
            writeln!(out, "## {}", commit_type.section_title())?;
            writeln!(out)?;
            for (hash, description) in bucket {
                writeln!(out, "- {} {}", self.format_hash(hash, gh), description)?;
            }
        }

        if !doc.authors.is_empty() {
            writeln!(out)?;
            writeln!(out, "## Authors")?;
            writeln!(out)?;
            if gh {
                writeln!(out, "<details>")?;
                writeln!(out, "<summary>{} contributors</summary>", doc.authors.len())?;
                writeln!(out)?;
            }
            for (email, name) in doc.authors.iter() {
                writeln!(
                    out,
                    "{}",
                    Self::format_author(name, email, doc.options.include_email)
                )?;
            }
            if gh {
                writeln!(out)?;
                writeln!(out, "</details>")?;
            }
        }

        debug!("markdown changelog rendered");
        Ok(())
    }
}
