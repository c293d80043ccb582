//! Formatting functions for terminal output.
//!
//! Every message goes to stderr so stdout stays clean for the changelog
//! itself when `--stdout` is used.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::ChangelogDocument;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a warning with a yellow prefix.
pub fn format_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// One-line summary of a generated changelog.
pub fn format_range(doc: &ChangelogDocument) -> String {
    format!(
        "{} {} commits by {} authors, {} → {}",
        style("✓").green(),
        doc.commit_count(),
        doc.authors.len(),
        style(&doc.to_tag).cyan(),
        style(&doc.from_tag).cyan()
    )
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a boundary warning.
pub fn display_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_warning(warning));
}

/// Print a success message with a green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print the summary of a generated changelog.
pub fn display_range(doc: &ChangelogDocument) {
    eprintln!("{}", format_range(doc));
}
