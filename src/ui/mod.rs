//! User-facing terminal output.
//!
//! Diagnostics go through `tracing`; this module is for the few lines a
//! user is meant to read directly, like the final error report.

pub mod formatter;

pub use formatter::{display_error, display_range, display_success, display_warning};
