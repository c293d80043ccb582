pub mod aggregator;
pub mod boundary;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod render;
pub mod resolver;
pub mod ui;

pub use error::{ChangelogError, Result};
