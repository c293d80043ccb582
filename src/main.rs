use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use git_changelog::boundary::BoundaryWarning;
use git_changelog::cli::{run_changelog_workflow, ChangelogWorkflowArgs};
use git_changelog::config::{self, Config};
use git_changelog::domain::TagSelector;
use git_changelog::git::Git2Repository;
use git_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "git-changelog",
    version,
    about = "Generate a changelog from conventional commits between two git tags"
)]
struct Args {
    #[arg(
        long,
        default_value = "auto",
        help = "Tag to begin tracking commits from (auto selects the latest tag)"
    )]
    from_tag: String,

    #[arg(
        long,
        default_value = "auto",
        help = "Tag to end tracking commits on (auto selects the previous tag)"
    )]
    to_tag: String,

    #[arg(long, default_value = ".", help = "Path to the local git repository")]
    repo: String,

    #[arg(
        long,
        default_value = "",
        help = "Path to the changelog output file; if empty it won't be written to a file"
    )]
    out: String,

    #[arg(long, help = "Print the changelog to stdout")]
    stdout: bool,

    #[arg(long, help = "Add author emails to the changelog")]
    email: bool,

    #[arg(long, help = "Use GitHub flavoured Markdown")]
    gh: bool,

    #[arg(long, help = "Heading for the changelog (defaults to the from tag)")]
    release_name: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(
        long,
        help = "Log level: one of debug, info, warn, error [default: RUST_LOG, else info]"
    )]
    log_level: Option<String>,
}

impl Args {
    /// Merge flags over the configuration file. Flags only switch
    /// features on; they never turn off what the file enabled.
    fn workflow_args(&self, config: &Config) -> ChangelogWorkflowArgs {
        let mut args = ChangelogWorkflowArgs::from_config(config).with_output_file(&self.out);
        args.from = TagSelector::from(self.from_tag.as_str());
        args.to = TagSelector::from(self.to_tag.as_str());
        args.release_name = self.release_name.clone();
        args.targets.stdout |= self.stdout;
        args.render.include_email |= self.email;
        args.render.gh_markdown |= self.gh;
        args
    }
}

fn level_directive(log_level: &str) -> String {
    let level = match log_level.to_lowercase().as_str() {
        level @ ("debug" | "info" | "warn" | "error") => level.to_string(),
        _ => "info".to_string(),
    };
    format!("git_changelog={}", level)
}

/// An explicit `--log-level` wins; `RUST_LOG` only applies without it
fn log_filter(log_level: Option<&str>) -> EnvFilter {
    match log_level {
        Some(level) => EnvFilter::new(level_directive(level)),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level_directive("info"))),
    }
}

fn setup_logging(log_level: Option<&str>) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level))
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let workflow_args = args.workflow_args(&config);
    if workflow_args.targets.is_empty() {
        ui::display_warning(&BoundaryWarning::NoOutputTarget);
    }

    let repo = Git2Repository::open(&args.repo)?;
    let doc = run_changelog_workflow(&repo, &workflow_args)?;

    if doc.commit_count() == 0 {
        ui::display_warning(&BoundaryWarning::EmptyChangelog {
            from_tag: doc.from_tag.clone(),
            to_tag: doc.to_tag.clone(),
        });
    }
    if let Some(path) = &workflow_args.targets.file {
        ui::display_success(&format!("Changelog written to {}", path.display()));
    }
    ui::display_range(&doc);

    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.log_level.as_deref());

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
