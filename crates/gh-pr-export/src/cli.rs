//! Command line interface
//!
//! All arguments are optional: `gh-pr-export [START_DATE] [ORG] [REPO]
//! [--all-details]`. Org and repo only take effect together.

use chrono::NaiveDate;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "gh-pr-export")]
#[command(about = "Export merged pull requests authored by the current user")]
#[command(version)]
pub struct Cli {
    /// Start of the search window (YYYY-MM-DD); defaults to six months ago
    pub start_date: Option<NaiveDate>,

    /// Organization or user owning the repository to scope the search to
    pub org: Option<String>,

    /// Repository name (only effective together with ORG)
    pub repo: Option<String>,

    /// Output the raw API records instead of the projected summary
    #[arg(long)]
    pub all_details: bool,
}

impl Cli {
    /// Repository scope, present only when both org and repo were given
    pub fn repo_scope(&self) -> Option<(&str, &str)> {
        match (self.org.as_deref(), self.repo.as_deref()) {
            (Some(org), Some(repo)) => Some((org, repo)),
            _ => None,
        }
    }
}
