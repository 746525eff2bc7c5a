//! Export merged pull requests authored by the current user.
//!
//! Authenticates against the GitHub API with the token from the
//! environment, searches for merged PRs in a date window (optionally
//! scoped to one repository), and writes the result set to
//! `<output_dir>/my_prs.json` and `<output_dir>/my_prs.txt`.

use anyhow::{Context, Result};
use clap::Parser;
use gh_client::{GitHubClient, OctocrabClient, token_from_env};
use log::info;
use octocrab::Octocrab;
use std::path::Path;
use std::sync::Arc;

mod cli;
mod collect;
mod config;
mod query;
mod report;

use cli::Cli;
use collect::OutputMode;
use config::Config;
use query::SearchQuery;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();

    let Some(token) = token_from_env() else {
        eprintln!("Please set the GITHUB_TOKEN environment variable.");
        std::process::exit(1);
    };

    if let Err(err) = run(args, token).await {
        eprintln!("Error fetching PRs: {err:#}");
        std::process::exit(1);
    }
}

async fn run(args: Cli, token: String) -> Result<()> {
    let config = Config::load();

    let octocrab = Octocrab::builder()
        .personal_token(token)
        .build()
        .context("Failed to build Octocrab client")?;
    let client = OctocrabClient::new(Arc::new(octocrab));

    let username = client.authenticated_login().await?;
    info!("Authenticated as: {}", username);

    let query = SearchQuery::new(&username, args.start_date, args.repo_scope());
    info!("Fetching PRs from: {} until: {}", query.since(), query.until());
    if let Some((org, repo)) = args.repo_scope() {
        info!("Limiting search to repo: {}/{}", org, repo);
    }
    info!("Searching for PRs with: {}", query);

    let mode = if args.all_details {
        OutputMode::AllDetails
    } else {
        OutputMode::Summary
    };
    let records = collect::collect(&client, &query, args.repo_scope(), mode).await?;

    report::write_report(Path::new(&config.output_dir), &records)?;

    Ok(())
}
