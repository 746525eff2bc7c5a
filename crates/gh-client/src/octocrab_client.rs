//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab
//! library. This client makes real API calls without any retry logic.

use crate::client::GitHubClient;
use crate::search::SEARCH_PAGE_SIZE;
use crate::types::{PullRequestDetail, SearchItem, SearchPage};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Get a reference to the underlying octocrab instance
    pub fn octocrab(&self) -> &Octocrab {
        &self.octocrab
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn authenticated_login(&self) -> anyhow::Result<String> {
        let user = self
            .octocrab
            .current()
            .user()
            .await
            .context("Failed to fetch the authenticated user")?;

        Ok(user.login)
    }

    async fn search_pull_requests(&self, query: &str, page: u32) -> anyhow::Result<SearchPage> {
        debug!("Searching page {} with: {}", page, query);

        let results = self
            .octocrab
            .search()
            .issues_and_pull_requests(query)
            .sort("created")
            .order("desc")
            .per_page(SEARCH_PAGE_SIZE)
            .page(page)
            .send()
            .await?;

        let total_count = results.total_count.unwrap_or_default();
        let items = results
            .items
            .iter()
            .map(convert_search_item)
            .collect::<anyhow::Result<Vec<_>>>()?;

        debug!("Page {} returned {} items", page, items.len());
        Ok(SearchPage { items, total_count })
    }

    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestDetail> {
        debug!("Fetching PR #{} for {}/{}", pr_number, owner, repo);

        let pr = self.octocrab.pulls(owner, repo).get(pr_number).await?;
        convert_pull_request_detail(&pr)
    }
}

/// Convert an octocrab search hit to our SearchItem type
fn convert_search_item(issue: &octocrab::models::issues::Issue) -> anyhow::Result<SearchItem> {
    let raw = serde_json::to_value(issue).context("Failed to serialize search item")?;

    Ok(SearchItem {
        number: issue.number,
        title: issue.title.clone(),
        body: issue.body.clone(),
        html_url: issue.html_url.to_string(),
        created_at: issue.created_at,
        closed_at: issue.closed_at,
        raw,
    })
}

/// Convert an octocrab PullRequest to our PullRequestDetail type
fn convert_pull_request_detail(
    pr: &octocrab::models::pulls::PullRequest,
) -> anyhow::Result<PullRequestDetail> {
    let raw = serde_json::to_value(pr).context("Failed to serialize pull request")?;

    Ok(PullRequestDetail {
        merged_at: pr.merged_at,
        body: pr.body.clone(),
        raw,
    })
}
