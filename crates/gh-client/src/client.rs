//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy. The export pipeline only ever talks to
//! this trait, so tests can substitute a fake client.

use crate::types::{PullRequestDetail, SearchPage};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the interface for interacting with the GitHub API.
/// Implementations can be direct (hitting the API) or stubs for tests.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks and threads.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn who_am_i(client: &dyn GitHubClient) -> anyhow::Result<String> {
///     client.authenticated_login().await
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Login of the user the configured token authenticates as
    ///
    /// # Returns
    ///
    /// The GitHub username, or an error if the API call fails.
    async fn authenticated_login(&self) -> anyhow::Result<String>;

    /// Fetch one page of search results for issues and pull requests
    ///
    /// Pages are 1-based and hold up to [`SEARCH_PAGE_SIZE`] items,
    /// sorted by creation date descending.
    ///
    /// # Arguments
    ///
    /// * `query` - A query in GitHub search syntax
    /// * `page` - 1-based page number
    ///
    /// # Returns
    ///
    /// The requested page of results, or an error if the API call fails.
    ///
    /// [`SEARCH_PAGE_SIZE`]: crate::search::SEARCH_PAGE_SIZE
    async fn search_pull_requests(&self, query: &str, page: u32) -> anyhow::Result<SearchPage>;

    /// Fetch a single pull request by number
    ///
    /// This returns full PR details including `merged_at`, which is not
    /// available in search results.
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `pr_number` - Pull request number
    ///
    /// # Returns
    ///
    /// The pull request details, or an error if not found.
    async fn fetch_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr_number: u64,
    ) -> anyhow::Result<PullRequestDetail>;
}
