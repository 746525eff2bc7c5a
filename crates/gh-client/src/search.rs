//! Paginated search over the full result set
//!
//! The search endpoint hands out results page by page; this module walks
//! the pages one at a time and concatenates the items.

use crate::client::GitHubClient;
use crate::types::SearchItem;
use anyhow::Result;
use log::debug;

/// Number of items requested per search page
pub const SEARCH_PAGE_SIZE: u8 = 100;

/// Collect every page of search results for `query`.
///
/// Pages are fetched sequentially with a 1-based counter until a page
/// comes back with fewer than [`SEARCH_PAGE_SIZE`] items; the short page
/// is the stopping rule, not the reported total count. A first page that
/// is already short means exactly one request is made. Transport errors
/// propagate and abort the walk.
pub async fn search_all(client: &dyn GitHubClient, query: &str) -> Result<Vec<SearchItem>> {
    let mut items = Vec::new();
    let mut page = 1u32;

    loop {
        let result = client.search_pull_requests(query, page).await?;
        let fetched = result.items.len();
        items.extend(result.items);

        debug!(
            "Search page {} returned {} items ({} of {} collected)",
            page,
            fetched,
            items.len(),
            result.total_count
        );

        if fetched < SEARCH_PAGE_SIZE as usize {
            break;
        }
        page += 1;
    }

    Ok(items)
}
