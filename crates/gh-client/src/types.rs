//! GitHub API data transfer objects
//!
//! These types carry the fields the export pipeline projects onto its
//! output, alongside the raw API payload so callers can reproduce the
//! unprojected record when asked for full details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single search hit from the issues-and-pull-requests search endpoint
///
/// Search results are issue-shaped even for pull requests; in particular
/// they carry `closed_at` but never `merged_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchItem {
    /// PR number within its repository (e.g., 123)
    pub number: u64,

    /// PR title
    pub title: String,

    /// PR body/description
    pub body: Option<String>,

    /// Web URL of the PR
    pub html_url: String,

    /// When the PR was created
    pub created_at: DateTime<Utc>,

    /// When the PR was closed
    pub closed_at: Option<DateTime<Utc>>,

    /// Full item as returned by the search endpoint
    pub raw: Value,
}

/// One page of search results
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
    /// Items on this page, in the order the API returned them
    pub items: Vec<SearchItem>,

    /// Total hits across all pages, as reported by the search endpoint
    pub total_count: u64,
}

/// Full pull request detail from the pulls endpoint
///
/// The detail record is the only place `merged_at` is available.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestDetail {
    /// When the PR was merged
    pub merged_at: Option<DateTime<Utc>>,

    /// PR body/description
    pub body: Option<String>,

    /// Full record as returned by the pulls endpoint
    pub raw: Value,
}
