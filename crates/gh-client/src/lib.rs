//! GitHub API client for the merged-PR export pipeline
//!
//! This crate provides a trait-based GitHub API client. The pipeline only
//! depends on the `GitHubClient` trait, so the production octocrab-backed
//! implementation can be swapped for a fake in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - authenticated_login()                         │
//! │  - search_pull_requests()                        │
//! │  - fetch_pull_request()                          │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ OctocrabClient  │         │ test fakes           │
//! │ (direct API)    │         │ (stubbed responses)  │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, search_all};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let octocrab = octocrab::Octocrab::builder()
//!     .personal_token("token".to_string())
//!     .build()?;
//! let client = OctocrabClient::new(Arc::new(octocrab));
//!
//! let login = client.authenticated_login().await?;
//! let query = format!("is:pr is:merged author:{}", login);
//! let items = search_all(&client, &query).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod search;
pub mod token;
pub mod types;

pub use client::GitHubClient;
pub use octocrab_client::OctocrabClient;
pub use search::{SEARCH_PAGE_SIZE, search_all};
pub use token::token_from_env;
pub use types::{PullRequestDetail, SearchItem, SearchPage};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
