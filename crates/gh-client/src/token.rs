//! Token resolution from the environment
//!
//! The token is read from `GITHUB_TOKEN`, with `GH_TOKEN` accepted as a
//! fallback alias. No other sources are consulted.

/// Read the GitHub token from the environment, if set
pub fn token_from_env() -> Option<String> {
    std::env::var("GITHUB_TOKEN")
        .or_else(|_| std::env::var("GH_TOKEN"))
        .ok()
        .filter(|token| !token.is_empty())
}
