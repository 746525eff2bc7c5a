//! Search query construction
//!
//! Builds the GitHub search expression for merged PRs by one author in a
//! date window, with an optional repository scope.

use chrono::{Months, NaiveDate, Utc};
use std::fmt;

/// A GitHub search expression, immutable once built
///
/// Renders as `is:pr is:merged author:<user> created:<start>..<end>`,
/// with a trailing ` repo:<org>/<repo>` term when scoped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    author: String,
    since: NaiveDate,
    until: NaiveDate,
    repo: Option<(String, String)>,
}

impl SearchQuery {
    /// Build a query whose window ends today (UTC)
    ///
    /// A missing `since` defaults to six calendar months before today.
    pub fn new(author: &str, since: Option<NaiveDate>, repo: Option<(&str, &str)>) -> Self {
        Self::with_today(author, since, repo, Utc::now().date_naive())
    }

    /// Build a query with an explicit "today", for deterministic tests
    pub fn with_today(
        author: &str,
        since: Option<NaiveDate>,
        repo: Option<(&str, &str)>,
        today: NaiveDate,
    ) -> Self {
        Self {
            author: author.to_string(),
            since: since.unwrap_or_else(|| default_window_start(today)),
            until: today,
            repo: repo.map(|(org, repo)| (org.to_string(), repo.to_string())),
        }
    }

    /// Start of the search window
    pub fn since(&self) -> NaiveDate {
        self.since
    }

    /// End of the search window
    pub fn until(&self) -> NaiveDate {
        self.until
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "is:pr is:merged author:{} created:{}..{}",
            self.author, self.since, self.until
        )?;
        if let Some((org, repo)) = &self.repo {
            write!(f, " repo:{}/{}", org, repo)?;
        }
        Ok(())
    }
}

/// Six calendar months before `today`, clamped at month ends
fn default_window_start(today: NaiveDate) -> NaiveDate {
    today
        .checked_sub_months(Months::new(6))
        .unwrap_or(NaiveDate::MIN)
}
