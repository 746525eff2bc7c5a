//! Result collection
//!
//! Runs the paginated search, optionally enriches each hit with the full
//! pull request detail, and projects onto the report records.

use anyhow::Result;
use chrono::{DateTime, Utc};
use gh_client::{GitHubClient, PullRequestDetail, SearchItem, search_all};
use log::{error, info};
use serde::Serialize;
use serde_json::Value;

use crate::query::SearchQuery;

/// Projected output record: the handful of fields the report keeps
#[derive(Debug, Clone, Serialize)]
pub struct PrSummary {
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
    pub title: String,
    pub body: String,
}

/// One record of the final report
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Record {
    Summary(PrSummary),
    Raw(Value),
}

/// Output shape selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Project onto url/created_at/merged_at/title/body
    #[default]
    Summary,

    /// Keep the raw API records, merged with the detail when repo-scoped
    AllDetails,
}

/// Run the search and enrichment pipeline, returning the report records.
///
/// When `scope` is given, each hit is enriched with the full PR detail,
/// fetched one at a time in list order. A failed detail fetch drops that
/// item, logs the PR number, and the run continues; search failures abort.
pub async fn collect(
    client: &dyn GitHubClient,
    query: &SearchQuery,
    scope: Option<(&str, &str)>,
    mode: OutputMode,
) -> Result<Vec<Record>> {
    let items = search_all(client, &query.to_string()).await?;
    info!("Found {} PRs", items.len());

    let mut records = Vec::with_capacity(items.len());
    for item in items {
        match scope {
            Some((org, repo)) => {
                let detail = match client.fetch_pull_request(org, repo, item.number).await {
                    Ok(detail) => detail,
                    Err(err) => {
                        error!("Failed to fetch PR #{} details: {:#}", item.number, err);
                        continue;
                    }
                };
                records.push(enriched_record(&item, &detail, mode));
            }
            None => records.push(plain_record(&item, mode)),
        }
    }

    Ok(records)
}

/// Record for a hit that was enriched with its pull request detail
fn enriched_record(item: &SearchItem, detail: &PullRequestDetail, mode: OutputMode) -> Record {
    match mode {
        OutputMode::AllDetails => Record::Raw(merge_raw(&item.raw, &detail.raw)),
        OutputMode::Summary => Record::Summary(PrSummary {
            url: item.html_url.clone(),
            created_at: item.created_at,
            merged_at: detail.merged_at,
            title: item.title.clone(),
            body: detail.body.clone().unwrap_or_default(),
        }),
    }
}

/// Record for an unscoped hit, built from the search result alone
fn plain_record(item: &SearchItem, mode: OutputMode) -> Record {
    match mode {
        OutputMode::AllDetails => Record::Raw(item.raw.clone()),
        OutputMode::Summary => Record::Summary(PrSummary {
            url: item.html_url.clone(),
            created_at: item.created_at,
            // Search results carry no merged_at; the query filters to
            // merged PRs, so closed_at stands in.
            merged_at: item.closed_at,
            title: item.title.clone(),
            body: item.body.clone().unwrap_or_default(),
        }),
    }
}

/// Merge two raw API records, keys from `detail` winning
fn merge_raw(item: &Value, detail: &Value) -> Value {
    match (item, detail) {
        (Value::Object(item), Value::Object(detail)) => {
            let mut merged = item.clone();
            for (key, value) in detail {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        // Non-object payloads cannot be merged field-wise
        _ => detail.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use gh_client::SearchPage;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn created(n: u64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, n as u32, 12, 0, 0).unwrap()
    }

    fn item(number: u64) -> SearchItem {
        SearchItem {
            number,
            title: format!("PR {}", number),
            body: Some(format!("search body {}", number)),
            html_url: format!("https://github.com/acme/widgets/pull/{}", number),
            created_at: created(number),
            closed_at: Some(created(number + 1)),
            raw: json!({
                "number": number,
                "title": format!("PR {}", number),
                "state": "closed",
            }),
        }
    }

    fn detail(number: u64) -> PullRequestDetail {
        PullRequestDetail {
            merged_at: Some(created(number + 2)),
            body: Some(format!("detail body {}", number)),
            raw: json!({
                "number": number,
                "merged": true,
                "state": "merged",
            }),
        }
    }

    /// One page of canned items; per-number detail responses, with
    /// selected numbers failing the detail fetch.
    struct FakeClient {
        items: Vec<SearchItem>,
        details: HashMap<u64, PullRequestDetail>,
        failing: Vec<u64>,
        detail_calls: Mutex<Vec<u64>>,
    }

    impl FakeClient {
        fn new(items: Vec<SearchItem>) -> Self {
            let details = items.iter().map(|i| (i.number, detail(i.number))).collect();
            Self {
                items,
                details,
                failing: Vec::new(),
                detail_calls: Mutex::new(Vec::new()),
            }
        }

        fn failing_numbers(mut self, numbers: Vec<u64>) -> Self {
            self.failing = numbers;
            self
        }
    }

    #[async_trait]
    impl GitHubClient for FakeClient {
        async fn authenticated_login(&self) -> anyhow::Result<String> {
            Ok("octocat".to_string())
        }

        async fn search_pull_requests(
            &self,
            _query: &str,
            page: u32,
        ) -> anyhow::Result<SearchPage> {
            let items = if page == 1 { self.items.clone() } else { Vec::new() };
            Ok(SearchPage {
                total_count: self.items.len() as u64,
                items,
            })
        }

        async fn fetch_pull_request(
            &self,
            _owner: &str,
            _repo: &str,
            pr_number: u64,
        ) -> anyhow::Result<PullRequestDetail> {
            self.detail_calls.lock().unwrap().push(pr_number);
            if self.failing.contains(&pr_number) {
                anyhow::bail!("404 Not Found for PR #{}", pr_number);
            }
            Ok(self.details.get(&pr_number).unwrap().clone())
        }
    }

    fn query() -> SearchQuery {
        SearchQuery::with_today(
            "octocat",
            None,
            None,
            chrono::NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        )
    }

    fn as_json(records: &[Record]) -> Value {
        serde_json::to_value(records).unwrap()
    }

    #[tokio::test]
    async fn unscoped_summary_uses_closed_at_and_search_body() {
        let client = FakeClient::new(vec![item(1)]);

        let records = collect(&client, &query(), None, OutputMode::Summary)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        let json = as_json(&records);
        assert_eq!(json[0]["url"], "https://github.com/acme/widgets/pull/1");
        assert_eq!(json[0]["title"], "PR 1");
        assert_eq!(json[0]["body"], "search body 1");
        // closed_at stands in for merged_at when no detail was fetched
        assert_eq!(
            json[0]["merged_at"],
            serde_json::to_value(created(2)).unwrap()
        );
        assert!(client.detail_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn scoped_summary_takes_merged_at_and_body_from_detail() {
        let client = FakeClient::new(vec![item(1)]);

        let records = collect(
            &client,
            &query(),
            Some(("acme", "widgets")),
            OutputMode::Summary,
        )
        .await
        .unwrap();

        let json = as_json(&records);
        assert_eq!(json[0]["body"], "detail body 1");
        assert_eq!(
            json[0]["merged_at"],
            serde_json::to_value(created(3)).unwrap()
        );
        assert_eq!(*client.detail_calls.lock().unwrap(), vec![1]);
    }

    #[tokio::test]
    async fn detail_fetch_failure_skips_only_that_item() {
        let client = FakeClient::new(vec![item(1), item(2), item(3)]).failing_numbers(vec![2]);

        let records = collect(
            &client,
            &query(),
            Some(("acme", "widgets")),
            OutputMode::Summary,
        )
        .await
        .unwrap();

        assert_eq!(records.len(), 2);
        let json = as_json(&records);
        assert_eq!(json[0]["title"], "PR 1");
        assert_eq!(json[1]["title"], "PR 3");
        // all three were attempted, in list order
        assert_eq!(*client.detail_calls.lock().unwrap(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn all_details_unscoped_keeps_raw_item() {
        let client = FakeClient::new(vec![item(1)]);

        let records = collect(&client, &query(), None, OutputMode::AllDetails)
            .await
            .unwrap();

        let json = as_json(&records);
        assert_eq!(json[0], item(1).raw);
    }

    #[tokio::test]
    async fn all_details_scoped_merges_detail_over_item() {
        let client = FakeClient::new(vec![item(1)]);

        let records = collect(
            &client,
            &query(),
            Some(("acme", "widgets")),
            OutputMode::AllDetails,
        )
        .await
        .unwrap();

        let json = as_json(&records);
        // keys only in the item survive, detail keys win on conflict
        assert_eq!(json[0]["title"], "PR 1");
        assert_eq!(json[0]["merged"], true);
        assert_eq!(json[0]["state"], "merged");
    }

    #[tokio::test]
    async fn empty_search_yields_empty_report() {
        let client = FakeClient::new(Vec::new());

        let records = collect(&client, &query(), None, OutputMode::Summary)
            .await
            .unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn merge_raw_with_non_object_detail_returns_detail() {
        let merged = merge_raw(&json!({"a": 1}), &json!(null));
        assert_eq!(merged, json!(null));
    }
}
