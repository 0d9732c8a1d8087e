// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use clog_core::{Forge, Item, PullRequest, Reference};

use super::wire::{CommitJson, ErrorJson, IssueJson, PullJson, RefJson};
use crate::error::{Error, Result};

/// Records requested per listing page (the API maximum).
pub const PER_PAGE: u32 = 100;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = concat!("clog/", env!("CARGO_PKG_VERSION"));

/// Blocking client for one repository.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    api_url: String,
    owner: String,
    repo: String,
    token: Option<String>,
    per_page: u32,
}

impl GithubClient {
    /// Creates a client for `owner/repo` against `api_url`
    /// (e.g. `https://api.github.com`).
    pub fn new(api_url: &str, owner: &str, repo: &str, token: Option<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(GithubClient {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token,
            per_page: PER_PAGE,
        })
    }

    /// Overrides the listing page size.
    #[cfg(test)]
    pub(crate) fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.clamp(1, PER_PAGE);
        self
    }

    fn repo_url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url, self.owner, self.repo, path
        )
    }

    fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.repo_url(path);
        debug!(%url, ?query, "GET");

        let mut request = self.http.get(&url).header("Accept", ACCEPT).query(query);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let response = check_status(response)?;
        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|e| Error::UnexpectedResponse(format!("GET {}: {}", path, e)))
    }

    /// Query for zero-based page `index`. The API counts pages from 1.
    fn page_query(&self, index: usize) -> Vec<(&'static str, String)> {
        vec![
            ("per_page", self.per_page.to_string()),
            ("page", (index + 1).to_string()),
        ]
    }

    pub fn tags(&self, index: usize) -> Result<Vec<RefJson>> {
        self.get("tags", &self.page_query(index))
    }

    pub fn branches(&self, index: usize) -> Result<Vec<RefJson>> {
        self.get("branches", &self.page_query(index))
    }

    /// Closed issues and pull requests, most recently updated first.
    pub fn closed_issues(
        &self,
        since: Option<DateTime<Utc>>,
        index: usize,
    ) -> Result<Vec<IssueJson>> {
        let mut query = vec![
            ("state", "closed".to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ];
        if let Some(since) = since {
            query.push(("since", since.to_rfc3339_opts(SecondsFormat::Secs, true)));
        }
        query.extend(self.page_query(index));
        self.get("issues", &query)
    }

    pub fn pull(&self, number: u64) -> Result<PullJson> {
        self.get(&format!("pulls/{}", number), &[])
    }

    pub fn commit(&self, sha: &str) -> Result<CommitJson> {
        self.get(&format!("commits/{}", sha), &[])
    }
}

/// Map non-success statuses to errors.
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let exhausted = response
        .headers()
        .get("X-RateLimit-Remaining")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim() == "0");
    if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && exhausted) {
        return Err(Error::RateLimited);
    }

    let text = response.text().unwrap_or_default();
    let message = serde_json::from_str::<ErrorJson>(&text)
        .map(|e| e.message)
        .unwrap_or(text);
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

fn to_core(e: Error) -> clog_core::Error {
    clog_core::Error::Api(e.to_string())
}

impl Forge for GithubClient {
    fn tags_page(&self, index: usize) -> clog_core::Result<Vec<Reference>> {
        let refs = self.tags(index).map_err(to_core)?;
        Ok(refs.into_iter().map(Reference::from).collect())
    }

    fn branches_page(&self, index: usize) -> clog_core::Result<Vec<Reference>> {
        let refs = self.branches(index).map_err(to_core)?;
        Ok(refs.into_iter().map(Reference::from).collect())
    }

    fn closed_items_page(
        &self,
        since: Option<DateTime<Utc>>,
        index: usize,
    ) -> clog_core::Result<Vec<Item>> {
        let issues = self.closed_issues(since, index).map_err(to_core)?;
        Ok(issues.into_iter().map(Item::from).collect())
    }

    fn pull_request(&self, number: u64) -> clog_core::Result<PullRequest> {
        self.pull(number).map(PullRequest::from).map_err(to_core)
    }

    fn commit_time(&self, sha: &str) -> clog_core::Result<DateTime<Utc>> {
        let commit = self.commit(sha).map_err(to_core)?;
        commit.committed_at().ok_or_else(|| {
            clog_core::Error::Api(format!("commit {} has no committer date", commit.sha))
        })
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
