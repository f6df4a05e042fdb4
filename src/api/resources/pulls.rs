//
//  gh-rest
//  api/resources/pulls.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pull request endpoints under `/repos/{owner}/{repo}/pulls`.

use std::fmt;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::GitHubClient;
use crate::api::common::{ApiError, ListOptions, SimpleUser};
use crate::api::params::Params;

/// Pull request state filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullState {
    Open,
    Closed,
    All,
}

impl PullState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PullState::Open => "open",
            PullState::Closed => "closed",
            PullState::All => "all",
        }
    }
}

impl fmt::Display for PullState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a pull request is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    Merge,
    Squash,
    Rebase,
}

impl MergeMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeMethod::Merge => "merge",
            MergeMethod::Squash => "squash",
            MergeMethod::Rebase => "rebase",
        }
    }
}

/// A pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    /// `open` or `closed`
    pub state: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<SimpleUser>,
    pub head: PullRef,
    pub base: PullRef,
    #[serde(default)]
    pub draft: bool,
    /// Only present on single pull request responses.
    #[serde(default)]
    pub merged: Option<bool>,
    #[serde(default)]
    pub mergeable: Option<bool>,
    #[serde(default)]
    pub html_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// One side of a pull request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRef {
    /// `owner:branch`
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    #[serde(default)]
    pub user: Option<SimpleUser>,
}

/// Outcome of a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    #[serde(default)]
    pub sha: Option<String>,
    pub merged: bool,
    pub message: String,
}

/// Filters for listing pull requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullListOptions {
    pub state: Option<PullState>,
    /// `user:branch` of the head to filter by.
    pub head: Option<String>,
    pub base: Option<String>,
    /// `created`, `updated`, `popularity` or `long-running`
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub direction: Option<String>,
    pub list: ListOptions,
}

impl PullListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: PullState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("state", self.state.map(|s| s.as_str()))
            .with("head", self.head.as_deref())
            .with("base", self.base.as_deref())
            .with("sort", self.sort.as_deref())
            .with("direction", self.direction.as_deref());
        self.list.apply(&mut params);
        params
    }
}

/// Fields for opening a pull request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewPullRequest {
    pub title: String,
    /// Branch containing the changes, `user:branch` across forks.
    pub head: String,
    /// Branch the changes are pulled into.
    pub base: String,
    pub body: Option<String>,
    pub draft: Option<bool>,
    pub maintainer_can_modify: Option<bool>,
}

impl NewPullRequest {
    pub fn new(title: impl Into<String>, head: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: head.into(),
            base: base.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("title", &self.title)
            .with("head", &self.head)
            .with("base", &self.base)
            .with("body", self.body.as_deref())
            .with("draft", self.draft)
            .with("maintainer_can_modify", self.maintainer_can_modify)
    }
}

/// Fields for updating a pull request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullUpdate {
    pub title: Option<String>,
    pub body: Option<String>,
    /// `open` or `closed`; `All` is not accepted by the server.
    pub state: Option<PullState>,
    pub base: Option<String>,
}

impl PullUpdate {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("title", self.title.as_deref())
            .with("body", self.body.as_deref())
            .with("state", self.state.map(|s| s.as_str()))
            .with("base", self.base.as_deref())
    }
}

/// Fields for merging a pull request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeOptions {
    pub commit_title: Option<String>,
    pub commit_message: Option<String>,
    /// Head SHA the merge must match.
    pub sha: Option<String>,
    pub merge_method: Option<MergeMethod>,
}

impl MergeOptions {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("commit_title", self.commit_title.as_deref())
            .with("commit_message", self.commit_message.as_deref())
            .with("sha", self.sha.as_deref())
            .with("merge_method", self.merge_method.map(|m| m.as_str()))
    }
}

/// Pull request endpoints of one client.
pub struct PullsApi<'a> {
    client: &'a GitHubClient,
}

impl<'a> PullsApi<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        owner: &str,
        repo: &str,
        options: &PullListOptions,
    ) -> Result<Vec<PullRequest>, ApiError> {
        let params = options.to_params();
        self.client
            .get(&format!("/repos/{}/{}/pulls", owner, repo), Some(&params))
            .await
    }

    pub async fn get(&self, owner: &str, repo: &str, number: u64) -> Result<PullRequest, ApiError> {
        self.client
            .get(&format!("/repos/{}/{}/pulls/{}", owner, repo, number), None)
            .await
    }

    pub async fn create(
        &self,
        owner: &str,
        repo: &str,
        pull: &NewPullRequest,
    ) -> Result<PullRequest, ApiError> {
        self.client
            .post(&format!("/repos/{}/{}/pulls", owner, repo), &pull.to_params())
            .await
    }

    pub async fn update(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        update: &PullUpdate,
    ) -> Result<PullRequest, ApiError> {
        self.client
            .patch(
                &format!("/repos/{}/{}/pulls/{}", owner, repo, number),
                &update.to_params(),
            )
            .await
    }

    /// `true` when the server answers 204 (merged); 404 means not merged.
    pub async fn is_merged(&self, owner: &str, repo: &str, number: u64) -> bool {
        self.client
            .check(
                Method::GET,
                &format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number),
                None,
            )
            .await
    }

    pub async fn merge(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        options: &MergeOptions,
    ) -> Result<MergeResult, ApiError> {
        self.client
            .put(
                &format!("/repos/{}/{}/pulls/{}/merge", owner, repo, number),
                &options.to_params(),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_options_query() {
        let options = PullListOptions {
            list: ListOptions::new().per_page(10),
            ..PullListOptions::new().state(PullState::Closed).base("main")
        };
        assert_eq!(
            options.to_params().to_query_string(),
            "?state=closed&base=main&per_page=10"
        );
    }

    #[test]
    fn test_new_pull_request_body() {
        let pull = NewPullRequest {
            draft: Some(true),
            ..NewPullRequest::new("Add retries", "octocat:retries", "main")
        };
        assert_eq!(
            pull.to_params().to_body_payload(),
            json!({
                "title": "Add retries",
                "head": "octocat:retries",
                "base": "main",
                "draft": true
            })
        );
    }

    #[test]
    fn test_merge_options_body() {
        let options = MergeOptions {
            merge_method: Some(MergeMethod::Squash),
            ..Default::default()
        };
        assert_eq!(
            options.to_params().to_body_payload(),
            json!({"merge_method": "squash"})
        );
    }

    #[test]
    fn test_pull_request_deserializes() {
        let pull: PullRequest = serde_json::from_value(json!({
            "id": 1,
            "number": 1347,
            "state": "open",
            "title": "Amazing new feature",
            "body": null,
            "user": {"login": "octocat", "id": 1, "type": "User"},
            "head": {"label": "octocat:new-topic", "ref": "new-topic", "sha": "6dcb09b"},
            "base": {"label": "octocat:master", "ref": "master", "sha": "6dcb09c"},
            "created_at": "2011-01-26T19:01:12Z",
            "updated_at": "2011-01-26T19:01:12Z",
            "closed_at": null
        }))
        .unwrap();
        assert_eq!(pull.number, 1347);
        assert_eq!(pull.head.ref_name, "new-topic");
        assert!(!pull.draft);
        assert_eq!(pull.merged_at, None);
        assert_eq!(pull.created_at.to_rfc3339(), "2011-01-26T19:01:12+00:00");
    }
}
