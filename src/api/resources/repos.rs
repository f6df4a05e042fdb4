//
//  gh-rest
//  api/resources/repos.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository and collaborator endpoints.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_rest::api::{Format, GitHubClient};
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//!
//! // Typed
//! let repo = client.repos().get("acme", "api").await?;
//! println!("{} ({})", repo.full_name, repo.default_branch.unwrap_or_default());
//!
//! // Same endpoint, body as received
//! let raw = client.repos().get_as("acme", "api", Format::Raw).await?;
//! println!("{}", raw.into_raw().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::GitHubClient;
use crate::api::common::{ApiError, ListOptions, SimpleUser};
use crate::api::format::{Format, Payload};
use crate::api::params::Params;

/// A repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    /// `owner/name`
    pub full_name: String,
    pub owner: SimpleUser,
    pub private: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    pub html_url: String,
    #[serde(default)]
    pub default_branch: Option<String>,
    /// `public`, `private` or `internal`
    #[serde(default)]
    pub visibility: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub open_issues_count: u32,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Filters for listing an organization's repositories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoListOptions {
    /// `all`, `public`, `private`, `forks`, `sources` or `member`.
    /// Sent as `type`.
    pub kind: Option<String>,
    /// `created`, `updated`, `pushed` or `full_name`
    pub sort: Option<String>,
    pub direction: Option<String>,
    pub list: ListOptions,
}

impl RepoListOptions {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new()
            .with("type", self.kind.as_deref())
            .with("sort", self.sort.as_deref())
            .with("direction", self.direction.as_deref());
        self.list.apply(&mut params);
        params
    }
}

/// Fields for creating a repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRepository {
    pub name: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub private: Option<bool>,
    pub visibility: Option<String>,
    pub has_issues: Option<bool>,
    pub auto_init: Option<bool>,
}

impl NewRepository {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        Params::new()
            .with("name", &self.name)
            .with("description", self.description.as_deref())
            .with("homepage", self.homepage.as_deref())
            .with("private", self.private)
            .with("visibility", self.visibility.as_deref())
            .with("has_issues", self.has_issues)
            .with("auto_init", self.auto_init)
    }
}

/// Repository endpoints of one client.
pub struct ReposApi<'a> {
    client: &'a GitHubClient,
}

impl<'a> ReposApi<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, owner: &str, repo: &str) -> Result<Repository, ApiError> {
        self.client
            .get(&format!("/repos/{}/{}", owner, repo), None)
            .await
    }

    /// `GET /repos/{owner}/{repo}` in the requested shape.
    pub async fn get_as(
        &self,
        owner: &str,
        repo: &str,
        format: Format,
    ) -> Result<Payload<Repository>, ApiError> {
        self.client
            .request(Method::GET, &format!("/repos/{}/{}", owner, repo), None, format)
            .await
    }

    pub async fn list_for_org(
        &self,
        org: &str,
        options: &RepoListOptions,
    ) -> Result<Vec<Repository>, ApiError> {
        let params = options.to_params();
        self.client
            .get(&format!("/orgs/{}/repos", org), Some(&params))
            .await
    }

    pub async fn create_in_org(
        &self,
        org: &str,
        repository: &NewRepository,
    ) -> Result<Repository, ApiError> {
        self.client
            .post(&format!("/orgs/{}/repos", org), &repository.to_params())
            .await
    }

    /// `DELETE /repos/{owner}/{repo}`; `true` on 204.
    pub async fn delete(&self, owner: &str, repo: &str) -> bool {
        self.client
            .delete(&format!("/repos/{}/{}", owner, repo))
            .await
    }

    /// Whether `username` is a collaborator; the server answers 204 or 404.
    pub async fn is_collaborator(&self, owner: &str, repo: &str, username: &str) -> bool {
        self.client
            .check(
                Method::GET,
                &format!("/repos/{}/{}/collaborators/{}", owner, repo, username),
                None,
            )
            .await
    }

    pub async fn remove_collaborator(&self, owner: &str, repo: &str, username: &str) -> bool {
        self.client
            .delete(&format!(
                "/repos/{}/{}/collaborators/{}",
                owner, repo, username
            ))
            .await
    }
}
