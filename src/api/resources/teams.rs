//
//  gh-rest
//  api/resources/teams.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Organization team endpoints.
//!
//! Teams are addressed by organization login and team slug:
//! `/orgs/{org}/teams/{team_slug}`.
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_rest::api::GitHubClient;
//! use gh_rest::api::common::ListOptions;
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//! for team in client.teams().list("acme", &ListOptions::new()).await? {
//!     println!("{}: {}", team.slug, team.description.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::client::GitHubClient;
use crate::api::common::{ApiError, ListOptions};
use crate::api::params::Params;

/// A team within an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: u64,

    /// Display name.
    pub name: String,

    /// URL-safe identifier used in paths.
    pub slug: String,

    #[serde(default)]
    pub description: Option<String>,

    /// `secret` or `closed`.
    #[serde(default)]
    pub privacy: Option<String>,

    /// Default permission on repositories added to the team.
    #[serde(default)]
    pub permission: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    /// Only present on single-team responses.
    #[serde(default)]
    pub members_count: Option<u32>,

    /// Only present on single-team responses.
    #[serde(default)]
    pub repos_count: Option<u32>,
}

/// Fields for creating a team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTeam {
    pub name: String,
    pub description: Option<String>,
    /// Logins of the initial maintainers.
    pub maintainers: Vec<String>,
    /// `owner/repo` names of the initial repositories.
    pub repo_names: Vec<String>,
    pub privacy: Option<String>,
    pub parent_team_id: Option<u64>,
}

impl NewTeam {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .add("name", &self.name)
            .add("description", self.description.as_deref())
            .add("privacy", self.privacy.as_deref())
            .add("parent_team_id", self.parent_team_id);
        if !self.maintainers.is_empty() {
            params.add("maintainers", self.maintainers.clone());
        }
        if !self.repo_names.is_empty() {
            params.add("repo_names", self.repo_names.clone());
        }
        params
    }
}

/// Fields for updating a team. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub privacy: Option<String>,
    pub permission: Option<String>,
}

impl TeamUpdate {
    pub fn to_params(&self) -> Params {
        Params::new()
            .with("name", self.name.as_deref())
            .with("description", self.description.as_deref())
            .with("privacy", self.privacy.as_deref())
            .with("permission", self.permission.as_deref())
    }
}

/// Team endpoints of one client.
pub struct TeamsApi<'a> {
    client: &'a GitHubClient,
}

impl<'a> TeamsApi<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// `GET /orgs/{org}/teams`
    pub async fn list(&self, org: &str, options: &ListOptions) -> Result<Vec<Team>, ApiError> {
        let params = options.to_params();
        self.client
            .get(&format!("/orgs/{}/teams", org), Some(&params))
            .await
    }

    /// `GET /orgs/{org}/teams/{slug}`
    pub async fn get(&self, org: &str, slug: &str) -> Result<Team, ApiError> {
        self.client
            .get(&format!("/orgs/{}/teams/{}", org, slug), None)
            .await
    }

    /// `POST /orgs/{org}/teams`
    pub async fn create(&self, org: &str, team: &NewTeam) -> Result<Team, ApiError> {
        self.client
            .post(&format!("/orgs/{}/teams", org), &team.to_params())
            .await
    }

    /// `PATCH /orgs/{org}/teams/{slug}`
    pub async fn update(
        &self,
        org: &str,
        slug: &str,
        update: &TeamUpdate,
    ) -> Result<Team, ApiError> {
        self.client
            .patch(&format!("/orgs/{}/teams/{}", org, slug), &update.to_params())
            .await
    }

    /// `DELETE /orgs/{org}/teams/{slug}`; `true` on 204.
    pub async fn delete(&self, org: &str, slug: &str) -> bool {
        self.client
            .delete(&format!("/orgs/{}/teams/{}", org, slug))
            .await
    }

    /// Whether the team manages `owner/repo`; `true` on 204.
    pub async fn manages_repo(&self, org: &str, slug: &str, owner: &str, repo: &str) -> bool {
        self.client
            .check(
                Method::GET,
                &format!("/orgs/{}/teams/{}/repos/{}/{}", org, slug, owner, repo),
                None,
            )
            .await
    }

    /// Removes `owner/repo` from the team; `true` on 204.
    pub async fn remove_repo(&self, org: &str, slug: &str, owner: &str, repo: &str) -> bool {
        self.client
            .delete(&format!(
                "/orgs/{}/teams/{}/repos/{}/{}",
                org, slug, owner, repo
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_team_body_omits_unset_fields() {
        assert_eq!(
            NewTeam::new("core").to_params().to_body_payload(),
            serde_json::json!({"name": "core"})
        );
    }

    #[test]
    fn test_new_team_body_with_lists() {
        let team = NewTeam {
            privacy: Some("closed".to_string()),
            maintainers: vec!["octocat".to_string()],
            repo_names: vec!["acme/api".to_string(), "acme/web".to_string()],
            ..NewTeam::new("core")
        };
        assert_eq!(
            team.to_params().to_body_payload(),
            serde_json::json!({
                "name": "core",
                "privacy": "closed",
                "maintainers": ["octocat"],
                "repo_names": ["acme/api", "acme/web"]
            })
        );
    }

    #[test]
    fn test_team_deserializes_list_entry() {
        let team: Team = serde_json::from_str(
            r#"{"id":1,"node_id":"MDQ6VGVhbTE=","name":"Justice League","slug":"justice-league","description":"A great team.","privacy":"closed","permission":"admin","html_url":"https://github.com/orgs/github/teams/justice-league"}"#,
        )
        .unwrap();
        assert_eq!(team.slug, "justice-league");
        assert_eq!(team.members_count, None);
    }
}
