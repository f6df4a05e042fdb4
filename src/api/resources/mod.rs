//
//  gh-rest
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/14.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! GitHub resource wrappers.
//!
//! Each resource gets a small handle borrowed from the client
//! ([`GitHubClient::teams`], [`GitHubClient::pulls`], [`GitHubClient::repos`])
//! with one method per endpoint. Optional filters and request fields travel
//! in options structs that render themselves into [`Params`](super::Params);
//! the methods only build the path and pick the core call.
//!
//! # Module Organization
//!
//! - [`teams`] - Organization teams
//! - [`pulls`] - Pull requests
//! - [`repos`] - Repositories and collaborators
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_rest::api::GitHubClient;
//! use gh_rest::api::resources::NewTeam;
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//! let team = client.teams().create("acme", &NewTeam::new("core")).await?;
//!
//! if !client.teams().delete("acme", &team.slug).await {
//!     client.print_last_error().ok();
//! }
//! # Ok(())
//! # }
//! ```

pub mod pulls;
pub mod repos;
pub mod teams;

pub use pulls::*;
pub use repos::*;
pub use teams::*;

use super::client::GitHubClient;

impl GitHubClient {
    /// Team endpoints.
    pub fn teams(&self) -> TeamsApi<'_> {
        TeamsApi::new(self)
    }

    /// Pull request endpoints.
    pub fn pulls(&self) -> PullsApi<'_> {
        PullsApi::new(self)
    }

    /// Repository endpoints.
    pub fn repos(&self) -> ReposApi<'_> {
        ReposApi::new(self)
    }
}
