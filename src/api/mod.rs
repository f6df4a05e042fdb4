//
//  gh-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the client core for the GitHub REST API and the
//! resource wrappers built on it.
//!
//! ## Architecture
//!
//! - [`client`]: request dispatch, response formatting, boolean operations
//! - [`params`]: the parameter builder for query strings and JSON bodies
//! - [`format`]: the output shape selector and the matching payload type
//! - [`common`]: errors, the last-error slot, pagination options, shared types
//! - [`resources`]: one method per endpoint for teams, pull requests and
//!   repositories
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gh_rest::api::GitHubClient;
//! use gh_rest::api::common::ListOptions;
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//! let teams = client.teams().list("acme", &ListOptions::new().per_page(50)).await?;
//! for team in teams {
//!     println!("{} ({})", team.name, team.slug);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Value-returning calls return [`ApiError`]:
//!
//! - `Configuration`: no usable credentials
//! - `Transport`: no response (connection failure, timeout)
//! - `Server`: non-2xx status, with the server's error detail
//! - `Parse`: malformed body or missing required field
//!
//! Boolean-style calls (deletes, membership checks) return `bool` and never
//! propagate; their failures are only visible through the client's last
//! error.

/// Request dispatch and response formatting.
pub mod client;

/// Shared error, error-state, pagination and user types.
pub mod common;

/// Output shape selection.
pub mod format;

/// Query string and request body builder.
pub mod params;

/// Endpoint wrappers for individual GitHub resources.
pub mod resources;

pub use client::{GitHubClient, RawResponse};
pub use common::{ApiError, ErrorDetail, ListOptions};
pub use format::{Format, Payload};
pub use params::{ParamValue, Params};
