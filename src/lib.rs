//
//  gh-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # GitHub REST Client Library
//!
//! A small client core for the GitHub REST API, plus the `ghr` command-line
//! front end built on it.
//!
//! ## Overview
//!
//! Every endpoint call goes through one [`GitHubClient`](api::GitHubClient):
//! parameters are collected in [`Params`](api::Params), sent as a query
//! string or a JSON body, and the answer comes back in the shape the caller
//! picked with [`Format`](api::Format): the raw body, a JSON tree, or a typed
//! value. Failures return an [`ApiError`](api::ApiError) and are also kept
//! as the client's last error.
//!
//! ## Module Structure
//!
//! - [`api`]: client core, parameters, output formats, errors, resources
//! - [`auth`]: credentials, token resolution, keychain storage
//! - [`config`]: configuration file management
//! - [`cli`]: command-line interface definitions using clap
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gh_rest::api::{GitHubClient, ListOptions};
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//!
//! match client.teams().list("acme", &ListOptions::new()).await {
//!     Ok(teams) => println!("{} teams", teams.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//!
//! if !client.repos().is_collaborator("acme", "api", "octocat").await {
//!     client.print_last_error().ok();
//! }
//! # Ok(())
//! # }
//! ```

/// API client core and resource wrappers.
///
/// The client handles authentication headers, parameter placement,
/// response formatting and error recording.
pub mod api;

/// Authentication and credential management.
///
/// Handles:
/// - Client credentials (token, endpoint, default error message, timeout)
/// - Token lookup from `GH_TOKEN`/`GITHUB_TOKEN`
/// - Secure token storage via system keychain
pub mod auth;

/// Command-line interface definitions.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/ghr/config.toml`
/// - macOS: `~/Library/Application Support/ghr/config.toml`
/// - Windows: `%APPDATA%\ghr\config.toml`
pub mod config;

pub use api::GitHubClient;
pub use cli::Cli;
pub use config::Config;

/// Application name, used for the user agent and configuration paths.
pub const APP_NAME: &str = "ghr";

/// Application version, taken from Cargo.toml at compile time.
///
/// # Example
///
/// ```rust
/// use gh_rest::VERSION;
///
/// println!("ghr version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors (clap reports invalid arguments with `2`)
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// The token is missing, invalid or lacks permission.
    ///
    /// Run `ghr auth login --with-token` or set `GH_TOKEN`.
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist or is not visible to the token.
    pub const NOT_FOUND: i32 = 8;

    /// API rate limit exceeded.
    pub const RATE_LIMIT: i32 = 32;
}
