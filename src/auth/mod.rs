//
//  gh-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! This module holds the credentials a client is built from and the helpers
//! the command-line front end uses to find a token.
//!
//! ## Module Structure
//!
//! - [`Credentials`]: access token, base endpoint, default error message and
//!   timeout of one client session
//! - [`token`]: token validation and resolution from the environment
//! - [`keyring`]: secure token storage using the system keyring
//!
//! ## Reusing the Last Configuration
//!
//! Every client that is successfully built records its credentials as the
//! process-wide "last configuration". [`Credentials::last`] hands back a copy,
//! which is what `GitHubClient::from_last` builds on. Before any client has
//! been built it fails with [`ApiError::Configuration`].
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use gh_rest::auth::Credentials;
//!
//! let credentials = Credentials::new("ghp_example")?
//!     .with_error_message("GitHub request failed")
//!     .with_timeout(Duration::from_secs(10));
//!
//! assert_eq!(credentials.base_url(), "https://api.github.com");
//! assert_eq!(credentials.timeout(), Some(Duration::from_secs(10)));
//! # Ok::<(), gh_rest::api::ApiError>(())
//! ```

mod keyring;
mod token;

pub use self::keyring::*;
pub use self::token::*;

use std::fmt;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::RequestBuilder;

use crate::api::ApiError;

/// Base endpoint of the public GitHub REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Timeout applied to every request when none was configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

static LAST_CREDENTIALS: Lazy<RwLock<Option<Credentials>>> = Lazy::new(|| RwLock::new(None));

/// Credentials and settings for one client session.
///
/// The `with_*` methods configure a value before it is handed to a client;
/// once a client owns it, it is only ever read.
///
/// # Notes
///
/// - The `Debug` output never includes the token.
/// - The base URL is stored without a trailing slash.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
    base_url: String,
    error_message: Option<String>,
    timeout: Option<Duration>,
}

impl Credentials {
    /// Creates credentials for the public API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] when `token` is empty or blank.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ApiError::Configuration(
                "an access token is required".to_string(),
            ));
        }

        Ok(Self {
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            error_message: None,
            timeout: None,
        })
    }

    /// Points the credentials at another endpoint (GitHub Enterprise, a mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the message used when a failed response carries none.
    pub fn with_error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The timeout that bounds each request.
    pub fn effective_timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }

    /// Adds the `Authorization: Bearer <token>` header.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }

    /// Records these credentials as the process-wide last configuration.
    pub fn remember(&self) {
        let mut last = LAST_CREDENTIALS
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *last = Some(self.clone());
    }

    /// The credentials of the most recently built client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if no client has been built in this
    /// process yet.
    pub fn last() -> Result<Self, ApiError> {
        LAST_CREDENTIALS
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or_else(|| {
                ApiError::Configuration(
                    "no access token was configured and no previous client exists".to_string(),
                )
            })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("error_message", &self.error_message)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_is_rejected() {
        assert!(matches!(
            Credentials::new("   "),
            Err(ApiError::Configuration(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let credentials = Credentials::new("abc123")
            .unwrap()
            .with_base_url("https://github.example.com/api/v3/");
        assert_eq!(credentials.base_url(), "https://github.example.com/api/v3");
    }

    #[test]
    fn test_effective_timeout_defaults() {
        let credentials = Credentials::new("abc123").unwrap();
        assert_eq!(credentials.timeout(), None);
        assert_eq!(credentials.effective_timeout(), DEFAULT_TIMEOUT);

        let credentials = credentials.with_timeout(Duration::from_millis(250));
        assert_eq!(credentials.effective_timeout(), Duration::from_millis(250));
    }

    #[test]
    fn test_debug_redacts_token() {
        let credentials = Credentials::new("ghp_secret").unwrap();
        let rendered = format!("{:?}", credentials);
        assert!(!rendered.contains("ghp_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
