//
//  gh-rest
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Token Handling
//!
//! Helpers for obtaining the access token a client is built with.
//!
//! ## Resolution Order
//!
//! [`resolve_token`] looks in the following places and returns the first
//! token found:
//!
//! 1. The `GH_TOKEN` environment variable
//! 2. The `GITHUB_TOKEN` environment variable
//! 3. The system keyring entry for the host (see [`KeyringStore`])
//!
//! ## Example
//!
//! ```rust,no_run
//! use gh_rest::auth::{resolve_token, validate_token};
//!
//! if let Some(token) = resolve_token("github.com") {
//!     assert!(validate_token(&token));
//! }
//! ```

use anyhow::Result;

use super::KeyringStore;

/// Environment variables checked for a token, in order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

/// Reads a single trimmed line from standard input.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Checks that a token is non-empty and contains no whitespace.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Returns the first token set in [`TOKEN_ENV_VARS`].
pub fn token_from_env() -> Option<String> {
    TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Finds a token for `host` in the environment or the keyring.
///
/// An unavailable keyring (no secret service, locked keychain) counts as no
/// token.
pub fn resolve_token(host: &str) -> Option<String> {
    if let Some(token) = token_from_env() {
        tracing::debug!("Using token from environment");
        return Some(token);
    }

    match KeyringStore::new().get(host) {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!("Keyring lookup for {} failed: {:#}", host, e);
            None
        }
    }
}

/// Extracts the host name from a base URL, e.g. `api.github.com`.
///
/// The public API is stored under `github.com`, matching what users type at
/// `ghr auth login`.
pub fn host_of(base_url: &str) -> String {
    let host = url::Url::parse(base_url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| base_url.to_string());

    if host == "api.github.com" {
        "github.com".to_string()
    } else {
        host
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_token() {
        assert!(validate_token("ghp_abc123"));
        assert!(!validate_token(""));
        assert!(!validate_token("ghp abc"));
    }

    #[test]
    fn test_host_of() {
        assert_eq!(host_of("https://api.github.com"), "github.com");
        assert_eq!(
            host_of("https://github.example.com/api/v3"),
            "github.example.com"
        );
        assert_eq!(host_of("not a url"), "not a url");
    }
}
