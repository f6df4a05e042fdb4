//
//  gh-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by the client core and every
//! resource wrapper: the error taxonomy, the captured detail of a failed
//! call, the per-client "last error" slot, and small value types that appear
//! in many GitHub payloads.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`ErrorDetail`] - Raw and structured detail of one failed call
//! - [`ErrorState`] - The most recent failure seen by one client instance
//! - [`SimpleUser`] - Lightweight user reference embedded in most resources
//! - Pagination options (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use gh_rest::api::common::{ApiError, ErrorDetail};
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::Server(detail)) if detail.is_not_found() => {
//!             println!("Resource not found: {}", detail.message)
//!         }
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub mod pagination;

pub use pagination::*;

/// Unified error type for all GitHub API operations.
///
/// | Variant | Description | HTTP Status |
/// |---------|-------------|-------------|
/// | `Configuration` | No usable credentials, or a URL outside the base endpoint | N/A |
/// | `Transport` | Connection failure or timeout | N/A |
/// | `Server` | The server answered with a failure status | non-2xx |
/// | `Parse` | The body was malformed or missing a required field | 2xx |
///
/// `Transport` and `Server` carry the [`ErrorDetail`] of the failed call, the
/// same value that is recorded in the client's [`ErrorState`].
#[derive(Error, Debug)]
pub enum ApiError {
    /// No credentials are available, the HTTP client could not be built, or
    /// a request targets a URL outside the base endpoint.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The request never produced a response.
    #[error("Network error: {}", detail.message)]
    Transport {
        /// Detail of the failure; `status` is always `None`.
        detail: ErrorDetail,
        /// Whether the configured timeout expired.
        timed_out: bool,
    },

    /// The server returned a failure status.
    #[error("{0}")]
    Server(ErrorDetail),

    /// The response body did not have the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Detail of the failed call, for server and transport failures.
    pub fn detail(&self) -> Option<&ErrorDetail> {
        match self {
            Self::Transport { detail, .. } | Self::Server(detail) => Some(detail),
            _ => None,
        }
    }

    /// HTTP status of the failed call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        self.detail().and_then(|d| d.status)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { timed_out: true, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Raw and structured detail of one failed call.
///
/// GitHub reports failures as:
///
/// ```json
/// {
///   "message": "Validation Failed",
///   "errors": [{"resource": "Team", "field": "name", "code": "missing_field"}],
///   "documentation_url": "https://docs.github.com/rest"
/// }
/// ```
///
/// `message` is taken from that body when possible. The client's configured
/// default message is used only when the body carries no message of its own;
/// the structured body is always kept in `json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    /// HTTP status, or `None` for transport failures.
    pub status: Option<u16>,
    /// The response body, verbatim. Empty when there was none.
    pub body: String,
    /// The body parsed as JSON, when it was well-formed.
    pub json: Option<Value>,
    /// Human-readable summary.
    pub message: String,
    /// `documentation_url` from the error body, when present.
    pub documentation_url: Option<String>,
}

impl ErrorDetail {
    /// Builds the detail of a response with a failure status.
    ///
    /// `fallback` is the client's default error message; it replaces the
    /// generic `API error (<status>)` text when the server gave no message.
    pub fn from_response(status: u16, body: &str, fallback: Option<&str>) -> Self {
        let json = serde_json::from_str::<Value>(body).ok();
        let message = json
            .as_ref()
            .and_then(extract_message)
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| {
                if body.trim().is_empty() {
                    format!("API error ({status})")
                } else {
                    format!("API error ({status}): {}", body.trim())
                }
            });
        let documentation_url = json
            .as_ref()
            .and_then(|j| j.get("documentation_url"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status: Some(status),
            body: body.to_string(),
            json,
            message,
            documentation_url,
        }
    }

    /// Builds the detail of a request that produced no response.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            body: String::new(),
            json: None,
            message: message.into(),
            documentation_url: None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == Some(401)
    }

    /// GitHub signals exhausted rate limits with 403 or 429.
    pub fn is_rate_limited(&self) -> bool {
        match self.status {
            Some(429) => true,
            Some(403) => self.message.to_ascii_lowercase().contains("rate limit"),
            _ => false,
        }
    }
}

impl fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "HTTP {}: {}", status, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Pulls a human-readable message out of an error body.
fn extract_message(json: &Value) -> Option<String> {
    // GitHub format: {"message": "...", "errors": [...]}
    if let Some(message) = json.get("message").and_then(Value::as_str) {
        let reasons: Vec<String> = json
            .get("errors")
            .and_then(Value::as_array)
            .map(|errors| errors.iter().filter_map(describe_field_error).collect())
            .unwrap_or_default();

        return Some(if reasons.is_empty() {
            message.to_string()
        } else {
            format!("{} ({})", message, reasons.join("; "))
        });
    }

    // Nested format: {"error": {"message": "..."}}
    if let Some(message) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    // OAuth format: {"error": "...", "error_description": "..."}
    json.get("error_description")
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn describe_field_error(error: &Value) -> Option<String> {
    if let Some(text) = error.as_str() {
        return Some(text.to_string());
    }
    if let Some(message) = error.get("message").and_then(Value::as_str) {
        return Some(message.to_string());
    }
    let field = error.get("field").and_then(Value::as_str)?;
    let code = error.get("code").and_then(Value::as_str).unwrap_or("invalid");
    Some(format!("{field}: {code}"))
}

/// The most recent failure seen by one client instance.
///
/// Every failing call overwrites the slot; successful calls leave it alone, so
/// a stale failure stays readable until the next one replaces it. This is a
/// convenience for callers that inspect failures after the fact; the error
/// returned by each call already carries its own [`ErrorDetail`].
///
/// The slot is guarded by a mutex, so concurrent calls on one client never
/// tear it, but which of two concurrent failures ends up recorded is not
/// defined.
#[derive(Debug, Default)]
pub struct ErrorState {
    last: Mutex<Option<ErrorDetail>>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the recorded failure.
    pub fn record(&self, detail: &ErrorDetail) {
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        *last = Some(detail.clone());
    }

    /// The last recorded failure, if any.
    pub fn last(&self) -> Option<ErrorDetail> {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Raw body of the last failure.
    pub fn last_raw(&self) -> Option<String> {
        self.last().map(|d| d.body)
    }

    /// Parsed body of the last failure, when it was JSON.
    pub fn last_structured(&self) -> Option<Value> {
        self.last().and_then(|d| d.json)
    }

    /// Writes a human-readable rendering of the last failure to `out`.
    pub fn write_last<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Some(detail) = self.last() else {
            return writeln!(out, "No API error recorded");
        };

        writeln!(out, "API error: {}", detail)?;
        if let Some(url) = &detail.documentation_url {
            writeln!(out, "Documentation: {}", url)?;
        }
        match &detail.json {
            Some(json) => {
                let pretty = serde_json::to_string_pretty(json).map_err(io::Error::other)?;
                writeln!(out, "{}", pretty)?;
            }
            None if !detail.body.is_empty() => writeln!(out, "{}", detail.body)?,
            None => {}
        }
        Ok(())
    }
}

/// Lightweight user reference embedded in most GitHub resources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleUser {
    /// The user's handle.
    pub login: String,

    /// Numeric account id.
    pub id: u64,

    /// `User`, `Organization` or `Bot`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub html_url: Option<String>,

    #[serde(default)]
    pub site_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_from_github_body() {
        let body = r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#;
        let detail = ErrorDetail::from_response(404, body, None);
        assert_eq!(detail.message, "Not Found");
        assert_eq!(detail.status, Some(404));
        assert_eq!(
            detail.documentation_url.as_deref(),
            Some("https://docs.github.com/rest")
        );
        assert!(detail.is_not_found());
    }

    #[test]
    fn test_message_includes_validation_errors() {
        let body = r#"{"message":"Validation Failed","errors":[{"resource":"Team","field":"name","code":"missing_field"},{"message":"name is too long"}]}"#;
        let detail = ErrorDetail::from_response(422, body, None);
        assert_eq!(
            detail.message,
            "Validation Failed (name: missing_field; name is too long)"
        );
    }

    #[test]
    fn test_default_message_does_not_replace_server_message() {
        let body = r#"{"message":"Bad credentials"}"#;
        let detail = ErrorDetail::from_response(401, body, Some("request rejected"));
        assert_eq!(detail.message, "Bad credentials");
        assert!(detail.json.is_some());
    }

    #[test]
    fn test_default_message_used_for_unparsable_body() {
        let detail = ErrorDetail::from_response(502, "<html>bad gateway</html>", Some("request rejected"));
        assert_eq!(detail.message, "request rejected");
        assert_eq!(detail.body, "<html>bad gateway</html>");
        assert!(detail.json.is_none());
    }

    #[test]
    fn test_default_message_used_when_body_has_no_message() {
        let detail = ErrorDetail::from_response(500, r#"{"oops":true}"#, Some("request rejected"));
        assert_eq!(detail.message, "request rejected");
        assert_eq!(detail.json, Some(serde_json::json!({"oops": true})));
    }

    #[test]
    fn test_generic_message_without_default() {
        let detail = ErrorDetail::from_response(404, "", None);
        assert_eq!(detail.message, "API error (404)");
        assert_eq!(detail.to_string(), "HTTP 404: API error (404)");
    }

    #[test]
    fn test_rate_limit_detection() {
        let detail = ErrorDetail::from_response(
            403,
            r#"{"message":"API rate limit exceeded for user ID 1."}"#,
            None,
        );
        assert!(detail.is_rate_limited());
        assert!(!ErrorDetail::from_response(403, r#"{"message":"Forbidden"}"#, None).is_rate_limited());
    }

    #[test]
    fn test_error_state_keeps_only_latest() {
        let state = ErrorState::new();
        assert!(state.last().is_none());

        state.record(&ErrorDetail::from_response(404, r#"{"message":"Not Found"}"#, None));
        state.record(&ErrorDetail::from_response(409, r#"{"message":"Conflict"}"#, None));

        assert_eq!(state.last().and_then(|d| d.status), Some(409));
        assert_eq!(state.last_raw().as_deref(), Some(r#"{"message":"Conflict"}"#));
        assert_eq!(
            state.last_structured(),
            Some(serde_json::json!({"message": "Conflict"}))
        );
    }

    #[test]
    fn test_write_last_renders_detail() {
        let state = ErrorState::new();
        let mut out = Vec::new();
        state.write_last(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No API error recorded\n");

        state.record(&ErrorDetail::transport("connection refused"));
        let mut out = Vec::new();
        state.write_last(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "API error: connection refused\n"
        );
    }

    #[test]
    fn test_api_error_exposes_detail() {
        let err = ApiError::Server(ErrorDetail::from_response(404, "", None));
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_timeout());

        let err: ApiError = serde_json::from_str::<Value>("{").unwrap_err().into();
        assert!(matches!(err, ApiError::Parse(_)));
        assert!(err.detail().is_none());
    }
}
