//
//  gh-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client Core for the GitHub API
//!
//! Every endpoint wrapper in this crate forwards to the handful of methods on
//! [`GitHubClient`] defined here. They cover three jobs:
//!
//! - **Dispatch** ([`GitHubClient::send`]): build the URL, attach the bearer
//!   token, put parameters in the query string (reads) or the JSON body
//!   (writes), and return the status and body verbatim.
//! - **Formatting** ([`GitHubClient::format_response`]): turn a raw response
//!   into the [`Payload`] shape the caller asked for, or into an
//!   [`ApiError`] when the status is not 2xx.
//! - **Boolean operations** ([`GitHubClient::check`]): calls whose only
//!   answer is "did the server reply 204".
//!
//! Failed calls are also recorded in the client's [`ErrorState`], readable
//! through [`GitHubClient::last_error`] and friends.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gh_rest::api::{Format, GitHubClient, Params, Payload};
//! use reqwest::Method;
//! use serde_json::Value;
//!
//! # async fn example() -> Result<(), gh_rest::api::ApiError> {
//! let client = GitHubClient::new("ghp_example")?;
//! let params = Params::new().with("per_page", 10);
//!
//! let payload: Payload<Value> = client
//!     .request(Method::GET, "/orgs/acme/teams", Some(&params), Format::Structured)
//!     .await?;
//! println!("{:?}", payload.into_structured());
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::common::{ApiError, ErrorDetail, ErrorState};
use super::format::{Format, Payload};
use super::params::Params;
use crate::auth::Credentials;
use crate::config::Config;

/// Media type GitHub recommends for REST requests.
pub const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// REST API version sent with every request.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Status that marks success for boolean-style operations.
pub const NO_CONTENT: u16 = 204;

/// A response as received, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The client for the GitHub REST API.
///
/// One instance is one session: it owns its [`Credentials`], which are never
/// changed after construction, and its own [`ErrorState`]. Instances are
/// independent of each other.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::time::Duration;
/// use gh_rest::api::GitHubClient;
///
/// let client = GitHubClient::new("ghp_example")?;
/// let client = GitHubClient::with_error_message("ghp_example", "GitHub call failed")?;
/// let client = GitHubClient::with_timeout("ghp_example", Duration::from_secs(5))?;
///
/// // Reuse whatever the previous client was built with
/// let again = GitHubClient::from_last()?;
/// # Ok::<(), gh_rest::api::ApiError>(())
/// ```
pub struct GitHubClient {
    /// The underlying HTTP client
    http: Client,
    /// Token, endpoint, default error message and timeout
    credentials: Credentials,
    /// Most recent failure on this instance
    errors: ErrorState,
}

impl GitHubClient {
    /// Creates a client for the public API with the given access token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if the token is blank or the HTTP
    /// client could not be built.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_credentials(Credentials::new(token)?)
    }

    /// Creates a client whose failures fall back to `message` when the server
    /// gives no message of its own.
    pub fn with_error_message(
        token: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, ApiError> {
        Self::from_credentials(Credentials::new(token)?.with_error_message(message))
    }

    /// Creates a client whose requests are bounded by `timeout`.
    pub fn with_timeout(token: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        Self::from_credentials(Credentials::new(token)?.with_timeout(timeout))
    }

    /// Creates a client with both a default error message and a timeout.
    pub fn with_error_message_and_timeout(
        token: impl Into<String>,
        message: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        Self::from_credentials(
            Credentials::new(token)?
                .with_error_message(message)
                .with_timeout(timeout),
        )
    }

    /// Creates a client from the credentials of the last client built in this
    /// process.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] if no client was built before.
    pub fn from_last() -> Result<Self, ApiError> {
        Self::from_credentials(Credentials::last()?)
    }

    /// Creates a client from the `[core]` section of a configuration file.
    pub fn from_config(config: &Config, token: impl Into<String>) -> Result<Self, ApiError> {
        Self::from_credentials(config.credentials(token)?)
    }

    /// Creates a client from fully specified credentials.
    ///
    /// The credentials are recorded as the process-wide last configuration
    /// once the client has been built.
    pub fn from_credentials(credentials: Credentials) -> Result<Self, ApiError> {
        url::Url::parse(credentials.base_url()).map_err(|e| {
            ApiError::Configuration(format!(
                "invalid base URL '{}': {}",
                credentials.base_url(),
                e
            ))
        })?;
        if credentials.effective_timeout().is_zero() {
            return Err(ApiError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_MEDIA_TYPE));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(GITHUB_API_VERSION),
        );

        let http = Client::builder()
            .user_agent(format!("{}/{}", crate::APP_NAME, crate::VERSION))
            .default_headers(headers)
            .timeout(credentials.effective_timeout())
            .build()
            .map_err(|e| ApiError::Configuration(format!("failed to build HTTP client: {e}")))?;

        credentials.remember();

        Ok(Self {
            http,
            credentials,
            errors: ErrorState::new(),
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        self.credentials.base_url()
    }

    /// Builds the full URL for a request.
    ///
    /// Read methods (`GET`, `HEAD`) get the query string of `params`; write
    /// methods carry their parameters in the body instead. Absolute URLs are
    /// accepted only on the base endpoint's scheme, host and port.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Configuration`] for an absolute URL on another
    /// origin, or one that does not parse.
    pub fn url_for(
        &self,
        method: &Method,
        path: &str,
        params: Option<&Params>,
    ) -> Result<String, ApiError> {
        let mut url = if path.starts_with("http://") || path.starts_with("https://") {
            self.ensure_same_origin(path)?;
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.base_url(), path)
        } else {
            format!("{}/{}", self.base_url(), path)
        };

        if is_read(method) {
            if let Some(params) = params {
                url.push_str(&params.to_query_string());
            }
        }
        Ok(url)
    }

    /// Sends one request and returns the status and body verbatim.
    ///
    /// No status is treated as a failure here. Parameters of write methods
    /// are sent as a JSON object body; an empty parameter set sends no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response arrives, including
    /// when the timeout expires. The failure is recorded in the error state.
    /// Returns [`ApiError::Configuration`] without sending anything when
    /// `path` is an absolute URL outside the base endpoint.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
    ) -> Result<RawResponse, ApiError> {
        let url = self.url_for(&method, path, params)?;
        let mut request = self
            .credentials
            .apply_to_request(self.http.request(method.clone(), &url));

        if !is_read(&method) {
            if let Some(params) = params.filter(|p| !p.is_empty()) {
                request = request.json(&params.to_body_payload());
            }
        }

        tracing::debug!(%method, %url, "Dispatching request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.transport_failure(err)),
        };
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return Err(self.transport_failure(err)),
        };

        tracing::debug!(%method, %url, status, "Received response");
        Ok(RawResponse { status, body })
    }

    /// Interprets a response in the requested shape.
    ///
    /// A non-2xx status is recorded in the error state and returned as
    /// [`ApiError::Server`]. On success:
    ///
    /// - [`Format::Raw`] returns the body unchanged
    /// - [`Format::Structured`] parses the body as JSON
    /// - [`Format::Typed`] parses the body and hands the tree to `construct`
    ///
    /// An empty body parses as JSON `null`.
    ///
    /// # Errors
    ///
    /// [`ApiError::Parse`] when the body is not JSON, and whatever error
    /// `construct` returns.
    pub fn format_response<T, F>(
        &self,
        response: RawResponse,
        format: Format,
        construct: F,
    ) -> Result<Payload<T>, ApiError>
    where
        F: FnOnce(Value) -> Result<T, ApiError>,
    {
        if !response.is_success() {
            let detail = ErrorDetail::from_response(
                response.status,
                &response.body,
                self.credentials.error_message(),
            );
            self.errors.record(&detail);
            return Err(ApiError::Server(detail));
        }

        match format {
            Format::Raw => Ok(Payload::Raw(response.body)),
            Format::Structured => Ok(Payload::Structured(parse_structured(&response.body)?)),
            Format::Typed => {
                let value = parse_structured(&response.body)?;
                Ok(Payload::Typed(construct(value)?))
            }
        }
    }

    /// Sends a request and returns the response in the requested shape,
    /// deserializing typed payloads with serde.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        format: Format,
    ) -> Result<Payload<T>, ApiError> {
        self.request_with(method, path, params, format, deserialize)
            .await
    }

    /// Like [`request`](Self::request), with a custom constructor for the
    /// typed shape.
    pub async fn request_with<T, F>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        format: Format,
        construct: F,
    ) -> Result<Payload<T>, ApiError>
    where
        F: FnOnce(Value) -> Result<T, ApiError>,
    {
        let response = self.send(method, path, params).await?;
        self.format_response(response, format, construct)
    }

    /// Sends a request and returns the body verbatim.
    pub async fn request_raw(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
    ) -> Result<String, ApiError> {
        let payload = self
            .request_with(method, path, params, Format::Raw, |_| Ok(()))
            .await?;
        Ok(payload.into_raw().unwrap_or_default())
    }

    /// Sends a request and returns the body as a JSON tree.
    pub async fn request_json(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
    ) -> Result<Value, ApiError> {
        let payload = self
            .request_with(method, path, params, Format::Structured, |_| Ok(()))
            .await?;
        Ok(payload.into_structured().unwrap_or(Value::Null))
    }

    /// Sends a request and deserializes the body into `T`.
    pub async fn request_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T, ApiError> {
        match self.request(method, path, params, Format::Typed).await? {
            Payload::Typed(value) => Ok(value),
            _ => Err(ApiError::Parse("typed payload expected".to_string())),
        }
    }

    /// `GET` a resource into `T`, with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&Params>,
    ) -> Result<T, ApiError> {
        self.request_typed(Method::GET, path, params).await
    }

    /// `POST` `params` as a JSON body and deserialize the response into `T`.
    pub async fn post<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, ApiError> {
        self.request_typed(Method::POST, path, Some(params)).await
    }

    /// `PATCH` `params` as a JSON body and deserialize the response into `T`.
    pub async fn patch<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, ApiError> {
        self.request_typed(Method::PATCH, path, Some(params)).await
    }

    /// `PUT` `params` as a JSON body and deserialize the response into `T`.
    pub async fn put<T: DeserializeOwned>(&self, path: &str, params: &Params) -> Result<T, ApiError> {
        self.request_typed(Method::PUT, path, Some(params)).await
    }

    /// `DELETE` a resource; `true` only when the server answers 204.
    pub async fn delete(&self, path: &str) -> bool {
        self.check(Method::DELETE, path, None).await
    }

    /// Runs a boolean-style operation.
    ///
    /// Returns `true` if and only if the server answered exactly 204. Every
    /// other outcome, other 2xx statuses and transport failures included, is
    /// recorded in the error state, logged, and reported as `false`; nothing
    /// is propagated.
    pub async fn check(&self, method: Method, path: &str, params: Option<&Params>) -> bool {
        let response = match self.send(method, path, params).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("{}", err);
                return false;
            }
        };

        if response.status == NO_CONTENT {
            return true;
        }

        let mut detail = ErrorDetail::from_response(
            response.status,
            &response.body,
            self.credentials.error_message(),
        );
        if response.is_success() {
            detail.message = format!(
                "unexpected status {} (expected {})",
                response.status, NO_CONTENT
            );
        }
        self.errors.record(&detail);
        tracing::warn!("{}", detail);
        false
    }

    /// The most recent failure on this client. Successful calls do not
    /// clear it.
    pub fn last_error(&self) -> Option<ErrorDetail> {
        self.errors.last()
    }

    /// Raw body of the most recent failure on this client.
    pub fn last_raw_error(&self) -> Option<String> {
        self.errors.last_raw()
    }

    /// Parsed body of the most recent failure on this client.
    pub fn last_structured_error(&self) -> Option<Value> {
        self.errors.last_structured()
    }

    /// Writes the most recent failure to `out`.
    pub fn write_last_error<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.errors.write_last(out)
    }

    /// Writes the most recent failure to standard error.
    pub fn print_last_error(&self) -> io::Result<()> {
        self.errors.write_last(&mut io::stderr().lock())
    }

    fn ensure_same_origin(&self, target: &str) -> Result<(), ApiError> {
        let invalid =
            |e: url::ParseError| ApiError::Configuration(format!("invalid URL '{target}': {e}"));
        let base = url::Url::parse(self.base_url()).map_err(invalid)?;
        let target_url = url::Url::parse(target).map_err(invalid)?;
        if base.origin() != target_url.origin() {
            tracing::warn!(
                %target,
                base = %self.base_url(),
                "Refusing request outside the base endpoint"
            );
            return Err(ApiError::Configuration(format!(
                "refusing to send credentials to '{}': outside {}",
                target_url.origin().ascii_serialization(),
                self.base_url()
            )));
        }
        Ok(())
    }

    fn transport_failure(&self, err: reqwest::Error) -> ApiError {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            format!(
                "request timed out after {:?}",
                self.credentials.effective_timeout()
            )
        } else {
            err.to_string()
        };
        let detail = ErrorDetail::transport(message);
        self.errors.record(&detail);
        ApiError::Transport { detail, timed_out }
    }
}

fn is_read(method: &Method) -> bool {
    *method == Method::GET || *method == Method::HEAD
}

fn parse_structured(body: &str) -> Result<Value, ApiError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

fn deserialize<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(value)?)
}
