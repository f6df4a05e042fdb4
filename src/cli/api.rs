//
//  gh-rest
//  cli/api.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Direct API access command
//!
//! Sends one authenticated request to any GitHub REST endpoint, in the
//! manner of `gh api`. Fields become query parameters for `GET`/`HEAD` and
//! a JSON body for every other method.
//!
//! ## Examples
//!
//! ```bash
//! # List teams, second page
//! ghr api /orgs/acme/teams -F page=2 -F per_page=50
//!
//! # Create a team
//! ghr api -X POST /orgs/acme/teams -F name=core -F 'maintainers[]=octocat'
//!
//! # Body as received
//! ghr api /repos/acme/api --format raw
//!
//! # Boolean endpoint: succeeds only on 204 No Content
//! ghr api --check /orgs/acme/teams/core/repos/acme/api
//! ```

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use reqwest::Method;
use serde_json::Value;

use crate::api::{Format, GitHubClient, ParamValue, Params, Payload};

use super::GlobalOptions;

/// Make an authenticated API request
#[derive(Args, Debug)]
pub struct ApiCommand {
    /// API endpoint (e.g., /orgs/acme/teams)
    pub endpoint: String,

    /// HTTP method (GET, POST, PUT, PATCH, DELETE, HEAD)
    #[arg(long, short = 'X', default_value = "GET")]
    pub method: String,

    /// Typed parameter (key=value); `key[]=value` appends to a list
    #[arg(long, short = 'F', action = clap::ArgAction::Append)]
    pub field: Vec<String>,

    /// String parameter (key=value), never converted
    #[arg(long, short = 'f', action = clap::ArgAction::Append)]
    pub raw_field: Vec<String>,

    /// Output shape: raw or json
    #[arg(long, default_value = "json")]
    pub format: Format,

    /// Succeed only if the server answers 204 No Content
    #[arg(long)]
    pub check: bool,

    /// Print the response status before the body
    #[arg(long, short = 'i')]
    pub include: bool,
}

impl ApiCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let method = self.parse_method()?;
        let params = self.build_params()?;
        let client = global.client()?;

        if self.check {
            return self.run_check(&client, method, &params).await;
        }

        let response = match client.send(method, &self.endpoint, Some(&params)).await {
            Ok(response) => response,
            Err(e) => {
                if client.last_error().is_some() {
                    client.print_last_error()?;
                }
                return Err(e.into());
            }
        };

        if self.include {
            println!("{} {}", style("HTTP").dim(), response.status);
        }

        let payload = match client.format_response(response, self.format, Ok) {
            Ok(payload) => payload,
            Err(e) => {
                if client.last_error().is_some() {
                    client.print_last_error()?;
                }
                return Err(e.into());
            }
        };

        print_payload(payload)
    }

    async fn run_check(&self, client: &GitHubClient, method: Method, params: &Params) -> Result<()> {
        if client.check(method, &self.endpoint, Some(params)).await {
            println!("{} 204 No Content", style("✓").green());
            return Ok(());
        }

        client.print_last_error()?;
        bail!("Expected 204 No Content from {}", self.endpoint)
    }

    fn parse_method(&self) -> Result<Method> {
        let upper = self.method.to_uppercase();
        match upper.as_str() {
            "GET" | "POST" | "PUT" | "PATCH" | "DELETE" | "HEAD" => {
                Ok(Method::from_bytes(upper.as_bytes())?)
            }
            _ => bail!("Unsupported HTTP method: {}", self.method),
        }
    }

    fn build_params(&self) -> Result<Params> {
        let mut params = Params::new();
        let mut lists: Vec<(String, Vec<String>)> = Vec::new();

        for field in &self.field {
            let (key, value) = split_field(field)?;
            if let Some(name) = key.strip_suffix("[]") {
                push_list_item(&mut lists, name, value);
            } else {
                params.add(key, parse_field_value(value));
            }
        }

        for field in &self.raw_field {
            let (key, value) = split_field(field)?;
            if let Some(name) = key.strip_suffix("[]") {
                push_list_item(&mut lists, name, value);
            } else {
                params.add(key, value);
            }
        }

        for (name, items) in lists {
            params.add(name, items);
        }
        Ok(params)
    }
}

fn split_field(field: &str) -> Result<(&str, &str)> {
    match field.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid field format: {}. Expected key=value", field),
    }
}

fn push_list_item(lists: &mut Vec<(String, Vec<String>)>, name: &str, value: &str) {
    match lists.iter_mut().find(|(n, _)| n == name) {
        Some((_, items)) => items.push(value.to_string()),
        None => lists.push((name.to_string(), vec![value.to_string()])),
    }
}

/// Converts `true`, `false`, integers and decimals; everything else stays a
/// string. `null` leaves the parameter out.
fn parse_field_value(value: &str) -> ParamValue {
    match value {
        "true" => ParamValue::Bool(true),
        "false" => ParamValue::Bool(false),
        "null" => ParamValue::Absent,
        _ => {
            if let Ok(n) = value.parse::<i64>() {
                ParamValue::Int(n)
            } else if let Ok(n) = value.parse::<u64>() {
                ParamValue::UInt(n)
            } else if let Some(n) = value.parse::<f64>().ok().filter(|n| n.is_finite()) {
                ParamValue::Float(n)
            } else {
                ParamValue::Str(value.to_string())
            }
        }
    }
}

fn print_payload(payload: Payload<Value>) -> Result<()> {
    match payload {
        Payload::Raw(body) => {
            if !body.is_empty() {
                println!("{}", body.trim_end_matches('\n'));
            }
        }
        Payload::Structured(value) | Payload::Typed(value) => {
            if !value.is_null() {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        api: ApiCommand,
    }

    fn command(args: &[&str]) -> ApiCommand {
        let mut argv = vec!["ghr"];
        argv.extend_from_slice(args);
        Harness::try_parse_from(argv).unwrap().api
    }

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value("true"), ParamValue::Bool(true));
        assert_eq!(parse_field_value("42"), ParamValue::Int(42));
        assert_eq!(parse_field_value("1.5"), ParamValue::Float(1.5));
        assert_eq!(
            parse_field_value("18446744073709551615"),
            ParamValue::UInt(u64::MAX)
        );
        assert_eq!(parse_field_value("null"), ParamValue::Absent);
        assert_eq!(parse_field_value("NaN"), ParamValue::Str("NaN".to_string()));
        assert_eq!(parse_field_value("core"), ParamValue::Str("core".to_string()));
    }

    #[test]
    fn test_build_params_with_lists() {
        let cmd = command(&[
            "/orgs/acme/teams",
            "-F",
            "name=core",
            "-F",
            "maintainers[]=octocat",
            "-F",
            "maintainers[]=hubot",
            "-f",
            "description=42",
        ]);
        let params = cmd.build_params().unwrap();
        assert_eq!(
            params.to_body_payload(),
            serde_json::json!({
                "name": "core",
                "description": "42",
                "maintainers": ["octocat", "hubot"]
            })
        );
    }

    #[test]
    fn test_invalid_field_is_rejected() {
        let cmd = command(&["/user", "-F", "name"]);
        assert!(cmd.build_params().is_err());
    }

    #[test]
    fn test_parse_method() {
        assert_eq!(command(&["/user", "-X", "patch"]).parse_method().unwrap(), Method::PATCH);
        assert!(command(&["/user", "-X", "TRACE"]).parse_method().is_err());
    }

    #[test]
    fn test_format_flag() {
        assert_eq!(command(&["/user"]).format, Format::Structured);
        assert_eq!(command(&["/user", "--format", "raw"]).format, Format::Raw);
    }
}
