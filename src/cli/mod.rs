//
//  gh-rest
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod api;
mod auth;
mod config;

pub use api::ApiCommand;
pub use auth::AuthCommand;
pub use config::ConfigCommand;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::api::GitHubClient;
use crate::auth::{host_of, resolve_token, DEFAULT_BASE_URL};
use crate::config::Config;

/// Root command of the `ghr` binary.
#[derive(Parser, Debug)]
#[command(
    name = "ghr",
    version,
    about = "Call the GitHub REST API from the command line",
    long_about = "ghr sends authenticated requests to the GitHub REST API.\n\n\
                  It prints responses as received or as formatted JSON, and \
                  reports the server's error detail when a call fails.",
    propagate_version = true,
    after_help = "Use 'ghr <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command.
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// API endpoint (defaults to https://api.github.com)
    #[arg(long, global = true, env = "GHR_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(
        long,
        global = true,
        env = "GHR_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Output JSON where a command supports it
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Loads the configuration file and applies command-line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::load()?;
        if let Some(base_url) = &self.base_url {
            config.core.base_url = Some(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            config.core.timeout_secs = Some(timeout);
        }
        Ok(config)
    }

    /// Host the token is looked up under.
    pub fn host(&self, config: &Config) -> String {
        host_of(config.core.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))
    }

    /// Builds an authenticated client.
    pub fn client(&self) -> Result<GitHubClient> {
        let config = self.config()?;
        let host = self.host(&config);
        let token = resolve_token(&host).ok_or_else(|| {
            anyhow!(
                "Not authenticated with {}. Set GH_TOKEN or run 'ghr auth login --with-token'.",
                host
            )
        })?;
        Ok(GitHubClient::from_config(&config, token)?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make an authenticated API request
    Api(ApiCommand),

    /// Manage stored tokens
    #[command(visible_alias = "login")]
    Auth(AuthCommand),

    /// Read and write configuration
    Config(ConfigCommand),

    /// Print the version
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_api_command() {
        let cli = Cli::try_parse_from([
            "ghr",
            "api",
            "/orgs/acme/teams",
            "-X",
            "POST",
            "-F",
            "name=core",
            "--timeout",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.global.timeout, Some(5));
        assert!(matches!(cli.command, Commands::Api(_)));
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let result = Cli::try_parse_from(["ghr", "--timeout", "0", "version"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_host_follows_base_url() {
        let global = GlobalOptions::default();
        let mut config = Config::default();
        assert_eq!(global.host(&config), "github.com");

        config.core.base_url = Some("https://github.example.com/api/v3".to_string());
        assert_eq!(global.host(&config), "github.example.com");
    }
}
