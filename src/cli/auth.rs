//
//  gh-rest
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands.
//!
//! Tokens are kept in the system keyring under the API host. `GH_TOKEN` and
//! `GITHUB_TOKEN` take precedence over a stored token.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Deserialize;

use crate::api::GitHubClient;
use crate::auth::{read_token_from_stdin, token_from_env, validate_token, KeyringStore};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Store a token for the API host
    Login(LoginArgs),

    /// Remove the stored token
    Logout,

    /// Show which account the active token belongs to
    Status(StatusArgs),
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read the token from standard input
    #[arg(long)]
    pub with_token: bool,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the token
    #[arg(long, short = 't')]
    pub show_token: bool,
}

/// The parts of `GET /user` shown by `auth status`.
#[derive(Debug, Deserialize)]
struct AuthenticatedUser {
    login: String,
    #[serde(default)]
    name: Option<String>,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status(args) => status(args, global).await,
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    if !args.with_token {
        bail!("Only token login is supported. Run: echo $TOKEN | ghr auth login --with-token");
    }

    let config = global.config()?;
    let host = global.host(&config);

    eprintln!("Paste your access token:");
    let token = read_token_from_stdin()?;
    if !validate_token(&token) {
        bail!("Invalid token format");
    }

    let client = GitHubClient::from_config(&config, token.as_str())?;
    let user: AuthenticatedUser = client
        .get("/user", None)
        .await
        .context("Token was rejected by the server")?;

    KeyringStore::new()
        .store(&host, &token)
        .with_context(|| format!("Failed to store token for {}", host))?;

    println!(
        "{} Logged in to {} as {}",
        style("✓").green(),
        host,
        style(&user.login).bold()
    );
    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let config = global.config()?;
    let host = global.host(&config);

    KeyringStore::new().delete(&host)?;
    println!("{} Logged out of {}", style("✓").green(), host);

    if token_from_env().is_some() {
        eprintln!(
            "{} GH_TOKEN or GITHUB_TOKEN is still set and will be used",
            style("!").yellow()
        );
    }
    Ok(())
}

async fn status(args: &StatusArgs, global: &GlobalOptions) -> Result<()> {
    let client = global.client()?;
    let host = global.host(&global.config()?);

    let user: AuthenticatedUser = match client.get("/user", None).await {
        Ok(user) => user,
        Err(e) => {
            client.print_last_error()?;
            return Err(e.into());
        }
    };

    let source = if token_from_env().is_some() {
        "environment"
    } else {
        "keyring"
    };

    println!("{}", style(&host).bold());
    match user.name {
        Some(name) => println!("  Logged in as {} ({})", user.login, name),
        None => println!("  Logged in as {}", user.login),
    }
    println!("  Token source: {}", source);
    println!("  API: {}", client.base_url());
    if args.show_token {
        println!("  Token: {}", client.credentials().token());
    }
    Ok(())
}
