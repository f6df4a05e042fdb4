//
//  gh-rest
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gh_rest::api::ApiError;
use gh_rest::cli::{Cli, Commands};
use gh_rest::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code_for(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("GHR_DEBUG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Api(cmd) => cmd.run(&cli.global).await,
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("ghr version {}", gh_rest::VERSION);
            Ok(())
        }
    }
}

fn exit_code_for(error: &anyhow::Error) -> i32 {
    let detail = match error.downcast_ref::<ApiError>().and_then(ApiError::detail) {
        Some(detail) => detail,
        None => return exit_codes::ERROR,
    };

    if detail.is_rate_limited() {
        exit_codes::RATE_LIMIT
    } else if detail.is_unauthorized() {
        exit_codes::AUTH_ERROR
    } else if detail.is_not_found() {
        exit_codes::NOT_FOUND
    } else {
        exit_codes::ERROR
    }
}
