//
//  gh-rest
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{Config, CONFIG_KEYS};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    pub key: String,
    pub value: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => {
                if !CONFIG_KEYS.contains(&args.key.as_str()) {
                    bail!(
                        "Unknown configuration key '{}' (expected one of: {})",
                        args.key,
                        CONFIG_KEYS.join(", ")
                    );
                }
                if let Some(value) = Config::load()?.get(&args.key) {
                    println!("{}", value);
                }
                Ok(())
            }
            ConfigSubcommand::Set(args) => {
                let mut config = Config::load()?;
                config.set(&args.key, args.value.clone())?;
                config.save()?;
                println!("{} Set {} to {}", style("✓").green(), args.key, args.value);
                Ok(())
            }
            ConfigSubcommand::List => {
                let config = Config::load()?;
                if global.json {
                    println!("{}", serde_json::to_string_pretty(&config)?);
                    return Ok(());
                }
                for key in CONFIG_KEYS {
                    match config.get(key) {
                        Some(value) => println!("{}={}", key, value),
                        None => println!("{}", style(format!("{}=", key)).dim()),
                    }
                }
                Ok(())
            }
            ConfigSubcommand::Path => {
                println!("{}", Config::config_path()?.display());
                Ok(())
            }
        }
    }
}
