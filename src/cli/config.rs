//
//  gcore-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Read-only views of `~/.config/gcore/config.yaml`. The token is written by
//! `gcore auth login` and removed by `gcore auth logout`.

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::auth::mask_token;
use crate::config::Config;
use crate::output::print_field;

use super::GlobalOptions;

/// Inspect the configuration file
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the configuration file path
    Path,

    /// Show the saved configuration, with the token masked
    Show,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Path => self.path(global),
            ConfigSubcommand::Show => self.show(global),
        }
    }

    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.is_file(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }

    fn show(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let token = config.token().map(mask_token);

        if global.json {
            let result = serde_json::json!({
                "api_token": token,
                "api_url": config.api_url,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        let color = global.output().color_enabled();
        print_field("api_token", token.as_deref().unwrap_or("(not set)"), color);
        print_field(
            "api_url",
            config.api_url.as_deref().unwrap_or("(default)"),
            color,
        );

        Ok(())
    }
}
