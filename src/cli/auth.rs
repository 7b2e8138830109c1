//
//  gcore-cli
//  cli/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication commands for the Gcore CLI.
//!
//! Gcore uses permanent API tokens. `login` verifies a token against the
//! IAM service and saves it to the configuration file; every other command
//! then picks it up unless `--token` or `GCORE_API_TOKEN` overrides it.

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::auth::{mask_token, read_token_from_stdin, validate_token, TOKEN_ENV};
use crate::config::Config;
use crate::interactive::prompt_password;

use super::GlobalOptions;

/// Manage the API token
#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Verify a token and save it
    Login(LoginArgs),

    /// Remove the saved token
    Logout,

    /// Verify the active token and show where it came from
    Status,

    /// Print the active token
    Token,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Read the token from standard input
    #[arg(long)]
    pub with_token: bool,
}

impl AuthCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            AuthSubcommand::Login(args) => login(args, global).await,
            AuthSubcommand::Logout => logout(global),
            AuthSubcommand::Status => status(global).await,
            AuthSubcommand::Token => token(global),
        }
    }
}

async fn login(args: &LoginArgs, global: &GlobalOptions) -> Result<()> {
    let token = if let Some(token) = &global.token {
        token.clone()
    } else if args.with_token {
        read_token_from_stdin()?
    } else {
        eprintln!("Create a permanent API token in the Gcore Customer Portal under Profile > API Tokens.");
        prompt_password("API token")?
    };

    if !validate_token(&token) {
        bail!("Invalid token format");
    }

    let mut config = Config::load()?;

    // Verify against the configured host before anything is written
    let candidate = GlobalOptions {
        token: Some(token.clone()),
        ..global.clone()
    };
    let provider = candidate.auth_provider_with(&config)?;
    eprintln!("Validating token...");
    provider.validate().await?;

    config.api_token = Some(token);
    config.save().context("Failed to save token")?;

    if global.json {
        let result = serde_json::json!({
            "logged_in": true,
            "api_url": provider.base_url(),
            "token": mask_token(provider.token()),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} Logged in to {}",
            style("✓").green().bold(),
            provider.base_url()
        );
    }

    Ok(())
}

fn logout(global: &GlobalOptions) -> Result<()> {
    let mut config = Config::load()?;
    let removed = config.clear_token();

    if removed {
        config.save()?;
    }

    if global.json {
        let result = serde_json::json!({ "logged_out": removed });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if removed {
        println!("{} Removed saved token", style("✓").green().bold());
    } else {
        println!("No saved token");
    }

    if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.trim().is_empty()) {
        global
            .output()
            .write_warning(&format!("{} is still set in the environment", TOKEN_ENV));
    }

    Ok(())
}

async fn status(global: &GlobalOptions) -> Result<()> {
    let config = Config::load()?;
    let provider = global.auth_provider_with(&config)?;
    let source = token_source(global);

    provider.validate().await?;

    if global.json {
        let result = serde_json::json!({
            "valid": true,
            "api_url": provider.base_url(),
            "token": mask_token(provider.token()),
            "source": source,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", style(provider.base_url()).bold());
        println!(
            "  {} Token {} is valid",
            style("✓").green(),
            mask_token(provider.token())
        );
        println!("  Source: {}", source);
    }

    Ok(())
}

fn token(global: &GlobalOptions) -> Result<()> {
    let provider = global.auth_provider()?;
    println!("{}", provider.token());
    Ok(())
}

/// Names the source the active token was resolved from.
fn token_source(global: &GlobalOptions) -> &'static str {
    if global.token.as_deref().is_some_and(|t| !t.trim().is_empty()) {
        "--token flag"
    } else if std::env::var(TOKEN_ENV).is_ok_and(|t| !t.trim().is_empty()) {
        TOKEN_ENV
    } else {
        "config file"
    }
}
