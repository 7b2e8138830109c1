//
//  gcore-cli
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use reqwest::StatusCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gcore_cli::api::ApiError;
use gcore_cli::cli::{Cli, Commands};
use gcore_cli::exit_codes;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_logging(cli.global.verbose);

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging. `GCORE_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "gcore_cli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GCORE_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps an error to a process exit code.
fn exit_code(error: &anyhow::Error) -> i32 {
    let Some(api_error) = error.downcast_ref::<ApiError>() else {
        return exit_codes::ERROR;
    };

    if let ApiError::Configuration(_) = api_error {
        return exit_codes::CONFIG_ERROR;
    }
    if api_error.is_auth() {
        return exit_codes::AUTH_ERROR;
    }

    match api_error.status() {
        Some(StatusCode::NOT_FOUND) => exit_codes::NOT_FOUND,
        Some(StatusCode::TOO_MANY_REQUESTS) => exit_codes::RATE_LIMIT,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(cmd) => cmd.run(&cli.global).await,
        Commands::Cdn(cmd) => cmd.run(&cli.global).await,
        Commands::Dns(cmd) => cmd.run(&cli.global).await,
        Commands::Storage(cmd) => cmd.run(&cli.global).await,
        Commands::Ssl(cmd) => cmd.run(&cli.global).await,
        Commands::Lb(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("{} version {}", gcore_cli::APP_NAME, gcore_cli::VERSION);
            Ok(())
        }
    }
}
