//
//  gcore-cli
//  cli/wait.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `--wait` support for commands that start asynchronous jobs.

use std::future::Future;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Instant;
use tracing::debug;

use crate::api::{ApiResult, Entity, TaskState};
use crate::util::format_duration;

/// Polling options shared by purge and certificate commands.
#[derive(Args, Debug, Clone)]
pub struct WaitArgs {
    /// Wait until the job finishes
    #[arg(long)]
    pub wait: bool,

    /// Seconds between status checks
    #[arg(long, default_value_t = 5, value_name = "SECONDS")]
    pub interval: u64,

    /// Give up after this many seconds
    #[arg(long, default_value_t = 300, value_name = "SECONDS")]
    pub timeout: u64,
}

impl WaitArgs {
    fn interval(&self) -> Duration {
        Duration::from_secs(self.interval.max(1))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Polls `fetch` until the job reaches a terminal state.
///
/// Returns the final status entity on success. A failed job or an elapsed
/// timeout is an error. The spinner draws to stderr and is hidden when
/// stderr is not a terminal.
pub async fn wait_for_task<F, Fut>(label: &str, args: &WaitArgs, mut fetch: F) -> Result<Entity>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ApiResult<Entity>>,
{
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]")?);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner.set_message(label.to_string());

    let started = Instant::now();
    loop {
        let entity = match fetch().await {
            Ok(entity) => entity,
            Err(e) => {
                spinner.abandon();
                return Err(e.into());
            }
        };

        match TaskState::from_entity(&entity) {
            TaskState::Succeeded(status) => {
                spinner.finish_with_message(format!(
                    "{}: {} after {}",
                    label,
                    status,
                    format_duration(started.elapsed())
                ));
                return Ok(entity);
            }
            TaskState::Failed(detail) => {
                spinner.abandon_with_message(format!("{}: failed", label));
                bail!("{} failed: {}", label, detail);
            }
            TaskState::Pending(status) => {
                debug!(%status, elapsed = ?started.elapsed(), "job still running");
                spinner.set_message(format!("{} ({})", label, status));
            }
        }

        if started.elapsed() >= args.timeout() {
            spinner.abandon_with_message(format!("{}: timed out", label));
            bail!(
                "{} did not finish within {}",
                label,
                format_duration(args.timeout())
            );
        }

        tokio::time::sleep(args.interval()).await;
    }
}
