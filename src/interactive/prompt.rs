//
//  gcore-cli
//  interactive/prompt.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Interactive Prompts Module
//!
//! Thin wrappers over `dialoguer` for the two prompts the CLI needs: hidden
//! token entry and yes/no confirmation before destructive calls.

use std::io::IsTerminal;

use anyhow::{bail, Result};
use dialoguer::{Confirm, Password};

/// Prompts for a secret without echoing it. Surrounding whitespace is
/// trimmed.
pub fn prompt_password(message: &str) -> Result<String> {
    let password = Password::new().with_prompt(message).interact()?;
    Ok(password.trim().to_string())
}

/// Asks a yes/no question with a default answer.
pub fn prompt_confirm_with_default(message: &str, default: bool) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(default)
        .interact()?;
    Ok(confirmed)
}

/// Confirms a destructive action.
///
/// Returns `true` immediately when `assume_yes` is set. Without a terminal
/// on stdin there is nobody to ask, so the action is refused with an error
/// pointing at `--yes`.
pub fn confirm_destructive(message: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    if !std::io::stdin().is_terminal() {
        bail!("{} Re-run with --yes to confirm non-interactively.", message);
    }

    prompt_confirm_with_default(message, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes_skips_prompt() {
        assert!(confirm_destructive("Delete zone 1?", true).unwrap());
    }
}
