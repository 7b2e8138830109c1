//
//  gcore-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Token Helpers
//!
//! Gcore permanent API tokens are created in the Gcore Customer Portal under
//! *Profile → API Tokens*. They are opaque strings sent as bearer tokens.
//!
//! This module contains the small pieces `gcore auth` needs around a token:
//! reading it from stdin, checking its format, and masking it for display.

use anyhow::Result;

/// Reads a token from standard input.
///
/// Only the first line is read; surrounding whitespace is trimmed. Intended
/// for piped input: `echo "$TOKEN" | gcore auth login --with-token`.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// Validates the format of a token string.
///
/// A token must be non-empty and must not contain whitespace or control
/// characters, since it travels inside an `Authorization` header.
///
/// # Example
///
/// ```rust
/// use gcore_cli::auth::validate_token;
///
/// assert!(validate_token("12345$abcdef"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// assert!(!validate_token("has\nnewline"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty()
        && !token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
}

/// Masks a token for display, keeping the first and last 4 characters.
///
/// Tokens of 8 characters or fewer are fully masked.
///
/// ```rust
/// use gcore_cli::auth::mask_token;
///
/// assert_eq!(mask_token("abcd1234efgh"), "abcd...efgh");
/// assert_eq!(mask_token("short"), "*****");
/// ```
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}
