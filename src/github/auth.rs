//! GitHub token discovery.
//!
//! Checks in order:
//! 1. GITHUB_TOKEN environment variable
//! 2. GH_TOKEN environment variable
//! 3. gh CLI auth (via `gh auth token`)

use std::env;
use std::process::Command;

use tracing::debug;

use crate::error::GitHubError;

const TOKEN_ENV_VARS: [&str; 2] = ["GITHUB_TOKEN", "GH_TOKEN"];

/// Find a GitHub token from the environment or the gh CLI.
pub fn github_token() -> Result<String, GitHubError> {
    for var in TOKEN_ENV_VARS {
        if let Ok(token) = env::var(var) {
            if !token.is_empty() {
                debug!("using GitHub token from {var}");
                return Ok(token);
            }
        }
    }

    if let Some(token) = token_from_gh_cli() {
        debug!("using GitHub token from gh CLI");
        return Ok(token);
    }

    Err(GitHubError::TokenNotFound)
}

/// Ask an installed and authenticated gh CLI for its token.
fn token_from_gh_cli() -> Option<String> {
    which::which("gh").ok()?;

    let status = Command::new("gh").args(["auth", "status"]).output().ok()?;
    if !status.status.success() {
        return None;
    }

    let output = Command::new("gh").args(["auth", "token"]).output().ok()?;
    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if token.is_empty() {
        return None;
    }
    Some(token)
}
