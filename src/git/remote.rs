//! Origin remote access and branch push.
//!
//! Pushing shells out to the system `git` binary so the user's existing
//! credentials, SSH agent, and config apply unchanged.

use std::process::Command;

use git2::Repository;

use crate::error::GitError;

/// URL of the `origin` remote.
pub fn origin_url(repo: &Repository) -> Result<String, GitError> {
    let remote = repo.find_remote("origin").map_err(GitError::NoOriginRemote)?;

    remote
        .url()
        .map(|url| url.to_string())
        .ok_or(GitError::RemoteUrlMissing)
}

/// Push `branch` to origin with an upstream tracking ref (`push -u`).
pub fn push_branch(repo: &Repository, branch: &str) -> Result<(), GitError> {
    let workdir = repo.workdir().unwrap_or_else(|| repo.path());

    let output = Command::new("git")
        .args(["push", "-u", "origin", branch])
        .current_dir(workdir)
        .output()
        .map_err(|e| GitError::PushFailed {
            branch: branch.to_string(),
            message: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::PushFailed {
            branch: branch.to_string(),
            message: stderr.trim().to_string(),
        });
    }

    Ok(())
}
