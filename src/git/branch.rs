//! Branch resolution: current branch and the repository's default branch.

use git2::{BranchType, Repository};
use tracing::debug;

use crate::error::GitError;

/// Name of the currently checked-out branch.
///
/// Fails with [`GitError::DetachedHead`] when HEAD does not point at a
/// branch, since there is nothing to open a pull request from.
pub fn current_branch(repo: &Repository) -> Result<String, GitError> {
    let head = repo.head().map_err(GitError::HeadResolution)?;

    if !head.is_branch() {
        return Err(GitError::DetachedHead);
    }

    head.shorthand()
        .map(|name| name.to_string())
        .ok_or(GitError::InvalidBranchName)
}

/// Name of the branch pull requests should target.
///
/// Prefers the branch `origin/HEAD` points at, then a local `main` or
/// `master`, then the current branch as a last resort.
pub fn default_branch(repo: &Repository) -> Result<String, GitError> {
    if let Some(name) = origin_head_target(repo) {
        return Ok(name);
    }

    for candidate in ["main", "master"] {
        if repo.find_branch(candidate, BranchType::Local).is_ok() {
            debug!("origin/HEAD not set, using local branch '{candidate}' as default");
            return Ok(candidate.to_string());
        }
    }

    match current_branch(repo) {
        Ok(name) => {
            debug!("no main or master branch, falling back to current branch '{name}'");
            Ok(name)
        }
        Err(_) => Err(GitError::DefaultBranchNotFound),
    }
}

/// Branch name `refs/remotes/origin/HEAD` symbolically points at, if set.
fn origin_head_target(repo: &Repository) -> Option<String> {
    let reference = repo.find_reference("refs/remotes/origin/HEAD").ok()?;
    let target = reference.symbolic_target()?;
    target
        .strip_prefix("refs/remotes/origin/")
        .map(|name| name.to_string())
}
