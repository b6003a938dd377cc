//! Repository discovery.

use std::path::Path;

use git2::Repository;

use crate::error::GitError;

/// Locate the repository enclosing `path`, searching parent directories
/// the way git itself does, so running from a subdirectory of the work
/// tree behaves like running from its root.
pub fn discover_repository(path: impl AsRef<Path>) -> Result<Repository, GitError> {
    Repository::discover(path).map_err(GitError::OpenRepository)
}
