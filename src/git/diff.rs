//! Diff of the current branch against its merge base with the default branch.

use git2::{Commit, Diff, DiffFormat, Repository};
use tracing::warn;

use crate::error::GitError;

/// Changes between the merge base and HEAD.
#[derive(Debug, Clone)]
pub struct BranchDiff {
    /// Unified diff text with `+`/`-`/` ` origin characters.
    pub text: String,
    /// Changed file paths in diff order.
    pub files: Vec<String>,
}

impl BranchDiff {
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.files.is_empty()
    }
}

/// Diff HEAD against its merge base with `base`.
///
/// The base commit is resolved from `origin/<base>` when the remote
/// tracking ref exists, falling back to the local branch. Diffing from
/// the merge base keeps commits that landed on the base after the
/// branch point out of the pull request.
pub fn diff_against_base(repo: &Repository, base: &str) -> Result<BranchDiff, GitError> {
    let base_commit = resolve_base_commit(repo, base)?;
    let head_commit = repo
        .head()
        .map_err(GitError::HeadResolution)?
        .peel_to_commit()
        .map_err(GitError::HeadResolution)?;

    let merge_base = repo
        .merge_base(base_commit.id(), head_commit.id())
        .map_err(|source| GitError::MergeBaseNotFound {
            base: base.to_string(),
            source,
        })?;

    let base_tree = repo
        .find_commit(merge_base)
        .and_then(|commit| commit.tree())
        .map_err(GitError::DiffFailed)?;
    let head_tree = head_commit.tree().map_err(GitError::DiffFailed)?;

    let diff = repo
        .diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)
        .map_err(GitError::DiffFailed)?;

    Ok(BranchDiff {
        text: collect_diff_text(&diff),
        files: collect_changed_files(&diff),
    })
}

/// Resolve the base branch to a commit, preferring the remote tracking ref.
fn resolve_base_commit<'repo>(
    repo: &'repo Repository,
    base: &str,
) -> Result<Commit<'repo>, GitError> {
    let remote_ref = format!("origin/{base}");

    let object = match repo.revparse_single(&remote_ref) {
        Ok(object) => object,
        Err(_) => repo
            .revparse_single(base)
            .map_err(|source| GitError::BaseNotFound {
                base: base.to_string(),
                source,
            })?,
    };

    object.peel_to_commit().map_err(|source| GitError::BaseNotFound {
        base: base.to_string(),
        source,
    })
}

/// Changed file paths from the diff deltas, in diff order.
fn collect_changed_files(diff: &Diff<'_>) -> Vec<String> {
    let mut files = Vec::new();

    for delta in diff.deltas() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        if !path.is_empty() {
            files.push(path);
        }
    }

    files
}

/// Unified diff text with origin characters, as `git diff` prints it.
fn collect_diff_text(diff: &Diff<'_>) -> String {
    let mut text = String::new();

    if let Err(e) = diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
        let origin = line.origin();
        if origin == '+' || origin == '-' || origin == ' ' {
            text.push(origin);
        }
        text.push_str(std::str::from_utf8(line.content()).unwrap_or(""));
        true
    }) {
        warn!("Failed to collect diff text: {e}");
    }

    text
}
