//! prow - A CLI tool that opens GitHub pull requests with auto-generated
//! conventional commit titles.
//!
//! # Overview
//!
//! prow diffs the current branch against the repository's default branch,
//! classifies the change into an Angular-style commit type (`feat`, `fix`,
//! `docs`, ...), derives a scope from the changed paths, and creates or
//! updates the pull request on GitHub with the generated title and summary.

pub mod analysis;
pub mod error;
pub mod git;
pub mod github;

// Re-export commonly used types
pub use analysis::{ChangeSet, CommitType};
pub use error::{GitError, GitHubError};
pub use git::BranchDiff;
pub use github::{PublishedPr, PullRequest};
