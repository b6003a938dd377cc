//! Error types for prow modules using thiserror.

use thiserror::Error;

/// Errors from git operations.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Could not determine HEAD: {0}")]
    HeadResolution(#[source] git2::Error),

    #[error("in detached HEAD state, please checkout a branch")]
    DetachedHead,

    #[error("Current branch name is not valid UTF-8")]
    InvalidBranchName,

    #[error("Could not determine default branch")]
    DefaultBranchNotFound,

    #[error("Could not resolve base branch '{base}': {source}")]
    BaseNotFound {
        base: String,
        #[source]
        source: git2::Error,
    },

    #[error("No merge base between '{base}' and HEAD: {source}")]
    MergeBaseNotFound {
        base: String,
        #[source]
        source: git2::Error,
    },

    #[error("Failed to collect diff: {0}")]
    DiffFailed(#[source] git2::Error),

    #[error("No 'origin' remote found: {0}")]
    NoOriginRemote(#[source] git2::Error),

    #[error("Remote 'origin' has no URL")]
    RemoteUrlMissing,

    #[error("Failed to push branch '{branch}': {message}")]
    PushFailed { branch: String, message: String },
}

/// Errors from GitHub API operations.
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error(
        "GitHub token not found. Set GITHUB_TOKEN or GH_TOKEN environment variable, or authenticate with 'gh auth login'"
    )]
    TokenNotFound,

    #[error("Failed to build GitHub client: {0}")]
    ClientBuild(#[source] Box<octocrab::Error>),

    #[error("GitHub API request failed: {0}")]
    Api(#[source] Box<octocrab::Error>),

    #[error("Rate limited by GitHub API. Resets at: {reset_time}")]
    RateLimited { reset_time: String },

    #[error("Repository not found: {owner}/{repo}")]
    RepositoryNotFound { owner: String, repo: String },

    #[error("Failed to parse repository URL")]
    InvalidRepositoryUrl,
}
