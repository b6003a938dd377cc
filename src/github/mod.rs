//! GitHub API operations using octocrab.

pub mod auth;
pub mod prs;
pub mod template;

pub use auth::github_token;
pub use prs::{
    build_client, create_or_update_pr, find_open_pr, parse_github_remote, PublishedPr, PullRequest,
};
pub use template::{apply_template, fetch_template};
