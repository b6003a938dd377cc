//! Git operations using git2-rs, plus a shell-out push.

pub mod branch;
pub mod diff;
pub mod remote;
pub mod repo;

pub use branch::{current_branch, default_branch};
pub use diff::{diff_against_base, BranchDiff};
pub use remote::{origin_url, push_branch};
pub use repo::discover_repository;
