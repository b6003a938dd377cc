//! Branch-change analysis: commit type, scope, title, and summary.
//!
//! Everything in this module is pure. No I/O happens here, nothing
//! fails, and the same diff and file list always produce the same
//! output.

pub mod changeset;
pub mod commit_type;
pub mod content;
pub mod files;
pub mod patterns;
pub mod resolver;

pub use changeset::ChangeSet;
pub use commit_type::CommitType;
pub use resolver::resolve_commit_type;
