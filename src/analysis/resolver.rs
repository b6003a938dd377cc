//! Commit type resolution.

use super::commit_type::CommitType;
use super::content;
use super::files;
use super::patterns::{KeywordCategory, PathCategory};

/// Resolve the commit type for a change.
///
/// Guards run in a fixed order and the first match wins. Path signals
/// (test/docs/build/ci) come before diff vocabulary because they are
/// structural; `feat` is the fallback so every change gets a usable type.
pub fn resolve_commit_type(diff: &str, files: &[String]) -> CommitType {
    // Test wins only when the change touches nothing but test files
    if files::all_test_files(files) {
        return CommitType::Test;
    }

    if files::matches_any(PathCategory::Docs, files) {
        return CommitType::Docs;
    }
    if files::matches_any(PathCategory::Build, files) {
        return CommitType::Build;
    }
    if files::matches_any(PathCategory::Ci, files) {
        return CommitType::Ci;
    }

    if content::contains_keyword(KeywordCategory::BugFix, diff) {
        return CommitType::Fix;
    }
    if content::contains_keyword(KeywordCategory::Performance, diff) {
        return CommitType::Perf;
    }
    if content::contains_keyword(KeywordCategory::Refactor, diff) {
        return CommitType::Refactor;
    }

    if content::has_code_addition(diff) {
        return CommitType::Feat;
    }

    CommitType::Feat
}
