//! Path-based classification of changed files.

use super::patterns::{PathCategory, library};

/// True if any changed path matches any pattern in the category.
pub fn matches_any(category: PathCategory, files: &[String]) -> bool {
    let patterns = library().path_patterns(category);
    files
        .iter()
        .any(|file| patterns.iter().any(|re| re.is_match(file)))
}

/// True iff every changed path is a test file.
///
/// An empty file list is not a test-only change.
pub fn all_test_files(files: &[String]) -> bool {
    if files.is_empty() {
        return false;
    }
    let patterns = library().path_patterns(PathCategory::Test);
    files
        .iter()
        .all(|file| patterns.iter().any(|re| re.is_match(file)))
}

/// True if any changed path mentions tests at all.
///
/// Broader than the test-file patterns; drives the summary's
/// "Add or update tests" line.
pub fn any_path_mentions_tests(files: &[String]) -> bool {
    files.iter().any(|file| file.to_lowercase().contains("test"))
}

/// Module-root markers whose following path segment names a subsystem.
const SCOPE_MARKERS: [&str; 3] = ["internal", "pkg", "cmd"];

/// Fixed scope token for files under the command root.
const CLI_SCOPE: &str = "cli";

/// Determine the dominant scope of a change from its file paths.
///
/// Each path contributes the segment after the first module-root marker
/// in its directory (`internal/auth/handler.go` contributes `auth`);
/// paths under `cmd/` additionally contribute the fixed `cli` token.
/// The token with the strictly highest tally wins; ties go to the token
/// seen first.
pub fn dominant_scope(files: &[String]) -> Option<String> {
    let mut tallies: Vec<(String, usize)> = Vec::new();

    for file in files {
        for token in scope_candidates(file) {
            match tallies.iter_mut().find(|(t, _)| *t == token) {
                Some((_, count)) => *count += 1,
                None => tallies.push((token, 1)),
            }
        }
    }

    // Strictly-greater comparison keeps the earliest token on ties, since
    // tallies are in first-seen order.
    let mut best: Option<&String> = None;
    let mut best_count = 0;
    for (token, count) in &tallies {
        if *count > best_count {
            best = Some(token);
            best_count = *count;
        }
    }

    best.cloned()
}

/// Scope tokens a single path contributes.
fn scope_candidates(path: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    let dir_segments: Vec<&str> = match path.rsplit_once('/') {
        Some((dir, _)) => dir.split('/').collect(),
        None => Vec::new(),
    };

    for (i, segment) in dir_segments.iter().enumerate() {
        if SCOPE_MARKERS.contains(segment) {
            if let Some(next) = dir_segments.get(i + 1) {
                candidates.push((*next).to_string());
            }
            break;
        }
    }

    if path.starts_with("cmd/") {
        candidates.push(CLI_SCOPE.to_string());
    }

    candidates
}
