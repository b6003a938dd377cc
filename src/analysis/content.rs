//! Content classification of raw diff text.

use super::patterns::{KeywordCategory, library};

/// Case-insensitive search for a keyword category anywhere in the diff.
///
/// Deliberately not restricted to added lines; removed and context lines
/// carry signal too.
pub fn contains_keyword(category: KeywordCategory, diff: &str) -> bool {
    library()
        .keyword_patterns(category)
        .iter()
        .any(|re| re.is_match(diff))
}

/// Maximum structural additions reported per change.
const MAX_STRUCTURAL_ADDITIONS: usize = 3;

/// Scan added lines for new function and type declarations.
///
/// Returns ready-to-use phrases ("add Foo function") in diff order,
/// capped at three.
pub fn structural_additions(diff: &str) -> Vec<String> {
    let mut additions = Vec::new();

    for line in diff.lines() {
        for (pattern, noun) in library().structural_additions() {
            if let Some(caps) = pattern.captures(line) {
                if let Some(ident) = caps.get(1) {
                    additions.push(format!("add {} {}", ident.as_str(), noun));
                }
                break;
            }
        }
        if additions.len() == MAX_STRUCTURAL_ADDITIONS {
            break;
        }
    }

    additions
}

/// Coarse probe: does the diff add any function, type, struct, or
/// interface at all. Used only as the final feat signal.
pub fn has_code_addition(diff: &str) -> bool {
    library().code_additions().iter().any(|re| re.is_match(diff))
}
