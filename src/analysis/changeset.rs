//! Title and summary composition for one branch's changes.

use super::commit_type::CommitType;
use super::content;
use super::files;
use super::patterns::PathCategory;
use super::resolver::resolve_commit_type;

/// One branch's worth of changes: the unified diff against the merge
/// base and the paths it touches, in diff order.
///
/// Analysis is pure and total: the same input always yields the same
/// title and summary, and empty input degrades to default phrases
/// instead of failing.
#[derive(Debug, Clone, Copy)]
pub struct ChangeSet<'a> {
    diff: &'a str,
    files: &'a [String],
}

impl<'a> ChangeSet<'a> {
    pub fn new(diff: &'a str, files: &'a [String]) -> Self {
        Self { diff, files }
    }

    /// The resolved commit type for this change.
    pub fn commit_type(&self) -> CommitType {
        resolve_commit_type(self.diff, self.files)
    }

    /// The dominant scope, when the changed paths reveal one.
    pub fn scope(&self) -> Option<String> {
        files::dominant_scope(self.files)
    }

    /// Conventional commit title: `type(scope): description`, scope
    /// omitted when none was detected.
    pub fn title(&self) -> String {
        let commit_type = self.commit_type();
        let description = self.description(commit_type);

        match self.scope() {
            Some(scope) => format!("{}({}): {}", commit_type, scope, description),
            None => format!("{}: {}", commit_type, description),
        }
    }

    /// Markdown body: a `## Summary` bullet list, then the changed files
    /// as inline code under `## Changed Files`.
    pub fn summary(&self) -> String {
        let mut summary = String::from("## Summary\n\n");

        for line in self.summary_lines() {
            summary.push_str(&format!("- {}\n", line));
        }

        if !self.files.is_empty() {
            summary.push_str("\n## Changed Files\n\n");
            for file in self.files {
                summary.push_str(&format!("- `{}`\n", file));
            }
        }

        summary
    }

    /// One-line description: the first structural addition when there is
    /// one, else the type's default phrase.
    fn description(&self, commit_type: CommitType) -> String {
        content::structural_additions(self.diff)
            .into_iter()
            .next()
            .unwrap_or_else(|| commit_type.default_description().to_string())
    }

    fn summary_lines(&self) -> Vec<String> {
        let mut lines = content::structural_additions(self.diff);

        if files::matches_any(PathCategory::DependencyManifest, self.files) {
            lines.push("Update dependencies".to_string());
        }
        if files::any_path_mentions_tests(self.files) {
            lines.push("Add or update tests".to_string());
        }
        if lines.is_empty() {
            lines.push("Various improvements and updates".to_string());
        }

        lines
    }
}
