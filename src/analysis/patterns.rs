//! Compiled pattern sets for change classification.

use std::sync::OnceLock;

use regex_lite::Regex;

/// Path-based category of a changed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathCategory {
    Test,
    Docs,
    Build,
    Ci,
    DependencyManifest,
}

/// Keyword category searched for in diff text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordCategory {
    BugFix,
    Performance,
    Refactor,
}

/// All compiled patterns, grouped by the question they answer.
///
/// Path patterns classify file paths, keyword patterns scan the whole
/// diff text, and the structural patterns pick apart added lines.
pub struct PatternLibrary {
    test_files: Vec<Regex>,
    doc_files: Vec<Regex>,
    build_files: Vec<Regex>,
    ci_files: Vec<Regex>,
    dependency_manifests: Vec<Regex>,
    bug_keywords: Vec<Regex>,
    perf_keywords: Vec<Regex>,
    refactor_keywords: Vec<Regex>,
    structural_additions: Vec<(Regex, &'static str)>,
    code_additions: Vec<Regex>,
}

impl PatternLibrary {
    fn new() -> Self {
        Self {
            test_files: compile(&[r"(?i)_test\.go", r"(?i)\.test\.", r"(?i)spec\.", r"(?i)test/"]),
            doc_files: compile(&[r"(?i)readme", r"(?i)\.md$", r"(?i)docs/"]),
            build_files: compile(&[
                r"(?i)makefile",
                r"(?i)dockerfile",
                r"(?i)\.yml$",
                r"(?i)\.yaml$",
                r"(?i)go\.mod",
                r"(?i)go\.sum",
                r"(?i)package\.json",
            ]),
            ci_files: compile(&[
                r"(?i)\.github/",
                r"(?i)\.circleci/",
                r"(?i)\.travis",
                r"(?i)jenkins",
            ]),
            dependency_manifests: compile(&[r"go\.mod"]),
            bug_keywords: compile(&[
                r"(?i)fix\s*\(",
                r"(?i)bug\s*fix",
                r"(?i)error\s*handling",
                r"(?i)nil\s*pointer",
                r"(?i)panic",
                r"(?i)segfault",
                r"(?i)crash",
                r"(?i)exception",
            ]),
            perf_keywords: compile(&[
                r"(?i)performance",
                r"(?i)optimize",
                r"(?i)speed\s*up",
                r"(?i)reduce\s*memory",
                r"(?i)cache",
            ]),
            refactor_keywords: compile(&[
                r"(?i)refactor",
                r"(?i)rename",
                r"(?i)move\s*to",
                r"(?i)extract",
                r"(?i)simplify",
                r"(?i)clean\s*up",
            ]),
            structural_additions: vec![
                (Regex::new(r"^\+func\s+(\w+)").unwrap(), "function"),
                (Regex::new(r"^\+type\s+(\w+)").unwrap(), "type"),
            ],
            code_additions: compile(&[
                r"(?i)\+func",
                r"(?i)\+type",
                r"(?i)\+struct",
                r"(?i)\+interface",
            ]),
        }
    }

    /// Patterns matched against changed file paths.
    pub fn path_patterns(&self, category: PathCategory) -> &[Regex] {
        match category {
            PathCategory::Test => &self.test_files,
            PathCategory::Docs => &self.doc_files,
            PathCategory::Build => &self.build_files,
            PathCategory::Ci => &self.ci_files,
            PathCategory::DependencyManifest => &self.dependency_manifests,
        }
    }

    /// Patterns matched against the full diff text.
    pub fn keyword_patterns(&self, category: KeywordCategory) -> &[Regex] {
        match category {
            KeywordCategory::BugFix => &self.bug_keywords,
            KeywordCategory::Performance => &self.perf_keywords,
            KeywordCategory::Refactor => &self.refactor_keywords,
        }
    }

    /// Line-anchored declaration patterns, paired with the noun used in
    /// the generated phrase ("add Foo function").
    pub fn structural_additions(&self) -> &[(Regex, &'static str)] {
        &self.structural_additions
    }

    /// Coarse probes for any added function/type/struct/interface.
    pub fn code_additions(&self) -> &[Regex] {
        &self.code_additions
    }
}

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// Shared pattern library, compiled on first use.
pub fn library() -> &'static PatternLibrary {
    static LIBRARY: OnceLock<PatternLibrary> = OnceLock::new();
    LIBRARY.get_or_init(PatternLibrary::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_compiles() {
        let lib = library();
        assert!(!lib.path_patterns(PathCategory::Test).is_empty());
        assert!(!lib.keyword_patterns(KeywordCategory::BugFix).is_empty());
        assert_eq!(lib.structural_additions().len(), 2);
    }

    #[test]
    fn test_path_patterns_are_case_insensitive() {
        let lib = library();
        let build = lib.path_patterns(PathCategory::Build);
        assert!(build.iter().any(|re| re.is_match("Makefile")));
        assert!(build.iter().any(|re| re.is_match("makefile")));
        assert!(build.iter().any(|re| re.is_match("Dockerfile")));
    }

    #[test]
    fn test_test_file_patterns() {
        let lib = library();
        let test = lib.path_patterns(PathCategory::Test);
        for path in ["main_test.go", "app.test.js", "spec.rb", "test/helper.py"] {
            assert!(
                test.iter().any(|re| re.is_match(path)),
                "expected {path} to match a test pattern"
            );
        }
        assert!(!test.iter().any(|re| re.is_match("main.go")));
    }

    #[test]
    fn test_dependency_manifest_is_case_sensitive() {
        let lib = library();
        let deps = lib.path_patterns(PathCategory::DependencyManifest);
        assert!(deps.iter().any(|re| re.is_match("go.mod")));
        assert!(!deps.iter().any(|re| re.is_match("GO.MOD")));
    }

    #[test]
    fn test_structural_addition_captures_identifier() {
        let lib = library();
        let (func_pattern, noun) = &lib.structural_additions()[0];
        let caps = func_pattern.captures("+func NewServer(addr string)").unwrap();
        assert_eq!(&caps[1], "NewServer");
        assert_eq!(*noun, "function");
    }
}
