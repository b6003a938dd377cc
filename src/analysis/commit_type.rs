//! Conventional commit types.

use std::fmt;

/// Conventional commit types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
}

impl CommitType {
    /// The lowercase token used in titles.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Perf => "perf",
            Self::Test => "test",
            Self::Build => "build",
            Self::Ci => "ci",
            Self::Chore => "chore",
        }
    }

    /// Fallback description when the diff yields no structural additions.
    pub fn default_description(&self) -> &'static str {
        match self {
            Self::Feat => "add new functionality",
            Self::Fix => "resolve issues",
            Self::Docs => "update documentation",
            Self::Test => "add tests",
            Self::Build => "update build configuration",
            Self::Ci => "update CI configuration",
            Self::Refactor => "improve code structure",
            Self::Perf => "improve performance",
            Self::Style | Self::Chore => "update codebase",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "feat" => Ok(Self::Feat),
            "fix" => Ok(Self::Fix),
            "docs" => Ok(Self::Docs),
            "style" => Ok(Self::Style),
            "refactor" => Ok(Self::Refactor),
            "perf" => Ok(Self::Perf),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "ci" => Ok(Self::Ci),
            "chore" => Ok(Self::Chore),
            _ => Err(format!("Unknown commit type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_parse() {
        for commit_type in [
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
        ] {
            let parsed: CommitType = commit_type.as_str().parse().unwrap();
            assert_eq!(parsed, commit_type);
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("feature".parse::<CommitType>().is_err());
        assert!("".parse::<CommitType>().is_err());
    }

    #[test]
    fn test_default_descriptions() {
        assert_eq!(CommitType::Feat.default_description(), "add new functionality");
        assert_eq!(CommitType::Fix.default_description(), "resolve issues");
        assert_eq!(CommitType::Chore.default_description(), "update codebase");
        assert_eq!(CommitType::Style.default_description(), "update codebase");
    }
}
