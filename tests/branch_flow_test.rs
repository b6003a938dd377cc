//! Integration tests for the branch-to-title pipeline: real repositories,
//! real diffs, generated titles and summaries.

mod common;

use common::TestRepo;
use prow::analysis::{ChangeSet, CommitType};
use prow::git::{current_branch, default_branch, diff_against_base, discover_repository};

#[test]
fn test_new_function_on_feature_branch_yields_feat_title() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("main.go", "package main\n", "init");
    test_repo.checkout_new_branch("add-greeting");
    test_repo.commit_file(
        "main.go",
        "package main\n\nfunc Greet(name string) string {\n\treturn \"hello \" + name\n}\n",
        "add greet",
    );

    let diff = diff_against_base(&test_repo.repo, "main").unwrap();
    assert_eq!(diff.files, vec!["main.go".to_string()]);

    let changes = ChangeSet::new(&diff.text, &diff.files);
    assert_eq!(changes.commit_type(), CommitType::Feat);
    assert_eq!(changes.title(), "feat: add Greet function");
}

#[test]
fn test_scoped_title_from_real_diff() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("main.go", "package main\n", "init");
    test_repo.checkout_new_branch("auth-handlers");
    test_repo.commit_file(
        "internal/auth/handler.go",
        "package auth\n\nfunc NewHandler() *Handler {\n\treturn &Handler{}\n}\n",
        "add handler",
    );
    test_repo.commit_file(
        "internal/auth/middleware.go",
        "package auth\n\nfunc Wrap(h Handler) Handler {\n\treturn h\n}\n",
        "add middleware",
    );

    let diff = diff_against_base(&test_repo.repo, "main").unwrap();
    let changes = ChangeSet::new(&diff.text, &diff.files);

    assert_eq!(changes.scope().as_deref(), Some("auth"));
    assert_eq!(changes.title(), "feat(auth): add NewHandler function");
}

#[test]
fn test_fix_title_from_panic_handling_diff() {
    let test_repo = TestRepo::new();
    test_repo.commit_file(
        "server.go",
        "package server\n\nfunc run() {\n\tstart()\n}\n",
        "init",
    );
    test_repo.checkout_new_branch("harden-run");
    test_repo.commit_file(
        "server.go",
        "package server\n\nfunc run() {\n\tdefer recoverFromPanic()\n\tstart()\n}\n",
        "recover from panic",
    );

    let diff = diff_against_base(&test_repo.repo, "main").unwrap();
    let changes = ChangeSet::new(&diff.text, &diff.files);

    assert_eq!(changes.commit_type(), CommitType::Fix);
    assert!(changes.title().starts_with("fix"));
}

#[test]
fn test_summary_reflects_changed_files_from_diff() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("a.txt", "a\n", "init");
    test_repo.checkout_new_branch("docs");
    test_repo.commit_file("README.md", "# Project\n", "add readme");
    test_repo.commit_file("docs/usage.md", "Usage notes\n", "add usage");

    let diff = diff_against_base(&test_repo.repo, "main").unwrap();
    let changes = ChangeSet::new(&diff.text, &diff.files);

    assert_eq!(changes.commit_type(), CommitType::Docs);
    let summary = changes.summary();
    assert!(summary.contains("- `README.md`"));
    assert!(summary.contains("- `docs/usage.md`"));
}

#[test]
fn test_default_branch_follows_origin_head() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("main.go", "package main\n", "init");
    test_repo.set_origin_default("main");
    test_repo.checkout_new_branch("feature");

    assert_eq!(default_branch(&test_repo.repo).unwrap(), "main");
    assert_eq!(current_branch(&test_repo.repo).unwrap(), "feature");
}

#[test]
fn test_branch_without_new_commits_has_empty_diff() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("main.go", "package main\n", "init");
    test_repo.checkout_new_branch("feature");

    let diff = diff_against_base(&test_repo.repo, "main").unwrap();
    assert!(diff.is_empty());
}

#[test]
fn test_repository_discovered_from_subdirectory() {
    let test_repo = TestRepo::new();
    test_repo.commit_file("src/lib.go", "package lib\n", "init");

    // Invoking from a subdirectory of the work tree must still find the
    // repository and resolve its branches.
    let repo = discover_repository(test_repo.dir.path().join("src")).unwrap();
    assert_eq!(current_branch(&repo).unwrap(), "main");
}
