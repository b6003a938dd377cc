//! prow - CLI entry point.

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::warn;

use prow::analysis::ChangeSet;
use prow::git::{
    current_branch, default_branch, diff_against_base, discover_repository, origin_url,
    push_branch,
};
use prow::github::{
    apply_template, build_client, create_or_update_pr, fetch_template, github_token,
    parse_github_remote,
};

/// Create a GitHub pull request with an auto-generated conventional commit title.
#[derive(Parser, Debug)]
#[command(name = "prow")]
#[command(about = "Create a GitHub pull request with an auto-generated conventional commit title")]
#[command(version)]
struct Cli {
    /// Custom PR title (overrides auto-generation)
    #[arg(short = 't', long)]
    title: Option<String>,

    /// Custom PR body (overrides auto-generation)
    #[arg(short = 'b', long)]
    body: Option<String>,

    /// Create the PR as a draft
    #[arg(short = 'd', long)]
    draft: bool,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Step 1: Discover the git repository from the working directory
    let repo = discover_repository(".")
        .context("Not a git repository. Run prow from within a git repository.")?;

    // Step 2: Resolve current and default branch
    let branch = current_branch(&repo)?;
    let base = default_branch(&repo)?;

    if branch == base {
        bail!("cannot create PR from default branch '{base}'");
    }

    if cli.verbose {
        println!("Current branch: {branch}");
        println!("Default branch: {base}");
    }

    // Step 3: Diff against the merge base with the default branch
    let diff =
        diff_against_base(&repo, &base).context("Failed to diff against default branch")?;

    if diff.is_empty() {
        bail!("no changes detected between {branch} and {base}");
    }

    // Step 4: Generate title and summary, honoring overrides
    let changes = ChangeSet::new(&diff.text, &diff.files);

    let title = match cli.title {
        Some(title) => title,
        None => {
            let title = changes.title();
            if cli.verbose {
                println!("Generated title: {title}");
            }
            title
        }
    };

    let body = match cli.body {
        Some(body) => body,
        None => {
            let body = changes.summary();
            if cli.verbose {
                println!("Generated body:\n{body}");
            }
            body
        }
    };

    // Step 5: Locate the GitHub repository behind origin
    let url = origin_url(&repo)?;
    let (owner, repo_name) = parse_github_remote(&url)
        .with_context(|| format!("Could not parse remote URL '{url}'"))?;

    if cli.verbose {
        println!("Repository: {owner}/{repo_name}");
    }

    // Step 6: Push the current branch to origin if needed
    if let Err(e) = push_branch(&repo, &branch) {
        warn!("push failed: {e}");
        if cli.verbose {
            println!("Note: {e}");
        }
    }

    // Step 7: Authenticate
    let token = github_token()?;
    let octocrab = build_client(&token)?;

    // Step 8: Apply the repository's PR template if it has one
    let body = match fetch_template(&octocrab, &owner, &repo_name).await {
        Some(template) => {
            if cli.verbose {
                println!("Found PR template, applying...");
            }
            apply_template(&template, &title, &body)
        }
        None => body,
    };

    // Step 9: Create or update the PR
    let published = create_or_update_pr(
        &octocrab, &owner, &repo_name, &title, &body, &branch, &base, cli.draft,
    )
    .await
    .context("Failed to create or update pull request")?;

    if published.updated {
        println!("Pull request updated: {}", published.pr.html_url);
    } else {
        println!("Pull request created: {}", published.pr.html_url);
    }

    Ok(())
}

/// Route diagnostics to stderr so they never mix with the PR URL on stdout.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .init();
}
