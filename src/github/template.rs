//! PR template discovery and substitution.
//!
//! Templates are fetched from the repository via the contents API, so
//! they apply even when the local checkout predates the template.

use octocrab::Octocrab;
use tracing::debug;

/// Well-known template locations, checked in order.
const TEMPLATE_PATHS: [&str; 7] = [
    ".github/pull_request_template.md",
    ".github/PULL_REQUEST_TEMPLATE.md",
    "pull_request_template.md",
    "PULL_REQUEST_TEMPLATE.md",
    ".github/PULL_REQUEST_TEMPLATE/pull_request_template.md",
    "docs/pull_request_template.md",
    "docs/PULL_REQUEST_TEMPLATE.md",
];

/// Directory that may hold several named templates.
const TEMPLATE_DIR: &str = ".github/PULL_REQUEST_TEMPLATE";

/// Headings whose section body receives the generated summary.
const SECTION_HEADINGS: [&str; 8] = [
    "## Summary",
    "## Description",
    "## What",
    "## Changes",
    "### Summary",
    "### Description",
    "### What",
    "### Changes",
];

/// Markers that end a section body.
const SECTION_TERMINATORS: [&str; 3] = ["##", "###", "---"];

/// Fetch the repository's PR template, if it has one.
///
/// A missing template is not an error; any fetch failure is treated as
/// "no template" so PR creation still goes through.
pub async fn fetch_template(octocrab: &Octocrab, owner: &str, repo: &str) -> Option<String> {
    for path in TEMPLATE_PATHS {
        if let Some(content) = fetch_file(octocrab, owner, repo, path).await {
            debug!("found PR template at {path}");
            return Some(content);
        }
    }

    // A PULL_REQUEST_TEMPLATE directory may hold several templates;
    // take the first entry.
    let listing = octocrab
        .repos(owner, repo)
        .get_content()
        .path(TEMPLATE_DIR)
        .send()
        .await
        .ok()?;
    let first = listing.items.into_iter().next()?;

    let content = fetch_file(octocrab, owner, repo, &first.path).await?;
    debug!("found PR template at {}", first.path);
    Some(content)
}

/// Fetch and decode one file via the contents API.
async fn fetch_file(octocrab: &Octocrab, owner: &str, repo: &str, path: &str) -> Option<String> {
    let contents = octocrab
        .repos(owner, repo)
        .get_content()
        .path(path)
        .send()
        .await
        .ok()?;

    contents
        .items
        .into_iter()
        .next()
        .and_then(|item| item.decoded_content())
}

/// Fill a PR template with the generated title and summary.
///
/// Replaces placeholder tokens first, then writes the summary into the
/// first recognized section heading, replacing that section's body.
pub fn apply_template(template: &str, title: &str, summary: &str) -> String {
    if template.is_empty() {
        return summary.to_string();
    }

    let mut result = template.to_string();

    for placeholder in ["{{title}}", "{{TITLE}}", "[Title]", "[TITLE]"] {
        result = result.replace(placeholder, title);
    }

    for placeholder in [
        "{{description}}",
        "{{DESCRIPTION}}",
        "{{summary}}",
        "{{SUMMARY}}",
        "[Description]",
        "[DESCRIPTION]",
        "[Summary]",
        "[SUMMARY]",
    ] {
        result = result.replace(placeholder, summary);
    }

    fill_first_section(&result, summary)
}

/// Replace the body of the first matching section with the summary.
///
/// Headings are tried in priority order, not document order. The body
/// runs until the next heading or horizontal rule, or end of text.
fn fill_first_section(text: &str, summary: &str) -> String {
    for heading in SECTION_HEADINGS {
        let Some(idx) = text.find(heading) else {
            continue;
        };
        let body_start = idx + heading.len();

        let mut end = text.len();
        for terminator in SECTION_TERMINATORS {
            if let Some(next) = text[body_start..].find(terminator) {
                end = body_start + next;
                break;
            }
        }

        let mut filled = String::with_capacity(text.len() + summary.len());
        filled.push_str(&text[..body_start]);
        filled.push_str("\n\n");
        filled.push_str(summary);
        filled.push('\n');
        filled.push_str(&text[end..]);
        return filled;
    }

    text.to_string()
}
