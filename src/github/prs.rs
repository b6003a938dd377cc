//! Pull request lookup, creation, and update via octocrab.

use octocrab::Octocrab;
use tracing::debug;

use crate::error::GitHubError;

/// A pull request as returned by the GitHub API.
#[derive(Debug, Clone)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub html_url: String,
}

/// Outcome of publishing a branch: the PR and whether it already existed.
#[derive(Debug, Clone)]
pub struct PublishedPr {
    pub pr: PullRequest,
    pub updated: bool,
}

/// Build an octocrab client authenticated with a personal token.
pub fn build_client(token: &str) -> Result<Octocrab, GitHubError> {
    Octocrab::builder()
        .personal_token(token.to_string())
        .build()
        .map_err(|e| GitHubError::ClientBuild(Box::new(e)))
}

/// Find the open PR whose head is `branch`, if one exists.
pub async fn find_open_pr(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    branch: &str,
) -> Result<Option<PullRequest>, GitHubError> {
    let page = octocrab
        .pulls(owner, repo)
        .list()
        .state(octocrab::params::State::Open)
        .head(format!("{owner}:{branch}"))
        .per_page(100)
        .send()
        .await
        .map_err(|e| classify_api_error(e, owner, repo))?;

    Ok(page.items.into_iter().next().map(to_pull_request))
}

/// Open a new PR from `head` into `base`.
#[allow(clippy::too_many_arguments)]
pub async fn create_pr(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    title: &str,
    body: &str,
    head: &str,
    base: &str,
    draft: bool,
) -> Result<PullRequest, GitHubError> {
    let pr = octocrab
        .pulls(owner, repo)
        .create(title, head, base)
        .body(body)
        .draft(draft)
        .send()
        .await
        .map_err(|e| classify_api_error(e, owner, repo))?;

    Ok(to_pull_request(pr))
}

/// Replace the title and body of an existing PR.
pub async fn update_pr(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    title: &str,
    body: &str,
) -> Result<PullRequest, GitHubError> {
    let pr = octocrab
        .pulls(owner, repo)
        .update(number)
        .title(title)
        .body(body)
        .send()
        .await
        .map_err(|e| classify_api_error(e, owner, repo))?;

    Ok(to_pull_request(pr))
}

/// Create a PR for `branch`, or update the open one if it exists.
///
/// Re-running on the same branch refreshes the existing PR's title and
/// body instead of failing with a duplicate.
#[allow(clippy::too_many_arguments)]
pub async fn create_or_update_pr(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    title: &str,
    body: &str,
    branch: &str,
    base: &str,
    draft: bool,
) -> Result<PublishedPr, GitHubError> {
    if let Some(existing) = find_open_pr(octocrab, owner, repo, branch).await? {
        debug!("found open PR #{} for {branch}, updating", existing.number);
        let pr = update_pr(octocrab, owner, repo, existing.number, title, body).await?;
        return Ok(PublishedPr { pr, updated: true });
    }

    debug!("no open PR for {branch}, creating one");
    let pr = create_pr(octocrab, owner, repo, title, body, branch, base, draft).await?;
    Ok(PublishedPr { pr, updated: false })
}

fn to_pull_request(pr: octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title.unwrap_or_default(),
        html_url: pr.html_url.map(|url| url.to_string()).unwrap_or_default(),
    }
}

/// Map an octocrab error onto the cases callers can act on.
///
/// Checks error content using both Display and Debug output to handle
/// different octocrab error formats.
fn classify_api_error(e: octocrab::Error, owner: &str, repo: &str) -> GitHubError {
    let err_display = e.to_string();
    let err_debug = format!("{:?}", e);

    // GitHub returns 403 with a rate limit message
    if err_display.to_lowercase().contains("rate limit")
        || err_debug.to_lowercase().contains("rate limit")
    {
        return GitHubError::RateLimited {
            reset_time: "unknown".to_string(),
        };
    }

    // GitHub returns 404 for missing or inaccessible repositories
    if err_display.contains("Not Found") || err_debug.contains("Not Found") {
        return GitHubError::RepositoryNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        };
    }

    GitHubError::Api(Box::new(e))
}

/// Extract owner and repo from a git remote URL.
pub fn parse_github_remote(url: &str) -> Result<(String, String), GitHubError> {
    // SSH format: git@github.com:owner/repo.git
    if let Some(path) = url.strip_prefix("git@github.com:") {
        return parse_owner_repo_path(path);
    }

    // HTTP(S) format: the first path segment is the host, the rest is owner/repo
    if let Some(rest) = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
    {
        let path = rest
            .split_once('/')
            .map(|(_host, path)| path)
            .ok_or(GitHubError::InvalidRepositoryUrl)?;
        return parse_owner_repo_path(path);
    }

    Err(GitHubError::InvalidRepositoryUrl)
}

fn parse_owner_repo_path(path: &str) -> Result<(String, String), GitHubError> {
    let path = path.strip_suffix(".git").unwrap_or(path);

    match path.split('/').collect::<Vec<_>>().as_slice() {
        [owner, repo] if !owner.is_empty() && !repo.is_empty() => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GitHubError::InvalidRepositoryUrl),
    }
}
