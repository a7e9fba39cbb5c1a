use anyhow::Context;
use axum::async_trait;
use octocrab::params::State;
use octocrab::Octocrab;

use crate::github::api::operations::{update_branch, UpdateBranchError};
use crate::github::{CommitComparison, GithubRepoName, PullRequest, PullRequestNumber};
use crate::updater::{Comment, RepositoryClient};

/// Provides access to a single repository of an app installation using the GitHub API.
pub struct GithubRepositoryClient {
    /// The client is authenticated with an installation access token.
    client: Octocrab,
    repo_name: GithubRepoName,
}

impl GithubRepositoryClient {
    pub fn new(client: Octocrab, repo_name: GithubRepoName) -> Self {
        Self { client, repo_name }
    }

    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    pub fn name(&self) -> &GithubRepoName {
        &self.repo_name
    }

    fn format_pr(&self, pr: PullRequestNumber) -> String {
        format!("{}#{}", self.name(), pr)
    }
}

#[async_trait]
impl RepositoryClient for GithubRepositoryClient {
    fn repository(&self) -> &GithubRepoName {
        self.name()
    }

    /// Only the first page of the listing is returned.
    async fn get_open_pull_requests(&self) -> anyhow::Result<Vec<PullRequest>> {
        let page = self
            .client
            .pulls(self.repo_name.owner(), self.repo_name.name())
            .list()
            .state(State::Open)
            .send()
            .await
            .with_context(|| format!("Cannot list open pull requests of {}", self.repo_name))?;
        Ok(page.items.into_iter().map(github_pr_to_pr).collect())
    }

    async fn compare_commits(&self, base: &str, head: &str) -> anyhow::Result<CommitComparison> {
        // https://docs.github.com/en/rest/commits/commits?apiVersion=2022-11-28#compare-two-commits
        // Branch names may contain characters such as `#` or `%`, so both are encoded.
        let url = format!(
            "/repos/{}/compare/{}...{}",
            self.repo_name,
            urlencoding::encode(base),
            urlencoding::encode(head)
        );
        let comparison: CommitComparison = self
            .client
            .get(url, None::<&()>)
            .await
            .with_context(|| {
                format!("Cannot compare {base}...{head} in {}", self.repo_name)
            })?;
        Ok(comparison)
    }

    async fn update_branch(&self, pr: PullRequestNumber) -> Result<(), UpdateBranchError> {
        update_branch(self, pr).await
    }

    /// The comment will be posted as the Github App user of the bot.
    async fn post_comment(&self, pr: PullRequestNumber, comment: Comment) -> anyhow::Result<()> {
        self.client
            .issues(self.repo_name.owner(), self.repo_name.name())
            .create_comment(pr.0, comment.render())
            .await
            .with_context(|| format!("Cannot post comment to {}", self.format_pr(pr)))?;
        Ok(())
    }
}

fn github_pr_to_pr(pr: octocrab::models::pulls::PullRequest) -> PullRequest {
    PullRequest {
        number: pr.number.into(),
        head_ref: pr.head.ref_field,
        base_ref: pr.base.ref_field,
        labels: pr
            .labels
            .unwrap_or_default()
            .into_iter()
            .map(|label| label.name)
            .collect(),
    }
}
