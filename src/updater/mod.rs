//! Keeps open pull requests up to date with the default branch of their repository.
//!
//! After each push to the default branch, every open pull request that carries the
//! configured labels and whose head is behind its base gets its branch updated by GitHub.
use std::sync::Arc;

use axum::async_trait;
use octocrab::models::InstallationId;
use tracing::Instrument;

use crate::config::AppConfig;
use crate::github::{
    CommitComparison, GithubRepoName, PullRequest, PullRequestNumber, UpdateBranchError,
};

mod comment;
mod error;
pub mod event;
mod labels;

pub use comment::{update_failed_comment, update_scheduled_comment, Comment};
pub use error::UpdaterError;
pub use event::PushEvent;
pub use labels::has_all_labels;

/// Provides functionality for working with a remote repository.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    fn repository(&self) -> &GithubRepoName;

    /// Return open pull requests of the repository, in the order returned by GitHub.
    async fn get_open_pull_requests(&self) -> anyhow::Result<Vec<PullRequest>>;

    /// Compare `head` against `base`.
    async fn compare_commits(&self, base: &str, head: &str) -> anyhow::Result<CommitComparison>;

    /// Merge the base branch of the pull request into its head branch.
    async fn update_branch(&self, pr: PullRequestNumber) -> Result<(), UpdateBranchError>;

    /// Post a comment to the pull request with the given number.
    async fn post_comment(&self, pr: PullRequestNumber, comment: Comment) -> anyhow::Result<()>;
}

/// Creates clients authenticated as a single installation of the GitHub App.
#[async_trait]
pub trait InstallationClientProvider: Send + Sync {
    async fn repository_client(
        &self,
        installation: InstallationId,
        repository: GithubRepoName,
    ) -> anyhow::Result<Box<dyn RepositoryClient>>;
}

/// Handles push events by updating stale pull requests.
pub struct PullRequestUpdater {
    clients: Arc<dyn InstallationClientProvider>,
    config: AppConfig,
}

impl PullRequestUpdater {
    pub fn new(clients: Arc<dyn InstallationClientProvider>, config: AppConfig) -> Self {
        Self { clients, config }
    }

    /// Handles a single push webhook delivery with the given raw `payload`.
    pub async fn handle_push_event(
        &self,
        delivery_id: &str,
        payload: &[u8],
    ) -> Result<(), UpdaterError> {
        let event = PushEvent::parse(payload).map_err(UpdaterError::Decode)?;
        let span = tracing::info_span!(
            "Push",
            delivery = delivery_id,
            repo = event.repository.to_string()
        );
        self.process_push(event).instrument(span).await
    }

    async fn process_push(&self, event: PushEvent) -> Result<(), UpdaterError> {
        let Some(installation) = event.installation else {
            return Err(UpdaterError::MissingInstallation(event.repository));
        };

        if !event.is_push_to_default_branch() {
            tracing::debug!(
                "Ignoring push to {}, default branch is {}",
                event.git_ref,
                event.default_branch
            );
            return Ok(());
        }

        let client = self
            .clients
            .repository_client(installation, event.repository.clone())
            .await
            .map_err(|error| UpdaterError::Auth(installation, error))?;

        update_stale_pull_requests(client.as_ref(), &self.config, &event.default_branch).await
    }
}

/// Updates every open pull request that has the configured labels and is behind its base.
///
/// Pull requests are processed one by one. A branch update scheduled by GitHub is reported
/// with a comment and processing continues, any other update failure is reported with a
/// comment and stops the processing.
pub async fn update_stale_pull_requests(
    client: &dyn RepositoryClient,
    config: &AppConfig,
    default_branch: &str,
) -> Result<(), UpdaterError> {
    let repo = client.repository();
    tracing::info!("Getting all open pull requests for {repo}");
    let prs = client
        .get_open_pull_requests()
        .await
        .map_err(UpdaterError::ListPullRequests)?;
    tracing::info!("Found {} open pull request(s)", prs.len());

    for pr in prs {
        if !has_all_labels(&config.pull_request_labels, &pr.labels) {
            tracing::info!(
                "Pull request {repo}#{} does not have the required labels",
                pr.number
            );
            continue;
        }

        let comparison = client
            .compare_commits(&pr.base_ref, &pr.head_ref)
            .await
            .map_err(|error| UpdaterError::Compare(pr.number, error))?;

        if !comparison.is_behind() {
            tracing::info!(
                "Pull request {repo}#{} on branch {} is up to date with {}",
                pr.number,
                pr.head_ref,
                pr.base_ref
            );
            continue;
        }

        tracing::info!(
            "Pull request {repo}#{} is behind {} by {} commit(s) (default branch {default_branch})",
            pr.number,
            pr.base_ref,
            comparison.behind_by
        );

        match client.update_branch(pr.number).await {
            Ok(()) => {
                tracing::info!("Updated pull request {repo}#{}", pr.number);
            }
            Err(UpdateBranchError::Scheduled { message }) => {
                tracing::info!(
                    "Update of pull request {repo}#{} was scheduled: {message}",
                    pr.number
                );
                client
                    .post_comment(
                        pr.number,
                        update_scheduled_comment(&config.pull_request_preamble, &message),
                    )
                    .await
                    .map_err(|error| UpdaterError::Comment(pr.number, error))?;
            }
            Err(error) => {
                tracing::warn!(
                    "Failed to update pull request {repo}#{}: {error:?}",
                    pr.number
                );
                client
                    .post_comment(pr.number, update_failed_comment(&error))
                    .await
                    .map_err(|error| UpdaterError::Comment(pr.number, error))?;
                return Err(UpdaterError::Update(pr.number, error));
            }
        }
    }
    Ok(())
}
