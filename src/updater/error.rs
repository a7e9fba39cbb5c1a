use octocrab::models::InstallationId;
use thiserror::Error;

use crate::github::{GithubRepoName, PullRequestNumber, UpdateBranchError};

/// Reasons why handling of a push event has failed.
///
/// A branch update scheduled asynchronously by GitHub is not an error of the handler,
/// it is reported on the pull request and processing continues.
#[derive(Error, Debug)]
pub enum UpdaterError {
    #[error("Failed to parse push event payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("Push event of {0} does not contain an installation")]
    MissingInstallation(GithubRepoName),
    #[error("Cannot authenticate as installation {0}: {1:#}")]
    Auth(InstallationId, anyhow::Error),
    #[error("Cannot list open pull requests: {0:#}")]
    ListPullRequests(anyhow::Error),
    #[error("Cannot compare branches of pull request #{0}: {1:#}")]
    Compare(PullRequestNumber, anyhow::Error),
    #[error("Failed to update pull request #{0}: {1}")]
    Update(PullRequestNumber, #[source] UpdateBranchError),
    #[error("Cannot comment on pull request #{0}: {1:#}")]
    Comment(PullRequestNumber, anyhow::Error),
}

impl UpdaterError {
    /// Was the failure caused by the content of the delivery rather than by GitHub?
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            UpdaterError::Decode(_) | UpdaterError::MissingInstallation(_)
        )
    }
}
