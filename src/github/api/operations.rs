use http::StatusCode;
use thiserror::Error;

use crate::github::api::client::GithubRepositoryClient;
use crate::github::PullRequestNumber;

/// Text of [`UpdateBranchError::Scheduled`].
pub const UPDATE_SCHEDULED_MESSAGE: &str = "job scheduled on GitHub side; try again later";

#[derive(Error, Debug)]
pub enum UpdateBranchError {
    /// GitHub accepted the request and will perform the merge asynchronously.
    /// `message` is the text returned by GitHub in the response body.
    #[error("{}", UPDATE_SCHEDULED_MESSAGE)]
    Scheduled { message: String },
    /// GitHub refused to update the branch, e.g. because of a merge conflict.
    #[error("Branch update rejected: {message}")]
    Unprocessable { message: String },
    #[error("Unknown error ({status}): {text}")]
    Unknown { status: StatusCode, text: String },
    #[error("Network error: {0}")]
    NetworkError(#[from] octocrab::Error),
}

#[derive(serde::Deserialize)]
struct MessageResponse {
    message: String,
}

/// Merges the current base branch of the pull request into its head branch.
///
/// Documentation: https://docs.github.com/en/rest/pulls/pulls?apiVersion=2022-11-28#update-a-pull-request-branch
pub async fn update_branch(
    repo: &GithubRepositoryClient,
    pr: PullRequestNumber,
) -> Result<(), UpdateBranchError> {
    let client = repo.client();
    let url = format!("/repos/{}/pulls/{pr}/update-branch", repo.name());

    let response = client
        ._put(url, Some(&serde_json::json!({})))
        .await
        .map_err(|error| {
            tracing::debug!("Updating branch of {}#{pr} failed: {error:?}", repo.name());
            UpdateBranchError::NetworkError(error)
        })?;

    let status = response.status();
    let text = client.body_to_string(response).await.unwrap_or_default();

    tracing::trace!(
        "Response from updating branch of {}#{pr}: {status} ({text})",
        repo.name()
    );

    let message = || {
        serde_json::from_str::<MessageResponse>(&text)
            .map(|response| response.message)
            .unwrap_or_else(|_| text.clone())
    };

    match status {
        StatusCode::OK => Ok(()),
        StatusCode::ACCEPTED => Err(UpdateBranchError::Scheduled { message: message() }),
        StatusCode::UNPROCESSABLE_ENTITY => {
            Err(UpdateBranchError::Unprocessable { message: message() })
        }
        _ => Err(UpdateBranchError::Unknown { status, text }),
    }
}
