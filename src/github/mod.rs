//! Contains definitions of common types (pull request, repository name, commit comparison)
//! needed for working with GitHub repositories.
use std::fmt::{Debug, Display, Formatter};

pub mod api;
pub mod server;
mod webhook;

pub use api::operations::UpdateBranchError;
pub use api::GithubAppClient;
pub use webhook::{GitHubWebhook, WebhookEvent, WebhookSecret};

/// Unique identifier of a GitHub repository
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct GithubRepoName {
    owner: String,
    name: String,
}

impl GithubRepoName {
    pub fn new(owner: &str, name: &str) -> Self {
        Self {
            owner: owner.to_lowercase(),
            name: name.to_lowercase(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for GithubRepoName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{}/{}", self.owner, self.name))
    }
}

/// An open pull request, as returned by the pull request listing.
#[derive(Clone, Debug, PartialEq)]
pub struct PullRequest {
    pub number: PullRequestNumber,
    /// Name of the branch with the changes of the pull request.
    pub head_ref: String,
    /// Name of the branch that the pull request targets.
    pub base_ref: String,
    pub labels: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PullRequestNumber(pub u64);

impl From<u64> for PullRequestNumber {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for PullRequestNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        <u64 as Display>::fmt(&self.0, f)
    }
}

/// Relation between a base and a head commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CommitComparison {
    /// Number of commits in head that are missing from base.
    pub ahead_by: u64,
    /// Number of commits in base that are missing from head.
    pub behind_by: u64,
}

impl CommitComparison {
    pub fn is_behind(&self) -> bool {
        self.behind_by >= 1
    }
}
