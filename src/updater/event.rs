use octocrab::models::InstallationId;

use crate::github::GithubRepoName;

/// A push to some branch of a repository.
#[derive(Debug, PartialEq)]
pub struct PushEvent {
    pub repository: GithubRepoName,
    /// Full name of the pushed reference, e.g. `refs/heads/main`.
    pub git_ref: String,
    pub default_branch: String,
    pub installation: Option<InstallationId>,
}

// Only the fields that the updater needs are parsed, the rest of the payload is ignored.
#[derive(serde::Deserialize, Debug)]
struct PushEventPayload {
    #[serde(rename = "ref")]
    git_ref: String,
    repository: RepositoryPayload,
    installation: Option<InstallationPayload>,
}

#[derive(serde::Deserialize, Debug)]
struct RepositoryPayload {
    name: String,
    owner: OwnerPayload,
    default_branch: String,
}

#[derive(serde::Deserialize, Debug)]
struct OwnerPayload {
    login: String,
}

#[derive(serde::Deserialize, Debug)]
struct InstallationPayload {
    id: InstallationId,
}

impl PushEvent {
    pub fn parse(payload: &[u8]) -> Result<Self, serde_json::Error> {
        let payload: PushEventPayload = serde_json::from_slice(payload)?;
        Ok(Self {
            repository: GithubRepoName::new(
                &payload.repository.owner.login,
                &payload.repository.name,
            ),
            git_ref: payload.git_ref,
            default_branch: payload.repository.default_branch,
            installation: payload.installation.map(|installation| installation.id),
        })
    }

    pub fn default_branch_ref(&self) -> String {
        format!("refs/heads/{}", self.default_branch)
    }

    pub fn is_push_to_default_branch(&self) -> bool {
        self.git_ref == self.default_branch_ref()
    }
}
