use serde::Serialize;
use url::Url;

use super::mock_repo_name;
use super::user::{default_user, User};

// Copied from octocrab, since its version is #[non_exhaustive]
#[derive(Serialize)]
pub(crate) struct GitHubPullRequest {
    url: String,
    id: u64,
    title: String,
    body: String,

    /// The pull request number.  Note that GitHub's REST API
    /// considers every pull-request an issue with the same number.
    number: u64,

    user: User,
    labels: Vec<GitHubLabel>,
    head: Box<Branch>,
    base: Box<Branch>,
}

impl GitHubPullRequest {
    pub(crate) fn new(number: u64, head: &str, base: &str, labels: &[&str]) -> Self {
        GitHubPullRequest {
            url: format!("https://github.com/{}/pull/{number}", mock_repo_name()),
            id: number,
            title: format!("PR #{number}"),
            body: "test".to_string(),
            number,
            user: default_user(),
            labels: labels
                .iter()
                .enumerate()
                .map(|(index, name)| GitHubLabel::new(index as u64 + 1, name))
                .collect(),
            head: Box::new(Branch {
                label: format!("{}:{head}", default_user().login),
                ref_field: head.to_string(),
                sha: format!("{head}-sha"),
            }),
            base: Box::new(Branch {
                label: format!("{}:{base}", mock_repo_name().owner()),
                ref_field: base.to_string(),
                sha: format!("{base}-sha"),
            }),
        }
    }
}

#[derive(Serialize)]
struct Branch {
    label: String,
    #[serde(rename = "ref")]
    ref_field: String,
    sha: String,
}

#[derive(Serialize)]
struct GitHubLabel {
    id: u64,
    node_id: String,
    url: Url,
    name: String,
    description: Option<String>,
    color: String,
    default: bool,
}

impl GitHubLabel {
    fn new(id: u64, name: &str) -> Self {
        GitHubLabel {
            id,
            node_id: format!("label-{id}"),
            url: format!("https://api.github.com/repos/{}/labels/{id}", mock_repo_name())
                .parse()
                .unwrap(),
            name: name.to_string(),
            description: None,
            color: "ededed".to_string(),
            default: false,
        }
    }
}
