use serde::{Deserialize, Serialize};
use url::Url;

use super::user::{bot_user, User};

/// Request body of `POST /repos/{owner}/{repo}/issues/{number}/comments`.
#[derive(Deserialize)]
pub(crate) struct CommentCreatePayload {
    pub(crate) body: String,
}

// Copied from octocrab, since its version is #[non_exhaustive]
#[derive(Serialize)]
pub(crate) struct GitHubComment {
    id: u64,
    node_id: String,
    url: Url,
    html_url: Url,
    body: Option<String>,
    body_text: Option<String>,
    body_html: Option<String>,
    user: User,
    created_at: String,
}

impl GitHubComment {
    pub(crate) fn new(body: &str) -> Self {
        let url = Url::parse("https://foo.bar").unwrap();
        Self {
            id: 1,
            node_id: "1".to_string(),
            url: url.clone(),
            html_url: url,
            body: Some(body.to_string()),
            body_text: Some(body.to_string()),
            body_html: Some(body.to_string()),
            user: bot_user(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }
}
