use std::time::Duration;

use anyhow::Context;
use axum::async_trait;
use octocrab::models::{AppId, InstallationId};
use octocrab::Octocrab;
use secrecy::{ExposeSecret, SecretVec};
use url::Url;

use client::GithubRepositoryClient;

use crate::github::GithubRepoName;
use crate::updater::{InstallationClientProvider, RepositoryClient};

pub mod client;
pub(crate) mod operations;

fn user_agent() -> String {
    format!("pull-updater/{}", env!("CARGO_PKG_VERSION"))
}

/// Creates a client authenticated as the GitHub App with the given ID.
///
/// `timeout` bounds both connecting to GitHub and waiting for a response. Installation
/// clients derived from this client share it.
pub fn create_github_client(
    app_id: AppId,
    github_url: &Url,
    private_key: SecretVec<u8>,
    timeout: Duration,
) -> anyhow::Result<Octocrab> {
    let key = jsonwebtoken::EncodingKey::from_rsa_pem(private_key.expose_secret().as_ref())
        .context("Could not encode private key")?;

    Octocrab::builder()
        .base_uri(github_url.as_str())?
        .add_header(http::header::USER_AGENT, user_agent())
        .set_connect_timeout(Some(timeout))
        .set_read_timeout(Some(timeout))
        .app(app_id, key)
        .build()
        .context("Could not create octocrab builder")
}

/// Creates installation scoped clients for the GitHub App.
pub struct GithubAppClient {
    client: Octocrab,
}

impl GithubAppClient {
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }
}

#[async_trait]
impl InstallationClientProvider for GithubAppClient {
    async fn repository_client(
        &self,
        installation: InstallationId,
        repository: GithubRepoName,
    ) -> anyhow::Result<Box<dyn RepositoryClient>> {
        // Exchange the token eagerly, so that authentication failures are reported here
        // and not by the first API call.
        let (client, _token) = self
            .client
            .installation_and_token(installation)
            .await
            .with_context(|| {
                format!("Cannot obtain access token for installation {installation}")
            })?;
        tracing::debug!("Authenticated as installation {installation} for {repository}");
        Ok(Box::new(GithubRepositoryClient::new(client, repository)))
    }
}
