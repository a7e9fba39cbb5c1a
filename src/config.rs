use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use secrecy::SecretString;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "config.yml";

/// Configuration of the bot, loaded from a YAML file when the process starts.
///
/// Unknown keys are rejected at every level, so that a typo in the file is reported
/// instead of being silently ignored.
#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub server: ServerConfig,
    pub github: GithubConfig,
    #[serde(default, rename = "app_configuration")]
    pub app: AppConfig,
}

#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    pub port: u16,
}

impl ServerConfig {
    /// Address in a form accepted by `TcpListener::bind`. The host part may be a host name.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

fn default_address() -> String {
    "0.0.0.0".to_string()
}

#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GithubConfig {
    #[serde(default = "default_api_url")]
    pub v3_api_url: Url,
    /// Connect and read timeout of every request sent to GitHub.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    pub app: GithubAppConfig,
}

impl GithubConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_request_timeout_secs() -> u64 {
    3
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com/").expect("Cannot parse default GitHub API URL")
}

/// Credentials of the GitHub App.
#[derive(serde::Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct GithubAppConfig {
    pub integration_id: u64,
    pub webhook_secret: SecretString,
    pub private_key: SecretString,
}

/// Options of the pull request updater itself.
#[derive(serde::Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Text placed before the message returned by GitHub when an update was scheduled.
    #[serde(default)]
    pub pull_request_preamble: String,
    /// Labels that a pull request must all carry to be updated. Empty means no filter.
    #[serde(default)]
    pub pull_request_labels: Vec<String>,
}

pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed reading server config file {}", path.display()))?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> anyhow::Result<Config> {
    serde_yaml::from_str(content).context("Failed parsing configuration file")
}
