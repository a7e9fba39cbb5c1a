//! This is the library of the pull request updater bot.
//!
//! The bot is a GitHub App that listens for pushes to the default branch of a repository
//! and asks GitHub to update every open pull request that has fallen behind it.
pub mod config;
pub mod github;
pub mod updater;
pub mod utils;

pub use config::{load_config, Config};
pub use github::api::create_github_client;
pub use github::server::{create_app, ServerState};
pub use github::{GithubAppClient, WebhookSecret};
pub use updater::PullRequestUpdater;
