use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use octocrab::models::AppId;
use secrecy::ExposeSecret;

use pull_updater::config::DEFAULT_CONFIG_PATH;
use pull_updater::utils::logging::init_logging;
use pull_updater::{
    create_app, create_github_client, load_config, GithubAppClient, PullRequestUpdater,
    ServerState, WebhookSecret,
};

#[derive(clap::Parser)]
struct Opts {
    /// Path to the YAML configuration file.
    #[arg(long, env = "PULL_UPDATER_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

async fn server(addr: String, state: ServerState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Cannot bind to {addr}"))?;
    tracing::info!("Starting server on {addr}...");

    axum::serve(listener, app).await?;
    Ok(())
}

fn try_main(opts: Opts) -> anyhow::Result<()> {
    let config = load_config(&opts.config)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    let addr = config.server.bind_address();
    let timeout = config.github.request_timeout();
    let credentials = config.github.app;
    let client = runtime.block_on(async {
        create_github_client(
            AppId(credentials.integration_id),
            &config.github.v3_api_url,
            credentials
                .private_key
                .expose_secret()
                .clone()
                .into_bytes()
                .into(),
            timeout,
        )
    })?;

    let updater = PullRequestUpdater::new(Arc::new(GithubAppClient::new(client)), config.app);
    let state = ServerState::new(updater, WebhookSecret::new(credentials.webhook_secret));

    let res = runtime.block_on(server(addr, state));
    tracing::warn!("Server has ended: {res:?}");
    res
}

fn main() {
    init_logging();

    let opts = Opts::parse();
    if let Err(error) = try_main(opts) {
        eprintln!("Error: {error:?}");
        std::process::exit(1);
    }
}
