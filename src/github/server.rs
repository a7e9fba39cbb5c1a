use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;

use crate::github::webhook::{GitHubWebhook, WebhookEvent, WebhookSecret};
use crate::updater::PullRequestUpdater;
use crate::utils::logging::LogError;

/// Shared server state for all axum handlers.
pub struct ServerState {
    updater: PullRequestUpdater,
    webhook_secret: WebhookSecret,
}

impl ServerState {
    pub fn new(updater: PullRequestUpdater, webhook_secret: WebhookSecret) -> Self {
        Self {
            updater,
            webhook_secret,
        }
    }

    pub fn get_webhook_secret(&self) -> &WebhookSecret {
        &self.webhook_secret
    }
}

pub type ServerStateRef = Arc<ServerState>;

pub fn create_app(state: ServerState) -> Router {
    Router::new()
        .route("/github", post(github_webhook_handler))
        .route("/health", get(health_handler))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(Arc::new(state))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "")
}

/// Axum handler that receives a webhook and handles it before responding, so that
/// a failure of the handler is visible in the delivery log of the GitHub App.
pub async fn github_webhook_handler(
    State(state): State<ServerStateRef>,
    GitHubWebhook(event): GitHubWebhook,
) -> impl IntoResponse {
    match event {
        WebhookEvent::Ping => (StatusCode::OK, ""),
        WebhookEvent::Push {
            delivery_id,
            payload,
        } => match state
            .updater
            .handle_push_event(&delivery_id, &payload)
            .await
        {
            Ok(()) => (StatusCode::OK, ""),
            Err(error) => {
                let status = if error.is_bad_request() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                let span = tracing::error_span!("Push", delivery = delivery_id);
                span.log_error(error.into());
                (status, "")
            }
        },
    }
}
