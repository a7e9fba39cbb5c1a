use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

pub(super) fn default_app_id() -> u64 {
    1
}

/// Only the installation with ID 1 can be authenticated, other installations are not found.
pub(super) async fn setup_app_installation_token_mock(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/app/installations/1/access_tokens"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
            "token": "test",
            "permissions": {}
        })))
        .mount(mock_server)
        .await;
}
