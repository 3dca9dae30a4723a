use std::sync::OnceLock;
use wiremock::matchers::{body_string_contains, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Kept alive for the whole run: the mocks are gone once the server is dropped.
static DEMO_BACKEND: OnceLock<MockServer> = OnceLock::new();

pub async fn init_demo() {
    let mock_server = MockServer::start().await;
    mock_attain(&mock_server).await;
    log::info!("Demo backend listening on {}", mock_server.uri());
    if DEMO_BACKEND.set(mock_server).is_err() {
        log::warn!("Demo backend already initialized.");
    }
}

pub fn demo_backend_uri() -> Option<String> {
    DEMO_BACKEND.get().map(MockServer::uri)
}

/// Orders for a known supplier carrying a file are accepted, everything else is refused.
async fn mock_attain(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path_regex(r"^/attain/(fritolay|kehe|coremark)$"))
        .and(body_string_contains(r#"name="csv""#))
        .respond_with(ResponseTemplate::new(200))
        .with_priority(1)
        .mount(mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/attain/"))
        .respond_with(ResponseTemplate::new(422))
        .mount(mock_server)
        .await;
}
