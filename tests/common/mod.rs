//! Shared test helpers: a Canvas API wired to a wiremock server.

#![allow(dead_code)]

use easel::api::CanvasApi;
use easel::config::CanvasConfig;
use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test token every mock API authenticates with.
pub const TEST_TOKEN: &str = "test-token";

/// A `CanvasApi` pointed at the mock server.
pub fn mock_api(server: &MockServer) -> CanvasApi {
    let config = CanvasConfig::new(server.uri(), TEST_TOKEN).unwrap();
    CanvasApi::new(config)
}

/// Mount a 200 JSON response for any GET on `route`.
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount a bare status response for any GET on `route`.
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
