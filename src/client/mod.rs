//! HTTP transport for the Canvas API.
//!
//! Owns base URL + bearer-token composition and nothing else: requests go
//! out with a fixed timeout and come back as raw status + body, without
//! interpretation. Classification lives in [`crate::response`]; retry
//! decisions belong to the aggregation layer, which is the only caller
//! that knows whether a failure should abort or be skipped.

use std::sync::OnceLock;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use tracing::debug;

use crate::config::CanvasConfig;
use crate::error::{EaselError, Result};

/// Fixed per-request timeout. Canvas occasionally stalls on large course
/// listings; an unbounded wait would hang the whole tool call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

static SHARED_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Get (or create) the shared reqwest client.
fn shared_client() -> &'static reqwest::Client {
    SHARED_CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client")
    })
}

/// Build default headers for the bearer-token API.
fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(val) = HeaderValue::from_str(&format!("Bearer {token}")) {
        headers.insert(AUTHORIZATION, val);
    }
    headers
}

/// Flat query parameters with repeated-key encoding for list values.
///
/// Canvas expects list parameters as repeated keys
/// (`include[]=term&include[]=teachers`), which is exactly what a pair
/// list gives reqwest.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single key/value pair.
    pub fn pair(mut self, key: &str, value: impl ToString) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a repeated-key list (`key=v1&key=v2`).
    pub fn list(mut self, key: &str, values: &[&str]) -> Self {
        for value in values {
            self.pairs.push((key.to_string(), (*value).to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Raw status and parsed body of one upstream response, uninterpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    /// `None` when the body was absent or not JSON.
    pub body: Option<serde_json::Value>,
}

/// Transport client for authenticated GETs against the Canvas API.
#[derive(Debug, Clone)]
pub struct CanvasClient {
    config: CanvasConfig,
}

impl CanvasClient {
    pub fn new(config: CanvasConfig) -> Self {
        Self { config }
    }

    /// Issue an authenticated GET against a relative API path.
    ///
    /// Returns the raw status code and body; no retries, no status
    /// interpretation.
    pub async fn get(&self, path: &str, query: &Query) -> Result<RawResponse> {
        if path.is_empty() {
            return Err(EaselError::InvalidArgument(
                "request path must not be empty".to_string(),
            ));
        }

        let url = format!("{}{}", self.config.base_url(), path);
        debug!(%path, "canvas request");

        let mut request = shared_client()
            .get(&url)
            .headers(bearer_headers(self.config.token()));
        if !query.is_empty() {
            request = request.query(query.pairs());
        }

        let response = request.send().await.map_err(map_send_error)?;
        let status = response.status().as_u16();
        let body = response.json::<serde_json::Value>().await.ok();

        Ok(RawResponse { status, body })
    }
}

/// Fold reqwest's transport failures into the error taxonomy.
fn map_send_error(err: reqwest::Error) -> EaselError {
    if err.is_timeout() {
        EaselError::Timeout(REQUEST_TIMEOUT.as_secs())
    } else {
        EaselError::Network(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_list_encodes_repeated_keys() {
        let query = Query::new()
            .pair("enrollment_state", "active")
            .list("include[]", &["term", "teachers"]);

        assert_eq!(
            query.pairs(),
            &[
                ("enrollment_state".to_string(), "active".to_string()),
                ("include[]".to_string(), "term".to_string()),
                ("include[]".to_string(), "teachers".to_string()),
            ]
        );
    }

    #[test]
    fn query_pair_accepts_numbers() {
        let query = Query::new().pair("per_page", 100);
        assert_eq!(query.pairs(), &[("per_page".to_string(), "100".to_string())]);
    }

    #[tokio::test]
    async fn empty_path_is_rejected_before_any_network_call() {
        let config = CanvasConfig::new("https://canvas.example.com/api/v1", "token-1").unwrap();
        let client = CanvasClient::new(config);

        let err = client.get("", &Query::new()).await.unwrap_err();
        assert!(matches!(err, EaselError::InvalidArgument(_)));
    }
}
