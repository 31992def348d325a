//! Low-level request construction and response normalization.

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, instrument};
use url::Url;

use crate::config::GraphConfig;

use super::GraphError;
use super::wire::BatchOp;

/// Graph API client.
///
/// Stateless with respect to domain entities: the bearer token is
/// supplied per call by the owner of the session. Cloning is cheap
/// (the underlying HTTP client is reference-counted).
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    /// Create a client from configuration.
    #[must_use]
    pub fn new(config: &GraphConfig) -> Self {
        Self::from_base_url(config.endpoint_base())
    }

    /// Create a client against an explicit versioned base URL.
    ///
    /// Tests point this at a local mock server.
    #[must_use]
    pub fn from_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Issue a single Graph API request.
    ///
    /// `params` are query parameters for GET and a form-url-encoded
    /// body for POST/DELETE. The bearer token always travels as the
    /// `access_token` query parameter.
    ///
    /// # Errors
    ///
    /// [`GraphError::Api`] on a non-success status, carrying the
    /// platform's `error.message` when the body provides one;
    /// [`GraphError::Http`] / [`GraphError::Json`] on transport or
    /// decoding failures.
    #[instrument(skip(self, token, params), fields(path = %path))]
    pub(crate) async fn call(
        &self,
        path: &str,
        method: Method,
        token: &str,
        params: &[(&str, String)],
    ) -> Result<Value, GraphError> {
        let mut url = Url::parse(&format!("{}{path}", self.base_url))?;
        url.query_pairs_mut().append_pair("access_token", token);

        let request = if method == Method::GET {
            for (key, value) in params {
                url.query_pairs_mut().append_pair(key, value);
            }
            self.http.get(url)
        } else {
            self.http.request(method, url).form(params)
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GraphError::Api {
                status: status.as_u16(),
                message: platform_error_message(&body)
                    .unwrap_or_else(|| "Graph API request failed".to_string()),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Execute independent mutations as one batched HTTP call.
    ///
    /// Sub-requests are JSON-encoded into the `batch` form parameter
    /// and POSTed to the root endpoint. The platform executes them
    /// independently: this is best-effort batching, NOT a transaction,
    /// and partial failure is reported per sub-request upstream.
    ///
    /// An empty `ops` slice emits no HTTP request at all.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token), fields(ops = ops.len()))]
    pub async fn execute_batch(
        &self,
        token: &str,
        ops: &[BatchOp],
    ) -> Result<Value, GraphError> {
        if ops.is_empty() {
            debug!("empty batch, skipping network call");
            return Ok(Value::Array(Vec::new()));
        }

        let encoded = serde_json::to_string(ops)?;
        self.call("", Method::POST, token, &[("batch", encoded)])
            .await
    }
}

/// Extract `error.message` from a platform error body, if present.
fn platform_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_error_message_extracted() {
        let body = r#"{"error":{"message":"Invalid token","code":190}}"#;
        assert_eq!(
            platform_error_message(body).as_deref(),
            Some("Invalid token")
        );
    }

    #[test]
    fn test_platform_error_message_absent() {
        assert_eq!(platform_error_message("not json"), None);
        assert_eq!(platform_error_message(r#"{"data":[]}"#), None);
    }

    #[tokio::test]
    async fn test_empty_batch_skips_network() {
        // Base URL is unroutable; an HTTP attempt would error out.
        let client = GraphClient::from_base_url("http://127.0.0.1:1/v19.0");
        let result = client
            .execute_batch("token", &[])
            .await
            .expect("no-op batch");
        assert_eq!(result, serde_json::json!([]));
    }
}
