//! Generative-text adapter for drafting product descriptions.
//!
//! Wraps a single `models/{model}:generateContent` call. When no API
//! key is configured the writer returns deterministic sample copy
//! instead - the designed offline/demo path, not an error.

use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{instrument, warn};

use crate::config::GenerativeConfig;

const GENERATIVE_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Errors that can occur when generating a description.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The generative API returned a non-success status.
    #[error("Generative API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, as far as it was readable.
        message: String,
    },

    /// The response carried no generated text.
    #[error("Generative API returned no text")]
    Empty,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Drafts short persuasive product descriptions.
#[derive(Debug, Clone)]
pub struct DescriptionWriter {
    http: reqwest::Client,
    base_url: String,
    config: Option<GenerativeConfig>,
}

impl DescriptionWriter {
    /// Create a writer; `None` config selects the mock fallback.
    #[must_use]
    pub fn new(config: Option<GenerativeConfig>) -> Self {
        Self::with_base_url(config, GENERATIVE_BASE_URL)
    }

    /// Create a writer against an explicit base URL (for tests).
    #[must_use]
    pub fn with_base_url(config: Option<GenerativeConfig>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            config,
        }
    }

    /// Draft a description for the named product.
    ///
    /// Without an API key this returns deterministic sample copy
    /// embedding the product name and never fails. The prompt asks
    /// for at most 150 characters but the model's output is returned
    /// untruncated either way.
    ///
    /// # Errors
    ///
    /// [`DescribeError`] when the upstream call fails or returns no
    /// text; the caller always gets either a complete string or a
    /// typed failure.
    #[instrument(skip(self))]
    pub async fn generate(&self, product_name: &str) -> Result<String, DescribeError> {
        let Some(config) = &self.config else {
            warn!("no generative API key configured, returning sample copy");
            return Ok(format!(
                "This is a sample description for {product_name}. \
                 Configure GEMINI_API_KEY to draft real copy."
            ));
        };

        let prompt = format!(
            "Generate a compelling, short e-commerce product description for: \
             \"{product_name}\". Focus on key benefits and use persuasive \
             language. Maximum 150 characters."
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, config.model
            ))
            .header("x-goog-api-key", config.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DescribeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateResponse = response.json().await?;
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(DescribeError::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config() -> GenerativeConfig {
        GenerativeConfig {
            api_key: "test-key".to_string().into(),
            model: "gemini-2.5-flash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_mock_fallback_embeds_product_name() {
        let writer = DescriptionWriter::new(None);
        let text = writer.generate("Red Mug").await.expect("mock path");
        assert!(!text.is_empty());
        assert!(text.contains("Red Mug"));
    }

    #[tokio::test]
    async fn test_generated_text_is_returned_untruncated() {
        let mock_server = MockServer::start().await;
        let long_copy = "A".repeat(200);
        let body = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "text": long_copy }],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let writer = DescriptionWriter::with_base_url(Some(config()), mock_server.uri());
        let text = writer.generate("Red Mug").await.expect("generated");
        // The 150-character bound is a prompt hint, not a truncation.
        assert_eq!(text.len(), 200);
    }

    #[tokio::test]
    async fn test_upstream_failure_surfaces_typed_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let writer = DescriptionWriter::with_base_url(Some(config()), mock_server.uri());
        let err = writer.generate("Red Mug").await.expect_err("must fail");
        assert!(matches!(err, DescribeError::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"candidates": []})),
            )
            .mount(&mock_server)
            .await;

        let writer = DescriptionWriter::with_base_url(Some(config()), mock_server.uri());
        let err = writer.generate("Red Mug").await.expect_err("must fail");
        assert!(matches!(err, DescribeError::Empty));
    }
}
