//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `GRAPH_APP_ID` - App identifier registered with the platform
//!
//! ## Optional
//! - `GRAPH_API_VERSION` - Graph API version (default: v19.0)
//! - `GRAPH_BASE_URL` - Graph API origin (default: <https://graph.facebook.com>)
//! - `GRAPH_ACCESS_TOKEN` - Pre-issued user token for headless sessions
//! - `GRAPH_USER_ID` - User id the pre-issued token belongs to
//! - `GEMINI_API_KEY` - Generative-text API key; without it the
//!   description writer falls back to deterministic sample copy
//! - `GEMINI_MODEL` - Generative model id (default: gemini-2.5-flash)

use secrecy::SecretString;
use thiserror::Error;

/// Graph API version spoken by this client.
pub const DEFAULT_API_VERSION: &str = "v19.0";

const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";
const DEFAULT_GENERATIVE_MODEL: &str = "gemini-2.5-flash";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    /// An environment variable is present but unusable.
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Graph API connection settings.
    pub graph: GraphConfig,
    /// Pre-issued credentials for headless sessions (optional).
    pub credentials: Option<StaticCredentials>,
    /// Generative-text settings; `None` enables the mock fallback.
    pub generative: Option<GenerativeConfig>,
}

/// Graph API connection settings.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// App identifier handed to the identity SDK.
    pub app_id: String,
    /// Graph API version segment (e.g. v19.0).
    pub api_version: String,
    /// Graph API origin, overridable for tests.
    pub base_url: String,
}

impl GraphConfig {
    /// Versioned base URL all request paths are appended to.
    #[must_use]
    pub fn endpoint_base(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.api_version
        )
    }
}

/// A pre-issued user token for sessions without a browser login flow.
///
/// Implements `Debug` manually to redact the token.
#[derive(Clone)]
pub struct StaticCredentials {
    /// Bearer token authorizing Graph API calls.
    pub access_token: SecretString,
    /// User the token was issued for.
    pub user_id: String,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_token", &"[REDACTED]")
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Generative-text API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct GenerativeConfig {
    /// API key for the generative-text service.
    pub api_key: SecretString,
    /// Model id (e.g. gemini-2.5-flash).
    pub model: String,
}

impl std::fmt::Debug for GenerativeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerativeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl GenerativeConfig {
    /// Load from the environment; `None` when no key is configured
    /// (the description writer then uses its mock fallback).
    #[must_use]
    pub fn from_env() -> Option<Self> {
        optional_env("GEMINI_API_KEY").map(|key| Self {
            api_key: key.into(),
            model: optional_env("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GENERATIVE_MODEL.to_string()),
        })
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing or a
    /// paired variable (token without user id) is incomplete.
    pub fn from_env() -> Result<Self, ConfigError> {
        let graph = GraphConfig {
            app_id: require_env("GRAPH_APP_ID")?,
            api_version: optional_env("GRAPH_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            base_url: optional_env("GRAPH_BASE_URL")
                .unwrap_or_else(|| DEFAULT_GRAPH_BASE_URL.to_string()),
        };

        let credentials = match (
            optional_env("GRAPH_ACCESS_TOKEN"),
            optional_env("GRAPH_USER_ID"),
        ) {
            (Some(token), Some(user_id)) => Some(StaticCredentials {
                access_token: token.into(),
                user_id,
            }),
            (Some(_), None) => {
                return Err(ConfigError::InvalidEnvVar(
                    "GRAPH_ACCESS_TOKEN",
                    "GRAPH_USER_ID must be set alongside the token".to_string(),
                ));
            }
            _ => None,
        };

        let generative = GenerativeConfig::from_env();

        Ok(Self {
            graph,
            credentials,
            generative,
        })
    }
}

fn require_env(name: &'static str) -> Result<String, ConfigError> {
    optional_env(name).ok_or(ConfigError::MissingEnvVar(name))
}

fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_base_joins_version() {
        let graph = GraphConfig {
            app_id: "app".to_string(),
            api_version: "v19.0".to_string(),
            base_url: "https://graph.facebook.com/".to_string(),
        };
        assert_eq!(graph.endpoint_base(), "https://graph.facebook.com/v19.0");
    }

    #[test]
    fn test_credentials_debug_redacts_token() {
        let credentials = StaticCredentials {
            access_token: "super-secret".to_string().into(),
            user_id: "42".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }
}
