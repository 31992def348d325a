//! Graph API client.
//!
//! The platform exposes a Graph-style HTTP API: JSON responses,
//! form-encoded mutations, a bearer token in the query string, and a
//! root batch endpoint that executes several sub-requests in one HTTP
//! call.
//!
//! # Architecture
//!
//! - [`gateway`] - low-level request construction and error
//!   normalization ([`GraphClient::call`])
//! - [`wire`] - wire-shape structs (cents prices, flat image fields,
//!   batch sub-request encoding)
//! - [`convert`] - wire ↔ domain mapping
//! - [`catalog`] - business, catalog, and product operations
//! - [`sets`] - product-set operations
//! - [`membership`] - pure add/remove diff over membership sets
//!
//! # Example
//!
//! ```rust,ignore
//! let graph = GraphClient::new(&config.graph);
//! let products = graph.products(&catalog_id, &token).await?;
//! graph.delete_products(&token, &["101".into(), "102".into()]).await?;
//! ```

mod catalog;
mod convert;
mod gateway;
pub mod membership;
mod sets;
mod wire;

pub use gateway::GraphClient;
pub use membership::MembershipDiff;
pub use wire::BatchOp;

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur when talking to the Graph API.
#[derive(Debug, Error)]
pub enum GraphError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform returned a non-success status.
    #[error("Graph API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// The platform's `error.message`, or a generic fallback.
        message: String,
    },

    /// JSON (de)serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request URL could not be assembled.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A price does not round to a whole number of minor units
    /// representable on the wire.
    #[error("Price not representable in minor units: {0}")]
    Price(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_carries_platform_message() {
        let err = GraphError::Api {
            status: 400,
            message: "Invalid token".to_string(),
        };
        assert_eq!(err.to_string(), "Graph API error (400): Invalid token");
    }

    #[test]
    fn test_price_error_display() {
        let err = GraphError::Price(Decimal::MAX);
        assert!(err.to_string().contains("minor units"));
    }
}
