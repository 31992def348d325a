//! Wire-level contract tests for the Catalog Console client.
//!
//! The client is pointed at a local `wiremock` server standing in for
//! the platform's Graph API, so every test asserts the actual bytes on
//! the wire: query parameters, form-encoded bodies, and batch
//! sub-request encoding. No real platform credentials are involved.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p catalog-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `graph_gateway` - request construction and error normalization
//! - `graph_products` - product listing, creation, deletion
//! - `graph_sets` - set listing fan-out and membership diff batches

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;

use catalog_client::GraphClient;
use wiremock::MockServer;

/// A Graph client wired to a local mock server.
#[must_use]
pub fn graph_client_for(server: &MockServer) -> GraphClient {
    GraphClient::from_base_url(server.uri())
}

/// Decode a form-url-encoded request body into a map.
#[must_use]
pub fn decode_form_body(body: &[u8]) -> HashMap<String, String> {
    url::form_urlencoded::parse(body)
        .into_owned()
        .collect()
}
