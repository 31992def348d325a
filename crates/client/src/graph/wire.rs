//! Wire-shape types for the Graph API.
//!
//! The wire form differs from the domain model: prices are integer
//! minor units (cents), the product link is `url`, and the image is a
//! flat `image_url` field. Conversions live in [`super::convert`].

use serde::{Deserialize, Serialize};

/// Generic `{"data": [...]}` list envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: Vec<T>,
}

/// A product as returned by `/{catalogId}/products`.
#[derive(Debug, Deserialize)]
pub(crate) struct WireProduct {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub url: String,
    /// Price in minor units (cents).
    pub price: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub image_url: String,
}

/// Product fields sent to `/{catalogId}/products_batch`.
#[derive(Debug, Serialize)]
pub(crate) struct WireProductData {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub url: String,
    pub image_url: String,
    /// Price in minor units (cents).
    pub price: i64,
    pub currency: String,
    pub availability: &'static str,
}

/// One entry of a `products_batch` request.
#[derive(Debug, Serialize)]
pub(crate) struct ProductBatchRequest {
    pub method: &'static str,
    /// Client-synthesized retailer id, unique per creation request.
    pub retailer_id: String,
    pub data: WireProductData,
}

/// An `{id, name}` record (`fields=id,name` listings).
#[derive(Debug, Deserialize)]
pub(crate) struct WireNamed {
    pub id: String,
    pub name: String,
}

/// An `{id}` record (`fields=id` membership listings).
#[derive(Debug, Deserialize)]
pub(crate) struct WireId {
    pub id: String,
}

/// One sub-request of a root batch call.
///
/// The platform executes the sub-requests of a batch independently;
/// a batch is best-effort, not transactional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOp {
    /// HTTP method of the sub-request.
    pub method: &'static str,
    /// Path relative to the versioned API root, without leading slash.
    pub relative_url: String,
    /// Form-encoded sub-request body, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl BatchOp {
    /// A POST sub-request with a form-encoded body.
    #[must_use]
    pub fn post(relative_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            method: "POST",
            relative_url: relative_url.into(),
            body: Some(body.into()),
        }
    }

    /// A bodyless DELETE sub-request.
    #[must_use]
    pub fn delete(relative_url: impl Into<String>) -> Self {
        Self {
            method: "DELETE",
            relative_url: relative_url.into(),
            body: None,
        }
    }

    /// A DELETE sub-request with a form-encoded body.
    #[must_use]
    pub fn delete_with_body(
        relative_url: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            method: "DELETE",
            relative_url: relative_url.into(),
            body: Some(body.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_batch_serialization() {
        let ops = vec![BatchOp::delete("101"), BatchOp::delete("102")];
        let json = serde_json::to_value(&ops).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!([
                {"method": "DELETE", "relative_url": "101"},
                {"method": "DELETE", "relative_url": "102"},
            ])
        );
    }

    #[test]
    fn test_post_batch_keeps_body() {
        let op = BatchOp::post("123/product_sets", "name=Summer%20Sale");
        let json = serde_json::to_value(&op).expect("serialize");
        assert_eq!(json["method"], "POST");
        assert_eq!(json["body"], "name=Summer%20Sale");
    }
}
