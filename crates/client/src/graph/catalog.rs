//! Business, catalog, and product operations.

use catalog_core::{Business, Catalog, NewProduct, Product};
use reqwest::Method;
use tracing::instrument;

use super::convert::{product_from_wire, product_to_wire, retailer_id};
use super::wire::{BatchOp, DataEnvelope, ProductBatchRequest, WireNamed, WireProduct};
use super::{GraphClient, GraphError};

/// Fields requested when listing products.
const PRODUCT_FIELDS: &str = "id,name,description,brand,url,price,currency,image_url";

/// First-page size for product listings; no further pages are fetched.
const PRODUCT_PAGE_LIMIT: u32 = 100;

impl GraphClient {
    /// List the businesses the authenticated user belongs to.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token))]
    pub async fn businesses(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<Vec<Business>, GraphError> {
        let value = self
            .call(&format!("/{user_id}/businesses"), Method::GET, token, &[])
            .await?;
        let envelope: DataEnvelope<WireNamed> = serde_json::from_value(value)?;
        Ok(envelope
            .data
            .into_iter()
            .map(|b| Business {
                id: b.id,
                name: b.name,
            })
            .collect())
    }

    /// List the product catalogs owned by a business.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token))]
    pub async fn catalogs(
        &self,
        business_id: &str,
        token: &str,
    ) -> Result<Vec<Catalog>, GraphError> {
        let value = self
            .call(
                &format!("/{business_id}/owned_product_catalogs"),
                Method::GET,
                token,
                &[("fields", "id,name".to_string())],
            )
            .await?;
        let envelope: DataEnvelope<WireNamed> = serde_json::from_value(value)?;
        Ok(envelope
            .data
            .into_iter()
            .map(|c| Catalog {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// List a catalog's products, mapped into domain form.
    ///
    /// Only the first page (up to 100 products) is fetched.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token))]
    pub async fn products(
        &self,
        catalog_id: &str,
        token: &str,
    ) -> Result<Vec<Product>, GraphError> {
        let value = self
            .call(
                &format!("/{catalog_id}/products"),
                Method::GET,
                token,
                &[
                    ("fields", PRODUCT_FIELDS.to_string()),
                    ("limit", PRODUCT_PAGE_LIMIT.to_string()),
                ],
            )
            .await?;
        let envelope: DataEnvelope<WireProduct> = serde_json::from_value(value)?;
        Ok(envelope.data.into_iter().map(product_from_wire).collect())
    }

    /// Create products via the catalog's `products_batch` endpoint.
    ///
    /// Each product gets a client-synthesized retailer id, unique per
    /// creation request.
    ///
    /// # Errors
    ///
    /// [`GraphError::Price`] when a price does not round to minor
    /// units; otherwise propagates the underlying call's error.
    #[instrument(skip(self, token, products), fields(count = products.len()))]
    pub async fn add_products(
        &self,
        catalog_id: &str,
        token: &str,
        products: &[NewProduct],
    ) -> Result<(), GraphError> {
        let requests = products
            .iter()
            .map(|product| {
                Ok(ProductBatchRequest {
                    method: "POST",
                    retailer_id: retailer_id(),
                    data: product_to_wire(product)?,
                })
            })
            .collect::<Result<Vec<_>, GraphError>>()?;

        self.call(
            &format!("/{catalog_id}/products_batch"),
            Method::POST,
            token,
            &[("requests", serde_json::to_string(&requests)?)],
        )
        .await?;
        Ok(())
    }

    /// Delete products by id as one best-effort batch.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token), fields(count = product_ids.len()))]
    pub async fn delete_products(
        &self,
        token: &str,
        product_ids: &[String],
    ) -> Result<(), GraphError> {
        let ops: Vec<BatchOp> = product_ids
            .iter()
            .map(|id| BatchOp::delete(id.clone()))
            .collect();
        self.execute_batch(token, &ops).await?;
        Ok(())
    }
}
