//! Product-set operations.

use std::collections::HashSet;

use catalog_core::ProductSet;
use futures::future::try_join_all;
use reqwest::Method;
use tracing::instrument;

use super::membership::{self, MEMBERSHIP_PAGE_LIMIT, MembershipDiff};
use super::wire::{BatchOp, DataEnvelope, WireId, WireNamed};
use super::{GraphClient, GraphError};

impl GraphClient {
    /// List a catalog's product sets with their memberships.
    ///
    /// One membership lookup is issued per set, fanned out
    /// concurrently and joined before returning. This N+1 pattern is a
    /// known scaling limit at large catalog sizes.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from any of the underlying calls.
    #[instrument(skip(self, token))]
    pub async fn product_sets(
        &self,
        catalog_id: &str,
        token: &str,
    ) -> Result<Vec<ProductSet>, GraphError> {
        let value = self
            .call(
                &format!("/{catalog_id}/product_sets"),
                Method::GET,
                token,
                &[("fields", "id,name".to_string())],
            )
            .await?;
        let envelope: DataEnvelope<WireNamed> = serde_json::from_value(value)?;

        try_join_all(envelope.data.into_iter().map(|set| async move {
            let product_ids = self.set_member_ids(&set.id, token, None).await?;
            Ok::<_, GraphError>(ProductSet {
                id: set.id,
                name: set.name,
                product_ids,
            })
        }))
        .await
    }

    /// Create product sets by name as one best-effort batch.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token), fields(count = names.len()))]
    pub async fn create_product_sets(
        &self,
        catalog_id: &str,
        token: &str,
        names: &[String],
    ) -> Result<(), GraphError> {
        let ops: Vec<BatchOp> = names
            .iter()
            .map(|name| {
                BatchOp::post(
                    format!("{catalog_id}/product_sets"),
                    format!("name={}", urlencoding::encode(name)),
                )
            })
            .collect();
        self.execute_batch(token, &ops).await?;
        Ok(())
    }

    /// Delete product sets by id as one best-effort batch.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying call.
    #[instrument(skip(self, token), fields(count = set_ids.len()))]
    pub async fn delete_product_sets(
        &self,
        token: &str,
        set_ids: &[String],
    ) -> Result<(), GraphError> {
        let ops: Vec<BatchOp> = set_ids
            .iter()
            .map(|id| BatchOp::delete(id.clone()))
            .collect();
        self.execute_batch(token, &ops).await?;
        Ok(())
    }

    /// Move a set's membership to `desired` with a minimal batch.
    ///
    /// Fetches the current membership (first page, up to
    /// [`MEMBERSHIP_PAGE_LIMIT`] ids - larger memberships are diffed
    /// against an incomplete view), computes the add/remove delta, and
    /// applies it as at most one POST and one DELETE sub-request. An
    /// already-matching membership emits no HTTP mutation at all.
    ///
    /// # Errors
    ///
    /// Propagates [`GraphError`] from the underlying calls.
    #[instrument(skip(self, token, desired), fields(desired = desired.len()))]
    pub async fn update_set_membership(
        &self,
        set_id: &str,
        token: &str,
        desired: &HashSet<String>,
    ) -> Result<MembershipDiff, GraphError> {
        let current = self
            .set_member_ids(set_id, token, Some(MEMBERSHIP_PAGE_LIMIT))
            .await?;
        let diff = membership::diff(&current, desired);

        let mut ops = Vec::with_capacity(2);
        if !diff.to_add.is_empty() {
            ops.push(BatchOp::post(
                format!("{set_id}/products"),
                format!("product_ids={}", serde_json::to_string(&diff.to_add)?),
            ));
        }
        if !diff.to_remove.is_empty() {
            ops.push(BatchOp::delete_with_body(
                format!("{set_id}/products"),
                format!("product_ids={}", serde_json::to_string(&diff.to_remove)?),
            ));
        }

        self.execute_batch(token, &ops).await?;
        Ok(diff)
    }

    /// Fetch the ids of a set's member products.
    async fn set_member_ids(
        &self,
        set_id: &str,
        token: &str,
        limit: Option<u32>,
    ) -> Result<HashSet<String>, GraphError> {
        let mut params = vec![("fields", "id".to_string())];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        let value = self
            .call(&format!("/{set_id}/products"), Method::GET, token, &params)
            .await?;
        let envelope: DataEnvelope<WireId> = serde_json::from_value(value)?;
        Ok(envelope.data.into_iter().map(|p| p.id).collect())
    }
}
