//! Product-set commands: list, create, delete, membership edits.

use tracing::info;

use super::CliError;

/// List a catalog's product sets with their memberships.
pub async fn list(catalog_id: &str) -> Result<(), CliError> {
    let context = super::connect().await?;
    let sets = context.graph.product_sets(catalog_id, &context.token).await?;

    info!("{} set(s)", sets.len());
    for set in sets {
        let mut members: Vec<&str> = set.product_ids.iter().map(String::as_str).collect();
        members.sort_unstable();
        info!(
            "  {}  {}  ({} members: {})",
            set.id,
            set.name,
            members.len(),
            members.join(", ")
        );
    }
    Ok(())
}

/// Create product sets by name.
pub async fn create(catalog_id: &str, names: &[String]) -> Result<(), CliError> {
    let context = super::connect().await?;
    context
        .graph
        .create_product_sets(catalog_id, &context.token, names)
        .await?;
    info!("Created {} set(s) in catalog {catalog_id}", names.len());
    Ok(())
}

/// Delete product sets by id.
pub async fn delete(ids: &[String]) -> Result<(), CliError> {
    let context = super::connect().await?;
    context
        .graph
        .delete_product_sets(&context.token, ids)
        .await?;
    info!("Deleted {} set(s)", ids.len());
    Ok(())
}

/// Replace a set's membership with the given product ids.
pub async fn set_products(set_id: &str, ids: Vec<String>) -> Result<(), CliError> {
    let context = super::connect().await?;
    let desired = ids.into_iter().collect();
    let diff = context
        .graph
        .update_set_membership(set_id, &context.token, &desired)
        .await?;

    if diff.is_empty() {
        info!("Membership already up to date, nothing sent");
    } else {
        info!(
            "Membership updated: +{} / -{}",
            diff.to_add.len(),
            diff.to_remove.len()
        );
    }
    Ok(())
}
