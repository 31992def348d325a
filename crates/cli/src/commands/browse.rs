//! Account browsing: businesses and catalogs.

use tracing::info;

use super::CliError;

/// List businesses for the authenticated user.
pub async fn businesses() -> Result<(), CliError> {
    let context = super::connect().await?;
    let businesses = context
        .graph
        .businesses(&context.user_id, &context.token)
        .await?;

    info!("{} business(es)", businesses.len());
    for business in businesses {
        info!("  {}  {}", business.id, business.name);
    }
    Ok(())
}

/// List product catalogs owned by a business.
pub async fn catalogs(business_id: &str) -> Result<(), CliError> {
    let context = super::connect().await?;
    let catalogs = context.graph.catalogs(business_id, &context.token).await?;

    info!("{} catalog(s)", catalogs.len());
    for catalog in catalogs {
        info!("  {}  {}", catalog.id, catalog.name);
    }
    Ok(())
}
