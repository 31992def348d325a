//! Product commands: list, add, delete.

use catalog_client::DescriptionWriter;
use catalog_core::{NewProduct, ProductImage};
use rust_decimal::Decimal;
use tracing::info;

use super::CliError;

/// Arguments for creating a product.
pub struct AddArgs {
    /// Target catalog id.
    pub catalog: String,
    /// Product name.
    pub name: String,
    /// Drafted by the description writer when omitted.
    pub description: Option<String>,
    /// Brand name.
    pub brand: String,
    /// Landing-page URL.
    pub link: String,
    /// Price in major units.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Image URL.
    pub image_url: String,
}

/// List a catalog's products (first page only).
pub async fn list(catalog_id: &str) -> Result<(), CliError> {
    let context = super::connect().await?;
    let products = context.graph.products(catalog_id, &context.token).await?;

    info!("{} product(s)", products.len());
    for product in products {
        info!(
            "  {}  {}  {} {}  [{}]",
            product.id, product.name, product.price, product.currency, product.brand
        );
    }
    Ok(())
}

/// Create a product, drafting a description if none was given.
pub async fn add(args: AddArgs) -> Result<(), CliError> {
    let context = super::connect().await?;

    let description = match args.description {
        Some(description) => description,
        None => {
            let writer = DescriptionWriter::new(context.config.generative.clone());
            let drafted = writer.generate(&args.name).await?;
            info!("Drafted description: {drafted}");
            drafted
        }
    };

    let product = NewProduct {
        name: args.name,
        description,
        brand: args.brand,
        link: args.link,
        price: args.price,
        currency: args.currency,
        image: ProductImage {
            url: args.image_url,
        },
    };

    context
        .graph
        .add_products(&args.catalog, &context.token, &[product])
        .await?;
    info!("Product submitted to catalog {}", args.catalog);
    Ok(())
}

/// Delete products by id.
pub async fn delete(ids: &[String]) -> Result<(), CliError> {
    let context = super::connect().await?;
    context.graph.delete_products(&context.token, ids).await?;
    info!("Deleted {} product(s)", ids.len());
    Ok(())
}
