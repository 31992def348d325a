//! Wire ↔ domain conversion functions.

use catalog_core::{NewProduct, Product, ProductImage};
use chrono::Utc;
use rand::Rng;
use rand::distr::Alphanumeric;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::GraphError;
use super::wire::{WireProduct, WireProductData};

const RETAILER_ID_SUFFIX_LEN: usize = 9;

/// Convert a wire product into domain form.
///
/// Cents become a two-decimal [`Decimal`]; `url` becomes `link` and the
/// flat `image_url` becomes a nested image. Exact for every integral
/// cent amount.
pub(crate) fn product_from_wire(wire: WireProduct) -> Product {
    Product {
        id: wire.id,
        name: wire.name,
        description: wire.description,
        brand: wire.brand,
        link: wire.url,
        price: Decimal::new(wire.price, 2),
        currency: wire.currency,
        image: ProductImage {
            url: wire.image_url,
        },
    }
}

/// Convert a new product into its creation wire form.
///
/// # Errors
///
/// [`GraphError::Price`] when the price does not round to an `i64`
/// number of minor units.
pub(crate) fn product_to_wire(product: &NewProduct) -> Result<WireProductData, GraphError> {
    Ok(WireProductData {
        name: product.name.clone(),
        description: product.description.clone(),
        brand: product.brand.clone(),
        url: product.link.clone(),
        image_url: product.image.url.clone(),
        price: price_to_cents(product.price)?,
        currency: product.currency.clone(),
        availability: "in stock",
    })
}

/// Round a major-unit price to integer minor units.
pub(crate) fn price_to_cents(price: Decimal) -> Result<i64, GraphError> {
    price
        .checked_mul(Decimal::ONE_HUNDRED)
        .map(|cents| cents.round())
        .and_then(|cents| cents.to_i64())
        .ok_or(GraphError::Price(price))
}

/// Synthesize a client-side retailer id for a product creation.
///
/// Unix-millisecond timestamp plus a random alphanumeric suffix:
/// collision-resistant within a session's batches, not globally unique.
pub(crate) fn retailer_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(RETAILER_ID_SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("prod_{}_{suffix}", Utc::now().timestamp_millis())
}
