//! Catalog product types.
//!
//! Prices are held as [`Decimal`] amounts in the currency's major unit
//! (dollars, not cents). The Graph API's wire form uses integer minor
//! units; the client crate's conversion layer owns that transform and
//! keeps it exact for amounts with at most two decimal digits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product as read from a catalog.
///
/// The `id` is platform-assigned and opaque; products that have not
/// been created yet are represented by [`NewProduct`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Platform-assigned opaque identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Landing-page URL for the product.
    pub link: String,
    /// Price in the currency's major unit.
    pub price: Decimal,
    /// ISO 4217 currency code (e.g. "USD").
    pub currency: String,
    /// Primary product image.
    pub image: ProductImage,
}

/// A product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
}

/// A product that has not been created on the platform yet.
///
/// Identical to [`Product`] minus the platform-assigned `id`; the
/// client synthesizes a retailer id at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Brand name.
    pub brand: String,
    /// Landing-page URL for the product.
    pub link: String,
    /// Price in the currency's major unit.
    pub price: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
    /// Primary product image.
    pub image: ProductImage,
}
