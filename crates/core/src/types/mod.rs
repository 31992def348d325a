//! Core types for Catalog Console.

pub mod auth;
pub mod catalog;
pub mod product;

pub use auth::{AuthResponse, LoginStatus};
pub use catalog::{Business, Catalog, ProductSet};
pub use product::{NewProduct, Product, ProductImage};
