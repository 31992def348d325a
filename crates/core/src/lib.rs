//! Catalog Core - Shared domain types.
//!
//! This crate provides the domain model shared by the Catalog Console
//! components:
//! - `client` - Graph API client, session bootstrap, description writer
//! - `cli` - Command-line console invoking the client operations
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Wire
//! representations (cents-based prices, flat image fields) live in the
//! client crate's conversion layer; everything here is in domain form.
//!
//! # Modules
//!
//! - [`types`] - Products, product sets, businesses, catalogs, and the
//!   identity platform's auth/session types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
