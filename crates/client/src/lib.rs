//! Catalog Client - the service layer behind the Catalog Console.
//!
//! Everything here is a client of somebody else's infrastructure; this
//! crate runs no server of its own.
//!
//! # Modules
//!
//! - [`graph`] - Graph API gateway, domain mappers, batch encoding, and
//!   the product-set membership differ
//! - [`session`] - One-shot bootstrap of the platform's identity SDK,
//!   wrapping its callback style behind plain futures
//! - [`describe`] - Generative-text adapter that drafts product
//!   descriptions, with an offline mock fallback
//! - [`config`] - Environment-variable configuration
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_client::config::AppConfig;
//! use catalog_client::graph::GraphClient;
//! use catalog_client::session::{Session, StaticTokenProvider};
//!
//! let config = AppConfig::from_env()?;
//! let credentials = config.credentials.as_ref().expect("GRAPH_ACCESS_TOKEN set");
//! let session = Session::new(StaticTokenProvider::new(
//!     credentials.access_token.expose_secret(),
//!     &credentials.user_id,
//! ));
//! session.initialize(&config.graph.app_id).await?;
//!
//! let status = session.status().await?;
//! let auth = status.auth().expect("connected");
//!
//! let graph = GraphClient::new(&config.graph);
//! let businesses = graph.businesses(&auth.user_id, &auth.access_token).await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod describe;
pub mod graph;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use describe::{DescribeError, DescriptionWriter};
pub use graph::{BatchOp, GraphClient, GraphError, MembershipDiff};
pub use session::{AuthError, IdentityProvider, Session, StaticTokenProvider};
