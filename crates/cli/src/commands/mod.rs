//! CLI command implementations.

pub mod browse;
pub mod describe;
pub mod products;
pub mod session;
pub mod sets;

use catalog_client::config::AppConfig;
use catalog_client::graph::GraphClient;
use catalog_client::session::{Session, StaticTokenProvider};
use catalog_client::{AuthError, ConfigError, DescribeError, GraphError};
use secrecy::ExposeSecret;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Session bootstrap failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Graph API call failed.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Description drafting failed.
    #[error(transparent)]
    Describe(#[from] DescribeError),

    /// Authenticated command without credentials configured.
    #[error("Not connected: set GRAPH_ACCESS_TOKEN and GRAPH_USER_ID")]
    NotConnected,
}

/// A bootstrapped session plus the bits commands need from it.
pub struct Context {
    /// Graph API client.
    pub graph: GraphClient,
    /// Bearer token for this session.
    pub token: String,
    /// Authenticated user id.
    pub user_id: String,
    /// Loaded configuration.
    pub config: AppConfig,
    /// The live session handle.
    pub session: Session<StaticTokenProvider>,
}

/// Load config, initialize the SDK session, and verify connectivity.
///
/// The CLI owns the selected business/catalog/token only for the span
/// of one command invocation; nothing is persisted.
pub async fn connect() -> Result<Context, CliError> {
    let config = AppConfig::from_env()?;
    let credentials = config.credentials.as_ref().ok_or(CliError::NotConnected)?;

    let session = Session::new(StaticTokenProvider::new(
        credentials.access_token.expose_secret(),
        credentials.user_id.clone(),
    ));
    session.initialize(&config.graph.app_id).await?;

    let status = session.status().await?;
    let auth = status.auth().ok_or(CliError::NotConnected)?;

    Ok(Context {
        graph: GraphClient::new(&config.graph),
        token: auth.access_token.clone(),
        user_id: auth.user_id.clone(),
        config,
        session,
    })
}
