//! Session commands: status and logout.

use catalog_client::config::AppConfig;
use catalog_client::session::{Session, StaticTokenProvider};
use secrecy::ExposeSecret;
use tracing::info;

use super::CliError;

/// Report the current login status.
pub async fn status() -> Result<(), CliError> {
    let config = AppConfig::from_env()?;
    let Some(credentials) = config.credentials.as_ref() else {
        info!("Status: unknown (no credentials configured)");
        return Ok(());
    };

    let session = Session::new(StaticTokenProvider::new(
        credentials.access_token.expose_secret(),
        credentials.user_id.clone(),
    ));
    session.initialize(&config.graph.app_id).await?;

    let status = session.status().await?;
    match status.auth() {
        Some(auth) => {
            info!("Status: connected");
            info!("  User id: {}", auth.user_id);
            info!("  Graph domain: {}", auth.graph_domain);
            info!("  Token expires in: {}s", auth.expires_in);
        }
        None => info!("Status: not connected"),
    }
    Ok(())
}

/// Log in with the catalog-management scopes and report the outcome.
pub async fn login() -> Result<(), CliError> {
    let context = super::connect().await?;
    let status = context.session.login().await?;
    match status.auth() {
        Some(auth) => info!("Logged in as user {}", auth.user_id),
        None => info!("Login declined or not authorized"),
    }
    Ok(())
}

/// End the platform session.
pub async fn logout() -> Result<(), CliError> {
    let context = super::connect().await?;
    context.session.logout().await?;
    info!("Logged out");
    Ok(())
}
