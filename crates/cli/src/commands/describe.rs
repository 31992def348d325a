//! Description drafting command.

use catalog_client::DescriptionWriter;
use catalog_client::config::GenerativeConfig;
use tracing::info;

use super::CliError;

/// Draft a description for the named product.
///
/// Works without any Graph credentials: the writer falls back to
/// sample copy when no generative API key is configured.
pub async fn draft(product_name: &str) -> Result<(), CliError> {
    let writer = DescriptionWriter::new(GenerativeConfig::from_env());
    let text = writer.generate(product_name).await?;
    info!("{text}");
    Ok(())
}
