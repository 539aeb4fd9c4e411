//! Site server command.

use std::path::Path;

use anyhow::Result;
use copilot_site_server::{ConfigOverrides, SiteConfig};

/// Run the serve command.
pub async fn run(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
    open: bool,
) -> Result<()> {
    let config = SiteConfig::load(config_path)?.merge(ConfigOverrides {
        host,
        port,
        ..Default::default()
    });

    if open {
        let url = format!("http://{}", config.address());
        if let Err(e) = open::that(&url) {
            tracing::warn!("Failed to open browser: {}", e);
        }
    }

    copilot_site_server::serve(config).await?;

    Ok(())
}
