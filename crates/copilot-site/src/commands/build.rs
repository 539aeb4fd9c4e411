//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use copilot_site_server::SiteConfig;
use copilot_site_static::{FreezeConfig, Freezer};

/// Run the build command.
///
/// Fails when any route was skipped, even though the remaining pages were
/// written: a partial output directory is not deployable.
pub async fn run(config_path: &Path, output: PathBuf, base_url: String) -> Result<()> {
    tracing::info!("Building static site...");

    let site = SiteConfig::load(config_path)?;

    let config = FreezeConfig {
        output_dir: output,
        base_url,
        site,
        ..Default::default()
    };
    let base_url = config.base_url.clone();

    let report = Freezer::new(config).freeze().await?;

    tracing::info!(
        "Built {} pages in {}ms",
        report.pages.len(),
        report.duration_ms
    );
    tracing::info!("Output: {}", report.output_dir.display());
    tracing::info!("Base URL: {}", base_url);

    if !report.is_complete() {
        for skipped in &report.skipped {
            tracing::error!("Skipped {}: {}", skipped.route, skipped.error);
        }
        bail!(
            "{} of {} routes failed; output in {} is incomplete",
            report.skipped.len(),
            report.skipped.len() + report.pages.len(),
            report.output_dir.display()
        );
    }

    Ok(())
}
