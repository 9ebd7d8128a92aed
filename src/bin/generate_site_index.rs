// Site Index Generator Binary
//
// Purpose: Load the catalogue, build every page payload, write site.json
// Usage: cargo run --bin generate_site_index

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use osgl_site_index::{load_catalogue, ClassificationConfig, SiteGenerator};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osgl_site_index=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Configuration from environment variables
    let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    let output_dir = PathBuf::from(std::env::var("OUTPUT_DIR").unwrap_or_else(|_| "site".to_string()));
    let config_path = std::env::var("CONFIG_PATH").ok().map(PathBuf::from);

    tracing::info!("Configuration:");
    tracing::info!("  DATA_DIR: {:?}", data_dir);
    tracing::info!("  OUTPUT_DIR: {:?}", output_dir);
    tracing::info!("  CONFIG_PATH: {:?}", config_path);

    let config = match &config_path {
        Some(path) => ClassificationConfig::load(path)?,
        None => ClassificationConfig::default(),
    };

    let catalogue = load_catalogue(&data_dir)?;
    let payload = SiteGenerator::new(config)
        .generate(catalogue)
        .context("Site generation failed")?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;
    let output_path = output_dir.join("site.json");
    let json = serde_json::to_string_pretty(&payload).context("Failed to serialize site payload")?;
    fs::write(&output_path, json).with_context(|| format!("Failed to write {:?}", output_path))?;

    tracing::info!("Wrote {} pages to {:?}", payload.page_paths().len(), output_path);
    Ok(())
}
