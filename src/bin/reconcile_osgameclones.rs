// osgameclones Reconciliation Binary
//
// Purpose: Compare our games with the osgameclones YAML files and print the differences
// Usage: OSGC_DIR=../osgameclones/games cargo run --bin reconcile_osgameclones

use std::path::PathBuf;

use osgl_site_index::load_catalogue;
use osgl_site_index::reconcile::{load_external, reconcile};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osgl_site_index=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = PathBuf::from(std::env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()));
    let osgc_dir =
        PathBuf::from(std::env::var("OSGC_DIR").unwrap_or_else(|_| "../osgameclones/games".to_string()));

    tracing::info!("  DATA_DIR: {:?}", data_dir);
    tracing::info!("  OSGC_DIR: {:?}", osgc_dir);

    let external = load_external(&osgc_dir)?;
    let catalogue = load_catalogue(&data_dir)?;

    let report = reconcile(&external, &catalogue.games);
    print!("{}", report);

    Ok(())
}
