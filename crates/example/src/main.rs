//! Catalog sweep CLI.
//!
//! Scans the example application's types and writes every translatable
//! entry to stdout as JSON.
//!
//! # Usage
//!
//! ```bash
//! catalog [resources|models]
//! ```
//!
//! Logging and the discovery depth bound are read from `LOKAL_LOG`,
//! `LOKAL_LOG_FORMAT` and `LOKAL_MAX_DEPTH`, also from a `.env` file.
//!
//! # Example
//!
//! ```bash
//! LOKAL_LOG=lokal_discovery=debug catalog models
//! ```

use std::io::Write;

use anyhow::{Context, bail};
use example::{app_scanner, build_catalog};
use lokal_core::CatalogConfig;
use lokal_discovery::TypeDiscovery;

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let config = CatalogConfig::from_env().context("invalid environment configuration")?;
    config.tracing_setup().init();

    let section = std::env::args().nth(1);
    let discovery = TypeDiscovery::new().with_config(config.discovery_config());
    let catalog = build_catalog(&app_scanner(), &discovery).context("catalog sweep failed")?;
    tracing::info!(
        entries = catalog.len(),
        cached_types = discovery.cache().len(),
        "Catalog built"
    );

    let mut stdout = std::io::stdout().lock();
    match section.as_deref() {
        None => serde_json::to_writer_pretty(&mut stdout, &catalog)?,
        Some("resources") => serde_json::to_writer_pretty(&mut stdout, &catalog.resources)?,
        Some("models") => serde_json::to_writer_pretty(&mut stdout, &catalog.models)?,
        Some(other) => bail!("unknown section '{other}', expected 'resources' or 'models'"),
    }
    writeln!(stdout)?;

    Ok(())
}
