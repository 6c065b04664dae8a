//! `havenfetch scan` – build the catalog from a directory of image files.

use std::path::Path;

use anyhow::{bail, Result};
use havenfetch_core::catalog::Catalog;
use havenfetch_core::config::HavenConfig;
use havenfetch_core::scanner;

pub async fn run_scan(
    catalog: &Catalog,
    cfg: &HavenConfig,
    source_dir: Option<&Path>,
) -> Result<()> {
    let dir = match source_dir.or(cfg.source_dir.as_deref()) {
        Some(d) => d,
        None => bail!("no source directory: pass --source-dir or set source_dir in config.toml"),
    };

    let report = scanner::scan_directory(catalog, dir, &cfg.image_extension).await?;

    println!("Processed {} file(s)", report.processed);
    println!("Added {} new name(s)", report.added);
    println!("Ignored {} already-present name(s)", report.ignored);
    if report.errors > 0 {
        println!("{} file(s) could not be recorded (see log)", report.errors);
    }
    Ok(())
}
