//! Catalog builder: scan a directory of image files into the catalog.

use std::path::Path;

use anyhow::{Context, Result};

use crate::catalog::{Catalog, InsertOutcome};

/// Counts reported after one scan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Files whose extension matched.
    pub processed: usize,
    /// Names newly added to the catalog.
    pub added: usize,
    /// Names already present (uniqueness no-op).
    pub ignored: usize,
    /// Files whose insert failed for any other reason.
    pub errors: usize,
}

/// Scans `dir` for files with `extension` (case-insensitive, without the
/// dot) and inserts each file stem into the catalog as an asset name.
///
/// A duplicate name counts as ignored. Any other per-item failure is logged
/// and counted, and the scan continues with the next file.
pub async fn scan_directory(
    catalog: &Catalog,
    dir: &Path,
    extension: &str,
) -> Result<ScanReport> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("cannot read source directory {}", dir.display()))?;

    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        if !entry.file_type().await?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if !matches {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            names.push(stem.to_string());
        }
    }
    // read_dir order is platform-dependent; sort for stable counts and logs.
    names.sort();

    let mut report = ScanReport {
        processed: names.len(),
        ..Default::default()
    };
    for name in &names {
        match catalog.insert_name(name).await {
            Ok(InsertOutcome::Inserted) => report.added += 1,
            Ok(InsertOutcome::AlreadyExists) => report.ignored += 1,
            Err(e) => {
                tracing::warn!("could not record {}: {:#}", name, e);
                report.errors += 1;
            }
        }
    }

    tracing::info!(
        processed = report.processed,
        added = report.added,
        ignored = report.ignored,
        "scan of {} finished",
        dir.display()
    );
    Ok(report)
}
