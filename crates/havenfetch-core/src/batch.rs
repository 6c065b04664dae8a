//! Sequential batch download of catalog names at one resolution tier.

use std::path::Path;

use crate::downloader::{download_file, DownloadOptions};
use crate::resolution::Resolution;
use crate::url_model;

/// Per-item result reported while the batch runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Downloaded,
    AlreadyPresent,
    Failed,
}

/// Aggregate counts for one batch run.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOutcome {
    pub total: usize,
    pub downloaded: usize,
    pub already_present: usize,
    pub failed: usize,
}

/// Target filenames that already exist in `dir`, in catalog order.
pub fn check_existing(names: &[String], resolution: Resolution, dir: &Path) -> Vec<String> {
    names
        .iter()
        .map(|name| resolution.target_filename(name))
        .filter(|filename| dir.join(filename).exists())
        .collect()
}

/// Downloads every name whose target file is missing from `dir`, one at a
/// time, in catalog order.
///
/// `report` is invoked after each item with its 1-based index, name, and
/// status. A failed download is reported and the batch continues; nothing
/// is retried.
pub fn run_batch(
    names: &[String],
    resolution: Resolution,
    dir: &Path,
    url_template: &str,
    opts: DownloadOptions,
    mut report: impl FnMut(usize, &str, ItemStatus),
) -> BatchOutcome {
    let mut outcome = BatchOutcome {
        total: names.len(),
        ..Default::default()
    };

    for (i, name) in names.iter().enumerate() {
        let filename = resolution.target_filename(name);
        let dest = dir.join(&filename);
        let status = if dest.exists() {
            outcome.already_present += 1;
            ItemStatus::AlreadyPresent
        } else {
            let url = url_model::render_url(url_template, resolution, &filename);
            match download_file(&url, Some(&dest), opts) {
                Ok(path) => {
                    println!("  saved {}", path.display());
                    outcome.downloaded += 1;
                    ItemStatus::Downloaded
                }
                Err(e) => {
                    println!("  download failed: {e}");
                    tracing::warn!(%url, "download failed: {}", e);
                    outcome.failed += 1;
                    ItemStatus::Failed
                }
            }
        };
        report(i + 1, name, status);
    }

    outcome
}
