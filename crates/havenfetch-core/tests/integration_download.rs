//! Integration tests: streaming downloads against a local HTTP server.
//!
//! Covers the single-file transfer and the sequential batch, including the
//! recoverable-404 path and the all-already-present re-run.

mod common;

use havenfetch_core::batch::{run_batch, ItemStatus};
use havenfetch_core::downloader::{download_file, DownloadError, DownloadOptions};
use havenfetch_core::resolution::Resolution;
use tempfile::tempdir;

fn quiet() -> DownloadOptions {
    DownloadOptions {
        show_progress: false,
        ..Default::default()
    }
}

#[test]
fn download_writes_body_to_dest() {
    let body: Vec<u8> = (0u8..=255).cycle().take(32 * 1024).collect();
    let base = common::file_server::start(body.clone());

    let dir = tempdir().unwrap();
    let dest = dir.path().join("asset_4k.exr");
    let url = format!("{base}asset_4k.exr");

    let path = download_file(&url, Some(&dest), quiet()).unwrap();
    assert_eq!(path, dest);
    assert_eq!(std::fs::read(&dest).unwrap(), body);
}

#[test]
fn download_creates_missing_parent_dirs() {
    let base = common::file_server::start(b"exr-bytes".to_vec());

    let dir = tempdir().unwrap();
    let dest = dir.path().join("nested").join("deep").join("asset_1k.exr");

    download_file(&format!("{base}asset_1k.exr"), Some(&dest), quiet()).unwrap();
    assert_eq!(std::fs::read(&dest).unwrap(), b"exr-bytes");
}

#[test]
fn http_404_is_recoverable_and_leaves_no_file() {
    let base = common::file_server::start_with_status(Vec::new(), 404);

    let dir = tempdir().unwrap();
    let dest = dir.path().join("missing_4k.exr");

    let err = download_file(&format!("{base}missing_4k.exr"), Some(&dest), quiet()).unwrap_err();
    match err {
        DownloadError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(!dest.exists());
}

#[test]
fn batch_downloads_missing_files_then_rerun_does_nothing() {
    let base = common::file_server::start(b"exr-bytes".to_vec());
    let template = format!("{base}{{resolution}}k/{{filename}}");

    let dir = tempdir().unwrap();
    let names = vec!["beach".to_string(), "forest".to_string()];

    let first = run_batch(
        &names,
        Resolution::K2,
        dir.path(),
        &template,
        quiet(),
        |_, _, _| {},
    );
    assert_eq!(first.total, 2);
    assert_eq!(first.downloaded, 2);
    assert_eq!(first.failed, 0);
    assert!(dir.path().join("beach_2k.exr").exists());
    assert!(dir.path().join("forest_2k.exr").exists());

    let mut statuses = Vec::new();
    let second = run_batch(
        &names,
        Resolution::K2,
        dir.path(),
        &template,
        quiet(),
        |_, name, status| statuses.push((name.to_string(), status)),
    );
    assert_eq!(second.downloaded, 0);
    assert_eq!(second.already_present, 2);
    assert!(statuses
        .iter()
        .all(|(_, s)| *s == ItemStatus::AlreadyPresent));
}

#[test]
fn failed_item_does_not_stop_the_batch() {
    let base = common::file_server::start_with_status(Vec::new(), 404);
    let template = format!("{base}{{resolution}}k/{{filename}}");

    let dir = tempdir().unwrap();
    // One target already on disk, one that will 404.
    std::fs::write(dir.path().join("beach_2k.exr"), b"exr").unwrap();
    let names = vec!["beach".to_string(), "forest".to_string()];

    let mut statuses = Vec::new();
    let outcome = run_batch(
        &names,
        Resolution::K2,
        dir.path(),
        &template,
        quiet(),
        |_, name, status| statuses.push((name.to_string(), status)),
    );

    assert_eq!(outcome.total, 2);
    assert_eq!(outcome.downloaded, 0);
    assert_eq!(outcome.already_present, 1);
    assert_eq!(outcome.failed, 1);
    assert_eq!(statuses[0].1, ItemStatus::AlreadyPresent);
    assert_eq!(statuses[1].1, ItemStatus::Failed);
    assert!(!dir.path().join("forest_2k.exr").exists());
}
