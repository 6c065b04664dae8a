//! Single-file streaming HTTP downloader.
//!
//! Strictly sequential: one transfer at a time, no ranges, no retries. A
//! failed transfer is a per-file condition the batch reports and moves past.

mod progress;
mod single;

pub use progress::human_bytes;
pub use single::{download_file, DownloadError, DownloadOptions};
