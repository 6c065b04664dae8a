//! Streaming GET of one file to disk.

use std::cell::RefCell;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str;
use std::time::Duration;

use thiserror::Error;

use super::progress::ProgressLine;
use crate::url_model;

/// Per-file download failure. Recoverable: callers report it and continue
/// with the next file.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("GET {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u32 },
    #[error("transfer failed: {0}")]
    Transfer(#[from] curl::Error),
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Tuning knobs for a single transfer.
#[derive(Debug, Clone, Copy)]
pub struct DownloadOptions {
    /// Streaming chunk size in bytes (bounds the write-callback chunk).
    pub chunk_size_bytes: usize,
    /// Print a live progress line while streaming.
    pub show_progress: bool,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            chunk_size_bytes: 8192,
            show_progress: true,
        }
    }
}

/// Downloads `url` to `dest` with one streaming GET.
///
/// When `dest` is `None` the filename is derived from the URL's final path
/// segment (query stripped) under the current working directory. The
/// destination's parent directory is created if missing. Returns the
/// resolved destination path.
///
/// Any failure removes the partial file so a later run does not mistake it
/// for a finished download.
pub fn download_file(
    url: &str,
    dest: Option<&Path>,
    opts: DownloadOptions,
) -> Result<PathBuf, DownloadError> {
    let dest: PathBuf = match dest {
        Some(p) => p.to_path_buf(),
        None => std::env::current_dir()?.join(url_model::derive_filename(url)),
    };
    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let label = dest
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| url.to_string());

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    // HTTP >= 400 fails the transfer before any body is written to disk.
    easy.fail_on_error(true)?;
    easy.buffer_size(opts.chunk_size_bytes)?;
    easy.connect_timeout(Duration::from_secs(30))?;
    easy.low_speed_limit(1024)?;
    easy.low_speed_time(Duration::from_secs(60))?;

    let file = fs::File::create(&dest)?;

    // Shared between the header and write callbacks inside the transfer scope.
    let progress = RefCell::new(ProgressLine::new(&label));
    let writer = RefCell::new(file);
    let write_error: RefCell<Option<std::io::Error>> = RefCell::new(None);

    let performed = {
        let mut transfer = easy.transfer();
        transfer.header_function(|line| {
            if let Some(len) = parse_content_length(line) {
                progress.borrow_mut().set_total(len);
            }
            true
        })?;
        transfer.write_function(|data| {
            if data.is_empty() {
                // Zero-length keep-alive chunk; nothing to write.
                return Ok(0);
            }
            match writer.borrow_mut().write_all(data) {
                Ok(()) => {
                    if opts.show_progress {
                        progress.borrow_mut().add(data.len() as u64);
                    }
                    Ok(data.len())
                }
                Err(e) => {
                    *write_error.borrow_mut() = Some(e);
                    Ok(0) // abort the transfer
                }
            }
        })?;
        transfer.perform()
    };

    if let Some(e) = write_error.into_inner() {
        let _ = fs::remove_file(&dest);
        return Err(DownloadError::Io(e));
    }
    if let Err(e) = performed {
        let _ = fs::remove_file(&dest);
        if e.is_http_returned_error() {
            let status = easy.response_code().unwrap_or(0);
            return Err(DownloadError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }
        return Err(DownloadError::Transfer(e));
    }

    let status = easy.response_code()?;
    if !(200..300).contains(&status) {
        let _ = fs::remove_file(&dest);
        return Err(DownloadError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    if opts.show_progress {
        progress.into_inner().finish();
    }
    tracing::debug!("downloaded {} to {}", url, dest.display());
    Ok(dest)
}

/// Parses a `Content-Length` header line as curl hands it to the header
/// callback. Redirect hops overwrite earlier values, so the final response
/// wins.
fn parse_content_length(line: &[u8]) -> Option<u64> {
    let line = str::from_utf8(line).ok()?;
    let (name, value) = line.split_once(':')?;
    if !name.trim().eq_ignore_ascii_case("content-length") {
        return None;
    }
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_length_parsed() {
        assert_eq!(
            parse_content_length(b"Content-Length: 12345\r\n"),
            Some(12345)
        );
        assert_eq!(parse_content_length(b"content-length:7"), Some(7));
    }

    #[test]
    fn other_headers_ignored() {
        assert_eq!(parse_content_length(b"Content-Type: image/x-exr\r\n"), None);
        assert_eq!(parse_content_length(b"HTTP/1.1 200 OK\r\n"), None);
        assert_eq!(parse_content_length(b"Content-Length: nope\r\n"), None);
    }
}
