//! `havenfetch fetch` – batch-download cataloged assets at one resolution.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use havenfetch_core::batch::{self, ItemStatus};
use havenfetch_core::catalog::Catalog;
use havenfetch_core::config::HavenConfig;
use havenfetch_core::downloader::DownloadOptions;
use havenfetch_core::resolution::{Resolution, DEFAULT_RESOLUTION};

/// How many pre-existing files to list before collapsing to a count.
const EXISTING_PREVIEW: usize = 5;

pub async fn run_fetch(
    catalog: &Catalog,
    cfg: &HavenConfig,
    resolution: Option<Resolution>,
    assume_yes: bool,
) -> Result<()> {
    let names = catalog.list_names().await?;
    if names.is_empty() {
        println!("The catalog is empty; run `havenfetch scan` first.");
        return Ok(());
    }

    let resolution = match resolution {
        Some(r) => r,
        None => prompt_resolution()?,
    };

    let download_dir = match &cfg.download_dir {
        Some(d) => d.clone(),
        None => std::env::current_dir().context("cannot resolve working directory")?,
    };

    let existing = batch::check_existing(&names, resolution, &download_dir);
    if !existing.is_empty() && !assume_yes {
        println!("Found {} file(s) already on disk:", existing.len());
        for file in existing.iter().take(EXISTING_PREVIEW) {
            println!("- {file}");
        }
        if existing.len() > EXISTING_PREVIEW {
            println!("...and {} more", existing.len() - EXISTING_PREVIEW);
        }
        if !confirm("Continue downloading the remaining files? (y/n): ")? {
            println!("Aborted; nothing downloaded.");
            return Ok(());
        }
    }

    println!("Downloading {} file(s) at {}...", names.len(), resolution);

    let opts = DownloadOptions {
        chunk_size_bytes: cfg.chunk_size_bytes,
        show_progress: true,
    };
    let template = cfg.url_template.clone();
    // The curl transfer is blocking; downloads stay strictly sequential on
    // one worker thread.
    let outcome = tokio::task::spawn_blocking(move || {
        batch::run_batch(
            &names,
            resolution,
            &download_dir,
            &template,
            opts,
            |i, name, status| {
                let label = match status {
                    ItemStatus::Downloaded => "downloaded",
                    ItemStatus::AlreadyPresent => "already present",
                    ItemStatus::Failed => "failed",
                };
                println!("{i}. {name} - {label}");
            },
        )
    })
    .await
    .context("download batch panicked")?;

    println!(
        "{} of {} file(s) downloaded",
        outcome.downloaded, outcome.total
    );
    Ok(())
}

/// Interactive resolution menu. Unrecognized input falls back to 4k, with a
/// notice so typos are visible.
fn prompt_resolution() -> Result<Resolution> {
    println!("Choose a resolution tier:");
    println!("1. 1k (smallest, lowest quality)");
    println!("2. 2k");
    println!("3. 4k");
    println!("4. 8k");
    println!("5. 16k (largest, highest quality)");

    let answer = read_line("Enter an option (1-5): ")?;
    Ok(match Resolution::from_menu_choice(&answer) {
        Some(r) => r,
        None => {
            println!(
                "Unrecognized choice '{}'; defaulting to {}",
                answer.trim(),
                DEFAULT_RESOLUTION
            );
            DEFAULT_RESOLUTION
        }
    })
}

/// `y` (any case) proceeds; anything else aborts.
fn confirm(prompt: &str) -> Result<bool> {
    let answer = read_line(prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn read_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("cannot read from stdin")?;
    Ok(line)
}
