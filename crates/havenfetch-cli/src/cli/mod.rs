//! CLI for the havenfetch HDRI downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use havenfetch_core::catalog::Catalog;
use havenfetch_core::config;
use havenfetch_core::resolution::Resolution;
use std::path::PathBuf;

use commands::{run_fetch, run_scan};

/// Top-level CLI for the havenfetch HDRI downloader.
#[derive(Debug, Parser)]
#[command(name = "havenfetch")]
#[command(about = "havenfetch: Poly Haven HDRI catalog builder and batch downloader", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Scan a directory of image files and record asset names in the catalog.
    Scan {
        /// Directory to scan (overrides `source_dir` from config.toml).
        #[arg(long, value_name = "DIR")]
        source_dir: Option<PathBuf>,
    },

    /// Download every cataloged asset at a chosen resolution tier.
    Fetch {
        /// Resolution tier (1k, 2k, 4k, 8k, 16k). Prompts interactively when omitted.
        #[arg(long, short, value_name = "TIER")]
        resolution: Option<Resolution>,

        /// Skip the confirmation prompt when some target files already exist.
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let catalog = match &cfg.catalog_path {
            Some(path) => Catalog::open_at(path).await?,
            None => Catalog::open_default().await?,
        };

        match cli.command {
            CliCommand::Scan { source_dir } => {
                run_scan(&catalog, &cfg, source_dir.as_deref()).await?
            }
            CliCommand::Fetch { resolution, yes } => {
                run_fetch(&catalog, &cfg, resolution, yes).await?
            }
        }

        Ok(())
    }
}
