use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default remote URL template. `{resolution}` is replaced with the tier
/// number (e.g. "4") and `{filename}` with the resolution-specific filename.
pub const DEFAULT_URL_TEMPLATE: &str =
    "https://dl.polyhaven.org/file/ph-assets/HDRIs/exr/{resolution}k/{filename}";

fn default_url_template() -> String {
    DEFAULT_URL_TEMPLATE.to_string()
}

fn default_image_extension() -> String {
    "png".to_string()
}

fn default_chunk_size() -> usize {
    8192
}

/// Global configuration loaded from `~/.config/havenfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HavenConfig {
    /// Directory scanned for image files by `scan` (the CLI flag overrides this).
    #[serde(default)]
    pub source_dir: Option<PathBuf>,
    /// Catalog database path. None = default under the XDG state dir.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Directory downloads are written to. None = current working directory.
    #[serde(default)]
    pub download_dir: Option<PathBuf>,
    /// Remote URL template with `{resolution}` and `{filename}` placeholders.
    #[serde(default = "default_url_template")]
    pub url_template: String,
    /// File extension (without the dot) matched by the scanner.
    #[serde(default = "default_image_extension")]
    pub image_extension: String,
    /// Streaming chunk size for downloads, in bytes.
    #[serde(default = "default_chunk_size")]
    pub chunk_size_bytes: usize,
}

impl Default for HavenConfig {
    fn default() -> Self {
        Self {
            source_dir: None,
            catalog_path: None,
            download_dir: None,
            url_template: default_url_template(),
            image_extension: default_image_extension(),
            chunk_size_bytes: default_chunk_size(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("havenfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HavenConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HavenConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: HavenConfig = toml::from_str(&data)?;
    Ok(cfg)
}
