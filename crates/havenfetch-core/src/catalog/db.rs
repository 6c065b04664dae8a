//! SQLite-backed catalog: connection and migration. Name operations live in
//! `names`.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::path::Path;

/// Percent-encode a path for use in a sqlite:// URI so spaces and special
/// chars don't break parsing.
fn path_to_sqlite_uri(path: &Path) -> String {
    let s = path.to_string_lossy();
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '%' => out.push_str("%25"),
            ' ' => out.push_str("%20"),
            '#' => out.push_str("%23"),
            '?' => out.push_str("%3F"),
            '&' => out.push_str("%26"),
            c => out.push(c),
        }
    }
    format!("sqlite://{}?mode=rwc", out)
}

/// Handle to the SQLite-backed catalog.
///
/// The default database file lives under the XDG state directory:
/// `~/.local/state/havenfetch/catalog.db`. The pool holds a single
/// connection; the catalog is only ever used sequentially, and dropping the
/// handle releases it on every exit path.
#[derive(Clone)]
pub struct Catalog {
    pub(crate) pool: Pool<Sqlite>,
}

impl Catalog {
    /// Open (or create) the default catalog and run migrations.
    pub async fn open_default() -> Result<Self> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("havenfetch")?;
        let state_dir = xdg_dirs.get_state_home().join("havenfetch");
        let db_path = state_dir.join("catalog.db");

        tokio::fs::create_dir_all(&state_dir).await?;

        Self::connect(&db_path).await
    }

    /// Open (or create) the catalog at a specific path. Creates parent dirs
    /// if needed. Used when `catalog_path` is configured, and by tests.
    pub async fn open_at(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Self::connect(path).await
    }

    async fn connect(path: &Path) -> Result<Self> {
        let uri = path_to_sqlite_uri(path);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(&uri)
            .await?;
        let catalog = Catalog { pool };
        catalog.migrate().await?;
        Ok(catalog)
    }

    async fn migrate(&self) -> Result<()> {
        // Same schema the catalog has always had: an autoincrement id and a
        // unique asset name. No other tables.
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hdri_images (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT UNIQUE
            );
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[cfg(test)]
/// Open an in-memory catalog for tests (no disk I/O).
pub(crate) async fn open_memory() -> Result<Catalog> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let catalog = Catalog { pool };
    catalog.migrate().await?;
    Ok(catalog)
}
