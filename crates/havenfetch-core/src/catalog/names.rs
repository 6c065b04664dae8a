//! Name read/write operations on the catalog.

use anyhow::Result;
use sqlx::Row;

use super::db::Catalog;
use super::types::InsertOutcome;

impl Catalog {
    /// Insert an asset name. A uniqueness violation maps to
    /// [`InsertOutcome::AlreadyExists`]; any other database failure
    /// propagates as an error.
    ///
    /// Each insert is committed as it executes, so names recorded before a
    /// mid-scan crash stay recorded.
    pub async fn insert_name(&self, name: &str) -> Result<InsertOutcome> {
        let result = sqlx::query("INSERT INTO hdri_images (name) VALUES (?1)")
            .bind(name)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Ok(InsertOutcome::AlreadyExists)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All catalog names in alphabetical order.
    pub async fn list_names(&self) -> Result<Vec<String>> {
        let rows = sqlx::query("SELECT name FROM hdri_images ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .map(|row| row.get::<String, _>("name"))
            .collect())
    }
}
