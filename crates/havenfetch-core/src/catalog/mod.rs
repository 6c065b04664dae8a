//! Persistent asset-name catalog (SQLite via sqlx).
//!
//! One table, `hdri_images(id, name UNIQUE)`. Names are inserted by the
//! scanner and read by the batch downloader; rows are never updated or
//! deleted.

pub mod db;
pub mod names;
pub mod types;

pub use db::Catalog;
pub use types::InsertOutcome;
