pub mod migrations;
pub mod models;
pub mod queries;

use thiserror::Error;

pub use migrations::{create_database_pool, create_database_pool_with_url};
pub use queries::{backup_roster, load_roster, save_roster};

/// Logical key the roster lives under in the key-value table.
pub const ROSTER_KEY: &str = "players";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("stored roster is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}
