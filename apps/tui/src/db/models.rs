use sqlx::FromRow;

/// A row of the key-value table
#[derive(Debug, FromRow, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub key: String,
    pub value: String,
    pub updated_at: String,
}
