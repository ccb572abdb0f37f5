use sqlx::{query, query_as, SqlitePool};

use crate::db::models::StoredEntry;
use crate::db::{StoreError, ROSTER_KEY};
use crate::domain::PlayerRecord;

/// Retrieves a raw entry from the key-value table
pub async fn get_entry(pool: &SqlitePool, key: &str) -> Result<Option<StoredEntry>, sqlx::Error> {
    query_as::<_, StoredEntry>("SELECT key, value, updated_at FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
}

/// Inserts or replaces the value stored under `key`
pub async fn put_entry(pool: &SqlitePool, key: &str, value: &str) -> Result<(), sqlx::Error> {
    let updated_at = chrono::Utc::now().to_rfc3339();

    query(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?, ?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )
    .bind(key)
    .bind(value)
    .bind(updated_at)
    .execute(pool)
    .await?;

    Ok(())
}

/// Loads the persisted roster; an absent key is an empty roster
pub async fn load_roster(pool: &SqlitePool) -> Result<Vec<PlayerRecord>, StoreError> {
    let Some(entry) = get_entry(pool, ROSTER_KEY).await? else {
        return Ok(Vec::new());
    };

    let roster = serde_json::from_str(&entry.value)?;
    Ok(roster)
}

/// Replaces the persisted roster with `roster`
pub async fn save_roster(pool: &SqlitePool, roster: &[PlayerRecord]) -> Result<(), StoreError> {
    let value = serde_json::to_string(roster)?;
    put_entry(pool, ROSTER_KEY, &value).await?;
    tracing::debug!(players = roster.len(), "Roster saved");
    Ok(())
}

/// Copies the stored roster value, as is, to `players.corrupt.<timestamp>`.
/// Returns the backup key, or `None` when nothing is stored.
pub async fn backup_roster(pool: &SqlitePool) -> Result<Option<String>, sqlx::Error> {
    let Some(entry) = get_entry(pool, ROSTER_KEY).await? else {
        return Ok(None);
    };

    let key = format!(
        "{ROSTER_KEY}.corrupt.{}",
        chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ")
    );
    put_entry(pool, &key, &entry.value).await?;
    tracing::warn!(backup = %key, "Unreadable roster backed up");
    Ok(Some(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_database_pool_with_url;
    use crate::domain::Position;

    async fn memory_pool() -> SqlitePool {
        create_database_pool_with_url("sqlite::memory:").await.unwrap()
    }

    #[tokio::test]
    async fn missing_roster_loads_empty() {
        let pool = memory_pool().await;
        assert!(load_roster(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saved_roster_is_replaced_wholesale() {
        let pool = memory_pool().await;
        let first = vec![
            PlayerRecord::uniform("Sam", Position::Cb, 3),
            PlayerRecord::uniform("Robin", Position::St, 4),
        ];
        save_roster(&pool, &first).await.unwrap();
        assert_eq!(load_roster(&pool).await.unwrap(), first);

        let second = vec![PlayerRecord::uniform("Kim", Position::Gk, 5)];
        save_roster(&pool, &second).await.unwrap();
        assert_eq!(load_roster(&pool).await.unwrap(), second);

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kv_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn corrupt_value_is_reported() {
        let pool = memory_pool().await;
        put_entry(&pool, ROSTER_KEY, "{not json").await.unwrap();

        let error = load_roster(&pool).await.unwrap_err();
        assert!(matches!(error, StoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn backup_keeps_the_raw_value() {
        let pool = memory_pool().await;
        assert_eq!(backup_roster(&pool).await.unwrap(), None);

        put_entry(&pool, ROSTER_KEY, "{not json").await.unwrap();
        let key = backup_roster(&pool).await.unwrap().unwrap();

        assert!(key.starts_with("players.corrupt."));
        let backup = get_entry(&pool, &key).await.unwrap().unwrap();
        assert_eq!(backup.value, "{not json");
    }
}
