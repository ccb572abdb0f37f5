use crate::config::AppConfig;
use color_eyre::Result;
use sqlx::{migrate::MigrateDatabase, query, sqlite::SqlitePoolOptions, Sqlite, SqlitePool};

/// Sets up the database by creating the necessary tables if they don't exist
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    query(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Creates a database connection pool for the configured database file
pub async fn create_database_pool(config: &AppConfig) -> Result<SqlitePool> {
    let database_url = &config.database_url;
    tracing::info!("Initializing database with URL: {database_url}");

    let db_path = extract_db_path_from_url(database_url)
        .map_err(|e| color_eyre::eyre::eyre!("Invalid database URL format: {e}"))?;
    tracing::debug!("Extracted database path: {db_path}");

    // Check if parent directory exists and is writable
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tracing::debug!("Creating parent directory: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                color_eyre::eyre::eyre!("Failed to create database directory: {e}")
            })?;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if parent.exists() {
                let metadata = parent.metadata().map_err(|e| {
                    color_eyre::eyre::eyre!("Failed to access directory metadata: {e}")
                })?;
                let mode = metadata.permissions().mode();
                tracing::debug!("Directory permissions: {mode:o}");
                if mode & 0o200 == 0 {
                    return Err(color_eyre::eyre::eyre!(
                        "Database directory is not writable"
                    ));
                }
            }
        }
    }

    // If database exists, check if it's readable/writable
    let db_file = std::path::Path::new(&db_path);
    if db_file.exists() {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open(db_file)
            .map_err(|e| color_eyre::eyre::eyre!("Database file permission error: {e}"))?;
    }

    let pool = create_database_pool_with_url(database_url)
        .await
        .map_err(|e| color_eyre::eyre::eyre!("Failed to open SQLite database: {e}"))?;

    tracing::info!("Database initialization completed successfully");
    Ok(pool)
}

/// Helper function to extract the database path from a SQLite URL
fn extract_db_path_from_url(url: &str) -> Result<String, color_eyre::eyre::Error> {
    if !url.starts_with("sqlite://") {
        return Err(color_eyre::eyre::eyre!("Not a valid SQLite URL: {url}"));
    }

    let path_part = url.trim_start_matches("sqlite://");

    if cfg!(windows) {
        // Windows: sqlite:///C:/path or sqlite://C:/path
        if let Some(drive_idx) = path_part.find(':') {
            if drive_idx > 0 {
                let path = path_part
                    .strip_prefix('/')
                    .map_or_else(|| path_part.to_string(), std::string::ToString::to_string);

                return Ok(path);
            }
        }
    }

    // Unix-like absolute path: sqlite:///path
    if path_part.starts_with('/') {
        return Ok(format!("/{}", path_part.trim_start_matches('/')));
    }

    // Relative path: sqlite://path
    Ok(path_part.to_string())
}

/// Creates a database connection pool with a specified URL
pub async fn create_database_pool_with_url(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");

    if !in_memory && !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        tracing::info!("Database does not exist, creating it now");
        Sqlite::create_database(database_url).await?;
    }

    // An in-memory database lives only as long as its single connection.
    let max_connections = if in_memory { 1 } else { 5 };

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                conn.execute("PRAGMA journal_mode = WAL;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await?;

    setup_database(&pool).await?;

    Ok(pool)
}
