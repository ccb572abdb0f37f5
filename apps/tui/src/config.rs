use color_eyre::eyre::eyre;
use dotenv::dotenv;
use std::env;
use std::path::{Path, PathBuf};

const DEFAULT_DATABASE_NAME: &str = "roster.db";
const DEFAULT_EXPORT_DIR: &str = ".";
const DEFAULT_LOG_FILE: &str = "roster_radar.log";

/// Runtime configuration resolved from the environment (and `.env`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub export_dir: PathBuf,
}

/// Initializes the application configuration
pub fn init_app_config() -> color_eyre::eyre::Result<AppConfig> {
    // Load environment variables from .env file
    dotenv().ok();

    let base_dir: PathBuf = env::current_dir()?;
    let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| DEFAULT_DATABASE_NAME.to_string());
    let database_path = base_dir.join(&db_name);

    if let Some(parent) = database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let database_url = database_url_for(&database_path)?;

    Ok(AppConfig {
        database_url,
        export_dir: get_export_dir(),
    })
}

/// Formats a SQLite URL for `path`.
///
/// Absolute paths need three slashes (`sqlite:///abs/file.db`), relative
/// paths two (`sqlite://rel/file.db`).
pub fn database_url_for(path: &Path) -> color_eyre::eyre::Result<String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| eyre!("Invalid database path"))?;

    // Strip any leading slashes from the path to avoid double slashes
    let clean_path = path_str.trim_start_matches('/');

    let url = if path.is_absolute() {
        tracing::debug!("Using absolute database path: {path_str}");
        format!("sqlite:///{clean_path}")
    } else {
        tracing::debug!("Using relative database path: {path_str}");
        format!("sqlite://{clean_path}")
    };
    Ok(url)
}

/// Gets the directory export files are written to
pub fn get_export_dir() -> PathBuf {
    env::var("EXPORT_DIR").map_or_else(|_| PathBuf::from(DEFAULT_EXPORT_DIR), PathBuf::from)
}

/// Gets the log file used while the terminal UI owns the screen
pub fn get_log_file() -> PathBuf {
    env::var("LOG_FILE").map_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn absolute_paths_get_three_slashes() {
        let url = database_url_for(Path::new("/var/lib/roster.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/roster.db");
    }

    #[test]
    fn relative_paths_get_two_slashes() {
        let url = database_url_for(Path::new("data/roster.db")).unwrap();
        assert_eq!(url, "sqlite://data/roster.db");
    }
}
