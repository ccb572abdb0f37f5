use chrono::NaiveDate;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use roster_radar::chart::{render_radar, RadarStyle, Size, SvgSurface};
use roster_radar::chart::radar::CANVAS_SIDE;
use roster_radar::config::{get_export_dir, init_app_config, AppConfig};
use roster_radar::db::{backup_roster, create_database_pool, load_roster, save_roster};
use roster_radar::domain::{AttributeGroup, PlayerRecord};
use roster_radar::roster::transfer::ensure_json_path;
use roster_radar::roster::{export_file_name, export_json, parse_import, ImportError};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct AppActions {
    pub export_dir: PathBuf,
    pub db_pool: Option<SqlitePool>,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            export_dir: get_export_dir(),
            db_pool: None,
        }
    }

    pub async fn initialize(&mut self) -> Result<()> {
        let config = init_app_config()?;
        self.connect(&config).await
    }

    pub async fn connect(&mut self, config: &AppConfig) -> Result<()> {
        self.export_dir.clone_from(&config.export_dir);
        self.db_pool = Some(create_database_pool(config).await?);
        Ok(())
    }

    pub async fn load_roster(&self) -> Result<Vec<PlayerRecord>> {
        let pool = self.pool()?;
        load_roster(pool).await.map_err(Into::into)
    }

    pub async fn save_roster(&self, roster: &[PlayerRecord]) -> Result<()> {
        let pool = self.pool()?;
        save_roster(pool, roster).await.map_err(Into::into)
    }

    pub async fn backup_roster(&self) -> Result<Option<String>> {
        let pool = self.pool()?;
        backup_roster(pool).await.map_err(Into::into)
    }

    /// Read and parse a dropped or named JSON file
    pub async fn read_import(&self, path: &Path) -> Result<Vec<PlayerRecord>> {
        ensure_json_path(path)?;
        let payload = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ImportError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(parse_import(&payload)?)
    }

    /// Write `players-<date>.json` into the export directory
    pub async fn export_roster(&self, roster: &[PlayerRecord], date: NaiveDate) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir).await?;
        let path = self.export_dir.join(export_file_name(date));

        tokio::fs::write(&path, export_json(roster)?).await?;
        tracing::info!(players = roster.len(), path = %path.display(), "Roster exported");
        Ok(path)
    }

    fn pool(&self) -> Result<&SqlitePool> {
        self.db_pool
            .as_ref()
            .ok_or_else(|| eyre!("Database not initialized"))
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}

/// File-name friendly form of a player name
pub fn player_slug(name: &str) -> String {
    let mut slug = String::new();
    for ch in name.trim().chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "player".to_string()
    } else {
        slug
    }
}

/// Write `<slug>-mental.svg` and `<slug>-technical.svg` for every player
pub async fn write_svg_charts(roster: &[PlayerRecord], dir: &Path) -> Result<Vec<PathBuf>> {
    tokio::fs::create_dir_all(dir).await?;

    let mut written = Vec::with_capacity(roster.len() * AttributeGroup::ALL.len());
    for record in roster {
        let slug = player_slug(&record.name);
        for group in AttributeGroup::ALL {
            let mut surface = SvgSurface::new(Size::square(CANVAS_SIDE));
            render_radar(Some(&mut surface), record, group, RadarStyle::default());

            let path = dir.join(format!("{slug}-{}.svg", group.as_str()));
            tokio::fs::write(&path, surface.finish()).await?;
            tracing::debug!(path = %path.display(), "Chart written");
            written.push(path);
        }
    }

    Ok(written)
}
