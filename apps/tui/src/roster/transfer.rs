use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use thiserror::Error;

use crate::domain::PlayerRecord;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Error reading the JSON file. Please ensure the format is correct.")]
    Malformed(#[source] serde_json::Error),
    #[error("Not a valid JSON format for players.")]
    NotAnArray,
    #[error("Invalid player at position {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
    #[error("Please drop a valid JSON file")]
    NotJsonFile(PathBuf),
    #[error("Could not read {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse an import payload. Only a top-level JSON array of players is
/// accepted; entries must carry a non-blank name.
pub fn parse_import(payload: &str) -> Result<Vec<PlayerRecord>, ImportError> {
    let value: Value = serde_json::from_str(payload).map_err(ImportError::Malformed)?;
    let Value::Array(entries) = value else {
        return Err(ImportError::NotAnArray);
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let record: PlayerRecord =
                serde_json::from_value(entry).map_err(|e| ImportError::InvalidEntry {
                    index,
                    reason: e.to_string(),
                })?;
            if record.name.trim().is_empty() {
                return Err(ImportError::InvalidEntry {
                    index,
                    reason: "missing player name".to_string(),
                });
            }
            Ok(record)
        })
        .collect()
}

/// Reject paths that do not look like JSON documents.
pub fn ensure_json_path(path: &Path) -> Result<(), ImportError> {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        Ok(())
    } else {
        Err(ImportError::NotJsonFile(path.to_path_buf()))
    }
}

/// Roster as pretty-printed JSON (two-space indent).
pub fn export_json(roster: &[PlayerRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(roster)
}

pub fn export_file_name(date: NaiveDate) -> String {
    format!("players-{}.json", date.format("%Y-%m-%d"))
}
