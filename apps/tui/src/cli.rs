use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "roster_radar", version, about = "Player roster ratings with radar charts")]
pub struct CliArgs {
    /// Print the roster summary and exit
    #[arg(long)]
    pub headless: bool,

    /// Print the headless roster as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override database path
    #[arg(long, value_name = "PATH")]
    pub db: Option<String>,

    /// Override export directory
    #[arg(long = "export-dir", value_name = "PATH")]
    pub export_dir: Option<String>,

    /// Override log file used by the interactive UI
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Merge players from a JSON file into the roster
    #[arg(long, value_name = "FILE")]
    pub import: Option<PathBuf>,

    /// Write the roster to players-<date>.json in the export directory
    #[arg(long)]
    pub export: bool,

    /// Write both radar charts of every player as SVG files into DIR
    #[arg(long = "svg-dir", value_name = "DIR")]
    pub svg_dir: Option<PathBuf>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(db) = &self.db {
            std::env::set_var("DATABASE_NAME", db);
        }
        if let Some(dir) = &self.export_dir {
            std::env::set_var("EXPORT_DIR", dir);
        }
        if let Some(file) = &self.log_file {
            std::env::set_var("LOG_FILE", file);
        }
    }

    /// Whether any one-shot batch operation was requested.
    pub const fn wants_batch(&self) -> bool {
        self.headless || self.json || self.export || self.import.is_some() || self.svg_dir.is_some()
    }

    pub fn help_text() -> String {
        let mut command = Self::command();
        let mut buffer = Vec::new();
        command.write_help(&mut buffer).ok();
        String::from_utf8_lossy(&buffer).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_flags_parse() {
        let args = CliArgs::parse_from([
            "roster_radar",
            "--import",
            "team.json",
            "--export",
            "--svg-dir",
            "charts",
            "--db",
            "other.db",
        ]);

        assert_eq!(args.import, Some(PathBuf::from("team.json")));
        assert!(args.export);
        assert_eq!(args.svg_dir, Some(PathBuf::from("charts")));
        assert_eq!(args.db.as_deref(), Some("other.db"));
        assert!(args.wants_batch());
    }

    #[test]
    fn no_flags_means_interactive() {
        let args = CliArgs::parse_from(["roster_radar"]);
        assert!(!args.wants_batch());
        assert!(!args.debug);
    }

    #[test]
    fn help_lists_flags() {
        let help = CliArgs::help_text();
        assert!(help.contains("--headless"));
        assert!(help.contains("--svg-dir"));
    }
}
