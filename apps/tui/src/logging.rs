use color_eyre::eyre::eyre;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    /// Headless runs log to stderr.
    Stderr,
    /// The interactive UI owns the terminal, so logs go to a file.
    File(&'a Path),
}

fn default_filter(debug: bool) -> EnvFilter {
    let level = if debug { "debug" } else { "info" };
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("roster_radar={level},sqlx=warn")))
}

/// Install the global tracing subscriber.
pub fn init_logging(target: LogTarget<'_>, debug: bool) -> color_eyre::eyre::Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(default_filter(debug));

    let result = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| eyre!("Failed to initialize logging: {e}"))
}
