mod app;
mod event;
mod terminal;
mod ui;

use app::actions::AppActions;
use app::App;
use clap::Parser;
use color_eyre::Result;
use roster_radar::cli::CliArgs;
use roster_radar::config::get_log_file;
use roster_radar::logging::{init_logging, LogTarget};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();

    let mut app = App::new(AppActions::new());

    // Batch flags, or no terminal on stdout, mean headless mode
    if args.wants_batch() || !is_terminal() {
        init_logging(LogTarget::Stderr, args.debug)?;
        return event::run_headless(&mut app, &args).await;
    }

    // The UI owns the screen, so logs go to a file
    let log_file = get_log_file();
    init_logging(LogTarget::File(&log_file), args.debug)?;

    if let Err(e) = app.initialize().await {
        tracing::error!("Error loading roster: {e}");
        app.status_message =
            format!("Error loading roster: {e}. The stored data is backed up before the next save");
    }

    let mut terminal = terminal::setup_terminal()?;

    let result = event::run(&mut terminal, &mut app).await;

    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
