use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::actions::write_svg_charts;
use crate::app::{handle_input, handle_paste, App};
use crate::ui;
use roster_radar::cli::CliArgs;
use roster_radar::domain::Position;
use roster_radar::roster::{export_json, score};

/// Run the one-shot batch operations requested on the command line, then
/// print the roster, as export-format JSON with `--json` or as a summary
pub async fn run_headless(app: &mut App, args: &CliArgs) -> Result<()> {
    app.initialize().await?;

    if let Some(path) = &args.import {
        let outcome = app.import_from(path).await?;
        eprintln!("{}", outcome.summary());
    }

    if args.export {
        let path = app.export().await?;
        eprintln!("Exported roster to {}", path.display());
    }

    if let Some(dir) = &args.svg_dir {
        let written = write_svg_charts(&app.roster, dir).await?;
        eprintln!("Wrote {} chart(s) to {}", written.len(), dir.display());
    }

    if args.json {
        println!("{}", export_json(&app.roster)?);
    } else {
        render_headless_stats(&build_headless_stats(app));
    }

    Ok(())
}

fn render_headless_stats(stats: &HeadlessStats) {
    println!("\nPlayer Roster");
    println!("=============");
    println!("Total players: {}", stats.total_players);
    println!("Fully rated: {}", stats.complete_players);

    println!("\nPlayers by Position:");
    for (position, count) in &stats.by_position {
        println!("- {position}: {count}");
    }

    println!("\nPlayers:");
    for player in &stats.players {
        println!("- {} | {} | {}%", player.name, player.position, player.score);
    }
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let by_position = Position::ALL
        .iter()
        .map(|position| {
            let count = app
                .roster
                .iter()
                .filter(|record| record.position == *position)
                .count();
            (position.as_str().to_string(), count)
        })
        .collect();

    let players = app
        .roster
        .iter()
        .map(|record| HeadlessPlayer {
            name: record.name.clone(),
            position: record.position.as_str().to_string(),
            score: score(record),
        })
        .collect();

    HeadlessStats {
        total_players: app.roster.len(),
        complete_players: app.roster.iter().filter(|record| record.is_complete()).count(),
        by_position,
        players,
    }
}

struct HeadlessStats {
    total_players: usize,
    complete_players: usize,
    by_position: Vec<(String, usize)>,
    players: Vec<HeadlessPlayer>,
}

struct HeadlessPlayer {
    name: String,
    position: String,
    score: u32,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key.code).await;
                }
                Ok(Event::Paste(text)) => {
                    handle_paste(app, &text).await;
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {}
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::AppActions;
    use roster_radar::domain::PlayerRecord;
    use roster_radar::roster::parse_import;

    fn app_with(roster: Vec<PlayerRecord>) -> App {
        let mut app = App::new(AppActions::new());
        app.roster = roster;
        app.refresh_visible();
        app
    }

    #[test]
    fn json_output_is_the_importable_roster() {
        let app = app_with(vec![
            PlayerRecord::uniform("Sam", Position::Cb, 3),
            PlayerRecord::uniform("Robin", Position::St, 0),
        ]);

        let json = export_json(&app.roster).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert_eq!(parse_import(&json).unwrap(), app.roster);
    }

    #[test]
    fn summary_counts_positions_and_complete_players() {
        let app = app_with(vec![
            PlayerRecord::uniform("Sam", Position::Cb, 3),
            PlayerRecord::uniform("Robin", Position::St, 0),
        ]);

        let stats = build_headless_stats(&app);
        assert_eq!(stats.total_players, 2);
        assert_eq!(stats.complete_players, 1);
        assert!(stats.by_position.contains(&("CB".to_string(), 1)));
        assert_eq!(stats.players[0].score, 60);
    }
}
