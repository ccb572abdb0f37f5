use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub async fn handle_roster_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    if app.search_active {
        handle_search_input(app, key);
        return Ok(());
    }

    match key {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Up | KeyCode::Char('k') => app.move_cursor(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_cursor(1),
        KeyCode::PageUp => app.move_cursor(-10),
        KeyCode::PageDown => app.move_cursor(10),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor(),
        KeyCode::Char('a') => app.begin_add(),
        KeyCode::Char('e') => app.begin_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_cursor().await?,
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('/') => {
            app.search_active = true;
        }
        KeyCode::Char('i') => {
            app.import_input.clear();
            app.screen = AppScreen::ImportPrompt;
        }
        KeyCode::Char('x') => {
            let path = app.export().await?;
            app.status_message = format!("Exported {}", path.display());
        }
        _ => {}
    }

    Ok(())
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.search_active = false,
        KeyCode::Up => app.move_cursor(-1),
        KeyCode::Down => app.move_cursor(1),
        KeyCode::Backspace => {
            app.search_query.pop();
            app.apply_search_filter();
        }
        KeyCode::Char(ch) => {
            app.search_query.push(ch);
            app.apply_search_filter();
        }
        _ => {}
    }
}
