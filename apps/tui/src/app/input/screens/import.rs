use crate::app::input::helpers::dropped_path;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub async fn handle_import_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => {
            app.import_input.clear();
            app.screen = AppScreen::Roster;
        }
        KeyCode::Enter => {
            let Some(path) = dropped_path(&app.import_input) else {
                app.status_message = "Enter the path of a JSON file".to_string();
                return;
            };
            app.import_and_report(&path).await;
            app.import_input.clear();
            app.screen = AppScreen::Roster;
        }
        KeyCode::Backspace => {
            app.import_input.pop();
        }
        KeyCode::Char(ch) => app.import_input.push(ch),
        _ => {}
    }
}
