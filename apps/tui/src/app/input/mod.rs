pub mod helpers;
pub mod screens;

use crate::app::state::{App, AppScreen, FormField};
use crossterm::event::KeyCode;
use std::path::PathBuf;

pub use helpers::dropped_path;

pub async fn handle_input(app: &mut App, key: KeyCode) {
    if let Err(e) = screens::dispatch_input(app, key).await {
        tracing::error!("Input handling failed: {e}");
        app.status_message = format!("Error: {e}");
    }
}

/// Pasted text is typed into the focused field; on the roster screen a
/// pasted path is treated as a dropped file.
pub async fn handle_paste(app: &mut App, text: &str) {
    match app.screen {
        AppScreen::EditPlayer => {
            if let Some(form) = app.form.as_mut() {
                if form.field == FormField::Name {
                    for ch in text.chars().filter(|ch| !ch.is_control()) {
                        form.push_name_char(ch);
                    }
                }
            }
        }
        AppScreen::ImportPrompt => {
            app.import_input
                .extend(text.chars().filter(|ch| !ch.is_control()));
        }
        AppScreen::Roster => {
            if app.search_active {
                app.search_query
                    .extend(text.chars().filter(|ch| !ch.is_control()));
                app.apply_search_filter();
            } else if let Some(path) = dropped_path(text) {
                import_dropped(app, path).await;
            }
        }
    }
}

async fn import_dropped(app: &mut App, path: PathBuf) {
    tracing::debug!(path = %path.display(), "File dropped");
    app.import_and_report(&path).await;
}
