// UI module for roster_radar
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::roster::render_roster(app, f);

    match app.screen {
        AppScreen::Roster => {}
        AppScreen::EditPlayer => screens::edit_player::render_edit_player(app, f),
        AppScreen::ImportPrompt => screens::import::render_import_prompt(app, f),
    }

    if app.show_help {
        let area = f.area();
        screens::help::render_help_popup(f, area);
    }
}
