use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod edit_player;
mod help;
mod import;
mod roster;

pub async fn dispatch_input(app: &mut App, key: KeyCode) -> color_eyre::Result<()> {
    if help::handle_help_toggle(app, key) {
        return Ok(());
    }

    match app.screen {
        AppScreen::Roster => roster::handle_roster_input(app, key).await?,
        AppScreen::EditPlayer => edit_player::handle_edit_player_input(app, key).await?,
        AppScreen::ImportPrompt => import::handle_import_input(app, key).await,
    }

    Ok(())
}
