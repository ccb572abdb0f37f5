pub mod edit_player;
pub mod help;
pub mod import;
pub mod roster;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

/// Key hint: highlighted key followed by its description
pub fn key_hint(key: &'static str, description: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(
            key,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description),
    ]
}
