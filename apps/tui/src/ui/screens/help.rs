use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use roster_radar::cli::CliArgs;

const SHORTCUTS: [(&str, &str); 13] = [
    ("↑/↓", "Move through the player list"),
    ("Enter", "Show the radar charts of the highlighted player"),
    ("a", "Add a player"),
    ("e", "Edit the highlighted player"),
    ("d", "Delete the highlighted player"),
    ("f", "Cycle the position filter"),
    ("/", "Search players by name"),
    ("i", "Import players from a JSON file"),
    ("x", "Export the roster to players-<date>.json"),
    ("←/→ 1-5", "Rate the focused skill in the player form"),
    ("Esc", "Cancel the current form or prompt"),
    ("F1", "Toggle this help screen"),
    ("q", "Quit application"),
];

pub fn render_help_popup(f: &mut Frame<'_>, area: Rect) {
    let popup_area = centered_rect(80, 80, area);
    f.render_widget(ClearWidget, popup_area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let help_paragraph = Paragraph::new(Text::from(build_help_lines()))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, popup_area);

    let hint = Paragraph::new(TextLine::from(Span::styled(
        "Press F1 or Esc to close",
        Style::default().fg(Color::Gray),
    )))
    .alignment(Alignment::Center);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(2),
        width: popup_area.width,
        height: 1,
    };

    f.render_widget(hint, hint_area);
}

fn build_help_lines() -> Vec<TextLine<'static>> {
    let mut lines = vec![
        TextLine::from(Span::styled(
            "Stat Tracker",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Rate players on five mental and five technical skills and compare them on radar charts.",
        ),
        TextLine::from(
            "Dropping a JSON file onto the terminal merges its players into the roster by name.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    lines.extend(SHORTCUTS.iter().map(|(key, description)| {
        TextLine::from(vec![
            Span::styled(
                format!("  {key:<8}"),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" - {description}")),
        ])
    }));

    lines.push(TextLine::from(""));
    lines.push(TextLine::from(Span::styled(
        "Command Line:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(
        CliArgs::help_text()
            .lines()
            .map(|line| TextLine::from(format!("  {line}"))),
    );

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_shortcuts_and_flags() {
        let text: Vec<String> = build_help_lines().iter().map(ToString::to_string).collect();

        assert!(text.iter().any(|line| line.contains("Toggle this help screen")));
        assert!(text.iter().any(|line| line.contains("Command Line:")));
        assert!(text.iter().any(|line| line.contains("--svg-dir")));
    }
}
