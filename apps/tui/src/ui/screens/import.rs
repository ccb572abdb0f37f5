use crate::app::App;
use crate::ui::screens::key_hint;
use crate::ui::widgets::popup::{centered_rows, ClearWidget};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_import_prompt(app: &App, f: &mut Frame<'_>) {
    let popup_area = centered_rows(70, 7, f.area());
    f.render_widget(ClearWidget, popup_area);

    let block = Block::default()
        .title("Import Players")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup_area);
    f.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Path of a JSON file to merge (or drop the file here):")
            .style(Style::default().fg(Color::Gray)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(TextLine::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("{}_", app.import_input)),
        ])),
        chunks[1],
    );

    let hints: Vec<Span<'static>> = [("Enter", ": Import   "), ("Esc", ": Cancel")]
        .iter()
        .flat_map(|(key, description)| key_hint(*key, *description))
        .collect();
    f.render_widget(Paragraph::new(TextLine::from(hints)), chunks[3]);
}
