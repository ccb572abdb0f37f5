use crate::app::App;
use crate::ui::screens::key_hint;
use crate::ui::widgets::radar::{position_color, render_player_charts};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use roster_radar::roster::format_score;

pub fn render_roster(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .split(area);

    render_header(app, f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[1]);

    render_player_table(app, f, body[0]);
    render_player_charts(f, body[1], app.selected_player());

    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Left);
    f.render_widget(status, chunks[2]);

    render_key_hints(app, f, chunks[3]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Stat Tracker",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("   {} players", app.roster.len())),
        Span::raw("   Position: "),
        Span::styled(
            app.position_filter.label(),
            Style::default().fg(Color::Yellow),
        ),
    ];

    if app.search_active || !app.search_query.is_empty() {
        spans.push(Span::raw("   Search: "));
        let cursor = if app.search_active { "_" } else { "" };
        spans.push(Span::styled(
            format!("{}{cursor}", app.search_query),
            Style::default().fg(Color::Yellow),
        ));
    }

    let header = Paragraph::new(TextLine::from(spans)).block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn render_player_table(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!("Players ({} shown)", app.visible.len()))
        .borders(Borders::ALL);

    if app.visible.is_empty() {
        let message = if app.roster.is_empty() {
            "No saved players. Add one!"
        } else {
            "No players match the current filter."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![Cell::from(" "), Cell::from("Name"), Cell::from("Pos"), Cell::from("Score")])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    // Borders and header row
    let max_visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.visible.len(), max_visible_rows, app.cursor_index);
    let selected_key = app.selected_key.as_deref();

    let rows = app
        .visible
        .iter()
        .enumerate()
        .skip(offset)
        .take(max_visible_rows)
        .filter_map(|(row, index)| app.roster.get(*index).map(|record| (row, record)))
        .map(|(row, record)| {
            let style = if row == app.cursor_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(position_color(record.position))
            };
            let marker = if selected_key == Some(record.key().as_str()) { "▶" } else { " " };

            Row::new(vec![
                Cell::from(marker),
                Cell::from(record.name.clone()),
                Cell::from(record.position.as_str()),
                Cell::from(format_score(record)),
            ])
            .style(style)
        });

    let widths = [
        Constraint::Length(1),
        Constraint::Min(10),
        Constraint::Length(4),
        Constraint::Length(6),
    ];

    let table = Table::new(rows, widths).header(header).block(block).column_spacing(1);
    f.render_widget(table, area);
}

fn render_key_hints(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hints: &[(&'static str, &'static str)] = if app.search_active {
        &[("Type", ": Search   "), ("Enter", ": Keep   "), ("Esc", ": Clear")]
    } else {
        &[
            ("↑/↓", ": Move   "),
            ("Enter", ": View   "),
            ("a", ": Add   "),
            ("e", ": Edit   "),
            ("d", ": Delete   "),
            ("f", ": Position   "),
            ("/", ": Search   "),
            ("i", ": Import   "),
            ("x", ": Export   "),
            ("F1", ": Help   "),
            ("q", ": Quit"),
        ]
    };

    let spans: Vec<Span<'static>> = hints
        .iter()
        .flat_map(|(key, description)| key_hint(*key, *description))
        .collect();

    let paragraph = Paragraph::new(TextLine::from(spans))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
