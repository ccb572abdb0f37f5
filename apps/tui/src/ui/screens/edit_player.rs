use crate::app::state::{FormField, PlayerForm};
use crate::app::App;
use crate::ui::screens::key_hint;
use crate::ui::widgets::popup::{centered_rows, ClearWidget};
use crate::ui::widgets::radar::{for_dark_background, position_color};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use roster_radar::domain::{Attribute, AttributeGroup, MAX_RATING};

const LABEL_WIDTH: usize = 16;

pub fn render_edit_player(app: &App, f: &mut Frame<'_>) {
    let Some(form) = &app.form else {
        return;
    };

    let popup_area = centered_rows(60, 22, f.area());
    f.render_widget(ClearWidget, popup_area);

    let title = form
        .editing
        .as_ref()
        .map_or_else(|| "Add Player".to_string(), |name| format!("Edit Player: {name}"));
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let paragraph = Paragraph::new(Text::from(build_form_lines(form))).block(block);
    f.render_widget(paragraph, popup_area);
}

fn field_label(label: &str, focused: bool) -> Span<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Span::styled(format!("{marker}{label:<width$}", width = LABEL_WIDTH), style)
}

fn error_span(message: String) -> Span<'static> {
    Span::styled(format!("  {message}"), Style::default().fg(Color::Red))
}

/// Five dots, the first `rating` of them filled
fn rating_dots(rating: u8) -> String {
    (1..=MAX_RATING)
        .map(|step| if step <= rating { '●' } else { '○' })
        .collect()
}

fn build_form_lines(form: &PlayerForm) -> Vec<TextLine<'static>> {
    let mut name_line = vec![
        field_label("Name", form.field == FormField::Name),
        Span::raw(form.draft.name.clone()),
    ];
    if form.field == FormField::Name {
        name_line.push(Span::raw("_"));
    }
    if let Some(error) = form.errors.name {
        name_line.push(error_span(error.to_string()));
    }

    let position = form.draft.position;
    let mut lines = vec![
        TextLine::from(name_line),
        TextLine::from(vec![
            field_label("Position", form.field == FormField::Position),
            Span::styled(
                format!("◀ {} ({}) ▶", position.as_str(), position.label()),
                Style::default().fg(position_color(position)),
            ),
        ]),
    ];

    for group in AttributeGroup::ALL {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            group.title(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        lines.extend(group.attributes().into_iter().map(|attribute| rating_line(form, attribute)));
    }

    lines.push(TextLine::from(""));
    if let Some(message) = form.errors.general_message() {
        lines.push(TextLine::from(error_span(message.to_string())));
    } else {
        lines.push(TextLine::from(""));
    }

    let hints: Vec<Span<'static>> = [
        ("↑/↓", ": Field   "),
        ("←/→ 1-5", ": Rate   "),
        ("Enter", ": Save   "),
        ("Esc", ": Cancel"),
    ]
    .iter()
    .flat_map(|(key, description)| key_hint(*key, *description))
    .collect();
    lines.push(TextLine::from(hints));

    lines
}

fn rating_line(form: &PlayerForm, attribute: Attribute) -> TextLine<'static> {
    let rating = attribute.get(&form.draft);
    let focused = form.field == FormField::Rating(attribute);

    let mut spans = vec![
        field_label(attribute.label(), focused),
        Span::styled(
            rating_dots(rating),
            Style::default().fg(for_dark_background(attribute.group().stroke())),
        ),
    ];
    if rating > 0 {
        spans.push(Span::raw(format!(" {rating}")));
    }
    if form.errors.unrated.contains(&attribute) {
        spans.push(error_span("Rating required".to_string()));
    }

    TextLine::from(spans)
}
