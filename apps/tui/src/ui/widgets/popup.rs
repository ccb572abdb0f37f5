use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Buffer;
use ratatui::widgets::Widget;

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    centered_columns(percent_x, popup_layout[1])
}

/// Popup of a fixed number of rows, clipped to `area`
pub fn centered_rows(percent_x: u16, rows: u16, area: Rect) -> Rect {
    let rows = rows.min(area.height);
    let band = Rect {
        x: area.x,
        y: area.y + (area.height - rows) / 2,
        width: area.width,
        height: rows,
    };

    centered_columns(percent_x, band)
}

fn centered_columns(percent_x: u16, band: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(band)[1]
}

pub struct ClearWidget;

impl Widget for ClearWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        ratatui::widgets::Clear.render(area, buf);
    }
}
