use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::canvas::{Canvas, Circle, Context, Line as CanvasLine, Points};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use roster_radar::chart::radar::CANVAS_SIDE;
use roster_radar::chart::{
    render_radar, CommandBuffer, DrawCommand, Point, RadarStyle, Rgba, Size, TextAlign,
};
use roster_radar::domain::{AttributeGroup, PlayerRecord, Position};
use roster_radar::roster::format_score;

const PLACEHOLDER: &str = "Select a player to view their radar charts";

/// Terminal background the chart colors are composited over
const BACKGROUND: Rgba = Rgba::opaque(0, 0, 0);

/// Darkest gray still readable on the terminal background
const MIN_GRAY: u8 = 0x50;

pub fn position_color(position: Position) -> Color {
    to_color(position.color())
}

const fn to_color(color: Rgba) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Chart colors are chosen for a light page. Grays are inverted so the
/// grid and labels keep their contrast on a dark terminal, and translucent
/// fills are blended onto the background.
pub fn for_dark_background(color: Rgba) -> Color {
    let color = color.over(BACKGROUND);
    if color.r == color.g && color.g == color.b {
        return to_color(Rgba::gray((255 - color.r).max(MIN_GRAY)));
    }
    to_color(color)
}

/// Horizontal spans `(y, x_start, x_end)` covering the inside of `polygon`,
/// sampled every `step` units with the even-odd rule.
pub fn scanline_spans(polygon: &[Point], step: f64) -> Vec<(f64, f64, f64)> {
    if polygon.len() < 3 || step <= 0.0 {
        return Vec::new();
    }

    let min_y = polygon.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = polygon.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let mut spans = Vec::new();
    let mut y = min_y + step / 2.0;
    while y < max_y {
        let mut crossings: Vec<f64> = polygon
            .iter()
            .zip(polygon.iter().cycle().skip(1))
            .filter(|(a, b)| (a.y <= y && y < b.y) || (b.y <= y && y < a.y))
            .map(|(a, b)| (y - a.y).mul_add((b.x - a.x) / (b.y - a.y), a.x))
            .collect();
        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            spans.push((y, pair[0], pair[1]));
        }
        y += step;
    }

    spans
}

/// Left edge of `text` so that it lands aligned on `anchor_x`, given the
/// width of one terminal cell in canvas units
#[allow(clippy::cast_precision_loss)]
pub fn aligned_x(anchor_x: f64, text: &str, align: TextAlign, cell_width: f64) -> f64 {
    let width = text.chars().count() as f64 * cell_width;
    match align {
        TextAlign::Center => anchor_x - width / 2.0,
        TextAlign::Right => anchor_x - width,
    }
}

/// Both radar charts of `record`, side by side when there is room
pub fn render_player_charts(f: &mut Frame<'_>, area: Rect, record: Option<&PlayerRecord>) {
    let title = record.map_or_else(
        || "Player Ratings".to_string(),
        |record| {
            format!(
                "{} · {} · {}",
                record.name,
                record.position.label(),
                format_score(record)
            )
        },
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(record) = record else {
        let paragraph = Paragraph::new(PLACEHOLDER)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    };

    let direction = if inner.width >= inner.height.saturating_mul(4) {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (group, chunk) in AttributeGroup::ALL.into_iter().zip(chunks.iter()) {
        render_group_chart(f, *chunk, record, group);
    }
}

fn render_group_chart(f: &mut Frame<'_>, area: Rect, record: &PlayerRecord, group: AttributeGroup) {
    let block = Block::default()
        .title(group.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(to_color(group.stroke())));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if inner.width < 8 || inner.height < 4 {
        return;
    }

    // Cells are about twice as tall as wide
    let cols = inner.width.min(inner.height.saturating_mul(2));
    let rows = (cols / 2).max(1);
    let square = Rect {
        x: inner.x + (inner.width - cols) / 2,
        y: inner.y + (inner.height - rows) / 2,
        width: cols,
        height: rows,
    };

    let mut buffer = CommandBuffer::new(Size::square(CANVAS_SIDE));
    render_radar(Some(&mut buffer), record, group, RadarStyle::default());
    let commands = buffer.into_commands();

    let cell_width = CANVAS_SIDE / f64::from(square.width);
    // Braille markers give four dot rows per cell
    let fill_step = CANVAS_SIDE / (f64::from(square.height) * 4.0);

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for command in &commands {
                    paint_command(ctx, command, cell_width, fill_step);
                }
            })
            .x_bounds([0.0, CANVAS_SIDE])
            .y_bounds([0.0, CANVAS_SIDE]),
        square,
    );
}

/// Surface coordinates grow downwards, canvas coordinates upwards
fn flip(point: Point) -> (f64, f64) {
    (point.x, CANVAS_SIDE - point.y)
}

fn draw_segment(ctx: &mut Context<'_>, from: Point, to: Point, color: Color) {
    let (x1, y1) = flip(from);
    let (x2, y2) = flip(to);
    ctx.draw(&CanvasLine { x1, y1, x2, y2, color });
}

fn paint_command(ctx: &mut Context<'_>, command: &DrawCommand, cell_width: f64, fill_step: f64) {
    match command {
        DrawCommand::Clear => {}
        DrawCommand::Polygon {
            points,
            fill,
            stroke,
            ..
        } => {
            if let Some(fill) = fill {
                let color = for_dark_background(*fill);
                for (y, x1, x2) in scanline_spans(points, fill_step) {
                    draw_segment(ctx, Point::new(x1, y), Point::new(x2, y), color);
                }
                ctx.layer();
            }
            let color = for_dark_background(*stroke);
            for (from, to) in points.iter().zip(points.iter().cycle().skip(1)) {
                draw_segment(ctx, *from, *to, color);
            }
        }
        DrawCommand::Line { from, to, stroke, .. } => {
            draw_segment(ctx, *from, *to, for_dark_background(*stroke));
        }
        DrawCommand::Circle {
            center,
            radius,
            fill,
        } => {
            let (x, y) = flip(*center);
            let color = for_dark_background(*fill);
            ctx.draw(&Circle {
                x,
                y,
                radius: *radius,
                color,
            });
            ctx.draw(&Points {
                coords: &[(x, y)],
                color,
            });
        }
        DrawCommand::Text {
            anchor,
            text,
            color,
            align,
            ..
        } => {
            let (x, y) = flip(*anchor);
            let x = aligned_x(x, text, *align, cell_width).max(0.0);
            ctx.print(
                x,
                y,
                TextLine::styled(text.clone(), Style::default().fg(for_dark_background(*color))),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn square_fills_with_full_width_spans() {
        let square = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let spans = scanline_spans(&square, 5.0);

        assert_eq!(spans.len(), 2);
        assert_close(spans[0].0, 2.5);
        assert_close(spans[1].0, 7.5);
        for (_, x1, x2) in spans {
            assert_close(x1, 0.0);
            assert_close(x2, 10.0);
        }
    }

    #[test]
    fn triangle_spans_narrow_towards_the_apex() {
        let triangle = [
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(5.0, 0.0),
        ];
        let spans = scanline_spans(&triangle, 2.0);

        let widths: Vec<f64> = spans.iter().map(|(_, x1, x2)| x2 - x1).collect();
        assert_eq!(widths.len(), 5);
        assert!(widths.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn collapsed_polygon_has_no_spans() {
        let point = Point::new(175.0, 175.0);
        assert!(scanline_spans(&[point; 5], 1.0).is_empty());
        assert!(scanline_spans(&[point, point], 1.0).is_empty());
    }

    #[test]
    fn text_alignment_offsets_by_cell_width() {
        assert_close(aligned_x(100.0, "abcd", TextAlign::Center, 2.0), 96.0);
        assert_close(aligned_x(100.0, "abcd", TextAlign::Right, 2.0), 92.0);
    }

    #[test]
    fn grays_are_inverted_for_dark_terminals() {
        assert_eq!(for_dark_background(Rgba::gray(0x33)), Color::Rgb(0xcc, 0xcc, 0xcc));
        assert_eq!(for_dark_background(Rgba::gray(0xe0)), Color::Rgb(0x50, 0x50, 0x50));
        assert_eq!(
            for_dark_background(Rgba::opaque(79, 70, 229)),
            Color::Rgb(79, 70, 229)
        );
    }

    #[test]
    fn translucent_fill_is_blended_onto_black() {
        let Color::Rgb(r, g, b) = for_dark_background(AttributeGroup::Mental.fill()) else {
            panic!("expected an rgb color");
        };
        assert!(r < 79 && g < 70 && b < 229);
    }
}
