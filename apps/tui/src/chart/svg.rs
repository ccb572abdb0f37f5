// SVG serialization of radar charts for headless export

use std::fmt::Write as _;

use crate::chart::surface::{DrawCommand, DrawingSurface, Point, Size, TextAlign};

const FONT_FAMILY: &str = "Arial, sans-serif";

/// Surface that accumulates SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    /// Complete standalone SVG document.
    pub fn finish(&self) -> String {
        let Size { width, height } = self.size;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{}</svg>\n",
            self.body
        )
    }
}

impl DrawingSurface for SvgSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        // Writing into a String cannot fail.
        let _ = match command {
            DrawCommand::Clear => {
                self.body.clear();
                Ok(())
            }
            DrawCommand::Polygon {
                points,
                fill,
                stroke,
                line_width,
            } => writeln!(
                self.body,
                "  <polygon points=\"{}\" fill=\"{}\" stroke=\"{stroke}\" stroke-width=\"{line_width}\"/>",
                format_points(&points),
                fill.map_or_else(|| "none".to_string(), |fill| fill.to_css()),
            ),
            DrawCommand::Line {
                from,
                to,
                stroke,
                line_width,
            } => writeln!(
                self.body,
                "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"{line_width}\"/>",
                fmt_coord(from.x),
                fmt_coord(from.y),
                fmt_coord(to.x),
                fmt_coord(to.y),
            ),
            DrawCommand::Circle {
                center,
                radius,
                fill,
            } => writeln!(
                self.body,
                "  <circle cx=\"{}\" cy=\"{}\" r=\"{radius}\" fill=\"{fill}\"/>",
                fmt_coord(center.x),
                fmt_coord(center.y),
            ),
            DrawCommand::Text {
                anchor,
                text,
                font_size,
                color,
                align,
            } => {
                let text_anchor = match align {
                    TextAlign::Center => "middle",
                    TextAlign::Right => "end",
                };
                writeln!(
                    self.body,
                    "  <text x=\"{}\" y=\"{}\" fill=\"{color}\" font-size=\"{font_size}\" font-family=\"{FONT_FAMILY}\" text-anchor=\"{text_anchor}\" dominant-baseline=\"middle\">{}</text>",
                    fmt_coord(anchor.x),
                    fmt_coord(anchor.y),
                    escape_text(&text),
                )
            }
        };
    }
}

fn fmt_coord(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    // Avoid "-0" in the output.
    if rounded == 0.0 {
        "0".to_string()
    } else {
        rounded.to_string()
    }
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|point| format!("{},{}", fmt_coord(point.x), fmt_coord(point.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
