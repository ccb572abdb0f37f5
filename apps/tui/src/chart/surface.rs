use crate::chart::color::Rgba;

/// A position in surface coordinates: origin top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `angle` (radians).
    pub fn polar(self, radius: f64, angle: f64) -> Self {
        Self::new(
            radius.mul_add(angle.cos(), self.x),
            radius.mul_add(angle.sin(), self.y),
        )
    }

    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn square(side: f64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn center(self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Horizontal anchoring of a text label. Labels are always vertically
/// centred on their anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Polygon {
        points: Vec<Point>,
        fill: Option<Rgba>,
        stroke: Rgba,
        line_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Rgba,
        line_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Rgba,
    },
    Text {
        anchor: Point,
        text: String,
        font_size: f64,
        color: Rgba,
        align: TextAlign,
    },
}

/// Anything a chart can be drawn onto.
pub trait DrawingSurface {
    /// Logical size of the surface in pixels.
    fn size(&self) -> Size;

    fn draw(&mut self, command: DrawCommand);
}

/// Surface that records every command it receives.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandBuffer {
    size: Size,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub const fn new(size: Size) -> Self {
        Self {
            size,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl DrawingSurface for CommandBuffer {
    fn size(&self) -> Size {
        self.size
    }

    fn draw(&mut self, command: DrawCommand) {
        if command == DrawCommand::Clear {
            self.commands.clear();
        }
        self.commands.push(command);
    }
}
