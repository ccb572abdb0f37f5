// Chart module for roster_radar
// Pure radar geometry plus the drawing surfaces it can be emitted onto

pub mod color;
pub mod radar;
pub mod surface;
pub mod svg;

pub use color::Rgba;
pub use radar::{render_radar, RadarChart, RadarStyle};
pub use surface::{CommandBuffer, DrawCommand, DrawingSurface, Point, Size, TextAlign};
pub use svg::SvgSurface;
