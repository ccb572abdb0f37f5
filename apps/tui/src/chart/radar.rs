//! Five-axis radar chart geometry.
//!
//! Axis 0 points straight up and the remaining axes follow clockwise in
//! surface coordinates. Ratings are clamped to `0..=5` and scaled so that a
//! rating of 5 lands on the outer ring.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::chart::color::Rgba;
use crate::chart::surface::{DrawCommand, DrawingSurface, Point, Size, TextAlign};
use crate::domain::{AttributeGroup, PlayerRecord, MAX_RATING};

/// Number of axes (and grid rings) on every chart.
pub const AXES: usize = 5;

/// Side of the square canvas a chart is designed for.
pub const CANVAS_SIDE: f64 = 350.0;

const GRID_COLOR: Rgba = Rgba::gray(0xe0);
const SPOKE_COLOR: Rgba = Rgba::gray(0x99);
const LABEL_COLOR: Rgba = Rgba::gray(0x33);
const TICK_COLOR: Rgba = Rgba::gray(0x99);

/// Tunable sizes for a radar chart, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarStyle {
    pub radius: f64,
    pub label_offset: f64,
    pub marker_radius: f64,
    pub tick_offset: f64,
    pub label_font_size: f64,
    pub tick_font_size: f64,
}

impl Default for RadarStyle {
    fn default() -> Self {
        Self {
            radius: 100.0,
            label_offset: 30.0,
            marker_radius: 4.0,
            tick_offset: 10.0,
            label_font_size: 12.0,
            tick_font_size: 10.0,
        }
    }
}

impl RadarStyle {
    /// Radius a rating maps to. Out-of-range values are clamped.
    pub fn value_radius(&self, value: f64) -> f64 {
        let max = f64::from(MAX_RATING);
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, max) };
        self.radius / max * value
    }

    #[allow(clippy::cast_precision_loss)]
    fn ring_radius(&self, ring: usize) -> f64 {
        self.radius / AXES as f64 * ring as f64
    }
}

/// Angle of axis `index`, in radians.
#[allow(clippy::cast_precision_loss)]
pub fn axis_angle(index: usize) -> f64 {
    let angle_slice = TAU / AXES as f64;
    (index as f64).mul_add(angle_slice, -FRAC_PI_2)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub anchor: Point,
    pub text: String,
}

/// Fully laid out chart for one attribute group.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarChart {
    pub group: AttributeGroup,
    pub center: Point,
    pub style: RadarStyle,
    /// Concentric grid pentagons, innermost first.
    pub rings: Vec<[Point; AXES]>,
    /// Outer end of each spoke; spokes start at `center`.
    pub spokes: [Point; AXES],
    pub points: [Point; AXES],
    pub labels: [Label; AXES],
    pub ticks: Vec<Label>,
}

impl RadarChart {
    pub fn layout(values: [f64; AXES], group: AttributeGroup, size: Size, style: RadarStyle) -> Self {
        let center = size.center();

        let rings: Vec<[Point; AXES]> = (1..=AXES)
            .map(|ring| {
                let radius = style.ring_radius(ring);
                std::array::from_fn(|axis| center.polar(radius, axis_angle(axis)))
            })
            .collect();

        let spokes: [Point; AXES] = std::array::from_fn(|axis| center.polar(style.radius, axis_angle(axis)));

        let points: [Point; AXES] = std::array::from_fn(|axis| {
            center.polar(style.value_radius(values[axis]), axis_angle(axis))
        });

        let attributes = group.attributes();
        let labels: [Label; AXES] = std::array::from_fn(|axis| Label {
            anchor: center.polar(style.radius + style.label_offset, axis_angle(axis)),
            text: attributes[axis].label().to_string(),
        });

        let ticks = (1..=AXES)
            .map(|ring| Label {
                anchor: Point::new(center.x - style.tick_offset, center.y - style.ring_radius(ring)),
                text: ring.to_string(),
            })
            .collect();

        Self {
            group,
            center,
            style,
            rings,
            spokes,
            points,
            labels,
            ticks,
        }
    }

    pub fn for_player(record: &PlayerRecord, group: AttributeGroup, size: Size, style: RadarStyle) -> Self {
        let values = record.group_ratings(group).map(f64::from);
        Self::layout(values, group, size, style)
    }

    /// Drawing primitives in paint order.
    pub fn commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(1 + AXES * 5 + 1);
        commands.push(DrawCommand::Clear);

        commands.extend(self.rings.iter().map(|ring| DrawCommand::Polygon {
            points: ring.to_vec(),
            fill: None,
            stroke: GRID_COLOR,
            line_width: 1.0,
        }));

        commands.extend(self.spokes.iter().map(|end| DrawCommand::Line {
            from: self.center,
            to: *end,
            stroke: SPOKE_COLOR,
            line_width: 1.0,
        }));

        let stroke = self.group.stroke();
        commands.push(DrawCommand::Polygon {
            points: self.points.to_vec(),
            fill: Some(self.group.fill()),
            stroke,
            line_width: 2.0,
        });

        commands.extend(self.points.iter().map(|point| DrawCommand::Circle {
            center: *point,
            radius: self.style.marker_radius,
            fill: stroke,
        }));

        commands.extend(self.labels.iter().map(|label| DrawCommand::Text {
            anchor: label.anchor,
            text: label.text.clone(),
            font_size: self.style.label_font_size,
            color: LABEL_COLOR,
            align: TextAlign::Center,
        }));

        commands.extend(self.ticks.iter().map(|tick| DrawCommand::Text {
            anchor: tick.anchor,
            text: tick.text.clone(),
            font_size: self.style.tick_font_size,
            color: TICK_COLOR,
            align: TextAlign::Right,
        }));

        commands
    }
}

/// Draw the radar chart of `group` for `record` onto `surface`.
///
/// A missing surface (not mounted yet) draws nothing.
pub fn render_radar<S: DrawingSurface + ?Sized>(
    surface: Option<&mut S>,
    record: &PlayerRecord,
    group: AttributeGroup,
    style: RadarStyle,
) {
    let Some(surface) = surface else {
        return;
    };

    let chart = RadarChart::for_player(record, group, surface.size(), style);
    for command in chart.commands() {
        surface.draw(command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::surface::CommandBuffer;
    use crate::domain::{Attribute, Position};

    fn assert_close(actual: f64, expected: f64) {
        let delta = (actual - expected).abs();
        assert!(delta < 1e-9, "expected {expected}, got {actual} (delta {delta})");
    }

    fn canvas() -> Size {
        Size::square(CANVAS_SIDE)
    }

    fn chart_for(values: [f64; AXES]) -> RadarChart {
        RadarChart::layout(values, AttributeGroup::Mental, canvas(), RadarStyle::default())
    }

    #[test]
    fn every_chart_has_five_of_each_element() {
        for rating in [0, 1, 3, 5, 9] {
            let record = PlayerRecord::uniform("Any", Position::Cam, rating);
            for group in AttributeGroup::ALL {
                let chart = RadarChart::for_player(&record, group, canvas(), RadarStyle::default());
                assert_eq!(chart.points.len(), 5);
                assert_eq!(chart.rings.len(), 5);
                assert_eq!(chart.spokes.len(), 5);
                assert_eq!(chart.labels.len(), 5);
                assert_eq!(chart.ticks.len(), 5);
            }
        }
    }

    #[test]
    fn axis_zero_points_up_and_axes_run_clockwise() {
        let chart = chart_for([5.0; AXES]);
        let center = chart.center;

        assert_close(chart.spokes[0].x, center.x);
        assert_close(chart.spokes[0].y, center.y - 100.0);
        // Axis 1 sits to the right of centre and above it.
        assert!(chart.spokes[1].x > center.x);
        assert!(chart.spokes[1].y < center.y);
        // Axis 2 sits to the right and below.
        assert!(chart.spokes[2].x > center.x);
        assert!(chart.spokes[2].y > center.y);
    }

    #[test]
    fn rating_maps_to_clamped_radius() {
        let chart = chart_for([0.0, 1.0, 2.5, 5.0, 7.0]);
        let center = chart.center;

        assert_eq!(chart.points[0], center);
        assert_close(chart.points[1].distance(center), 20.0);
        assert_close(chart.points[2].distance(center), 50.0);
        assert_close(chart.points[3].distance(center), 100.0);
        assert_close(chart.points[4].distance(center), 100.0);
    }

    #[test]
    fn out_of_range_rating_matches_maximum() {
        let style = RadarStyle::default();
        assert_close(style.value_radius(7.0), style.value_radius(5.0));
        assert_close(style.value_radius(-3.0), 0.0);
        assert_close(style.value_radius(f64::NAN), 0.0);
    }

    #[test]
    fn rings_are_evenly_spaced_pentagons() {
        let chart = chart_for([1.0; AXES]);
        for (index, ring) in chart.rings.iter().enumerate() {
            let expected = 20.0 * (index + 1) as f64;
            for vertex in ring {
                assert_close(vertex.distance(chart.center), expected);
            }
        }
    }

    #[test]
    fn labels_sit_outside_the_grid() {
        let chart = chart_for([3.0; AXES]);
        let texts: Vec<_> = chart.labels.iter().map(|l| l.text.as_str()).collect();

        assert_eq!(
            texts,
            ["Mental", "Coachability", "Availability", "Communication", "Maturity"]
        );
        for label in &chart.labels {
            assert_close(label.anchor.distance(chart.center), 130.0);
        }
    }

    #[test]
    fn scale_ticks_follow_twelve_o_clock_axis() {
        let chart = chart_for([3.0; AXES]);
        for (index, tick) in chart.ticks.iter().enumerate() {
            assert_eq!(tick.text, (index + 1).to_string());
            assert_close(tick.anchor.x, 165.0);
            assert_close(tick.anchor.y, 175.0 - 20.0 * (index + 1) as f64);
        }
    }

    #[test]
    fn chart_follows_the_surface_center() {
        let record = PlayerRecord::uniform("Wide", Position::St, 5);
        let size = Size {
            width: 500.0,
            height: 300.0,
        };
        let chart = RadarChart::for_player(&record, AttributeGroup::Technical, size, RadarStyle::default());

        assert_eq!(chart.center, Point::new(250.0, 150.0));
        assert_close(chart.points[0].y, 50.0);
    }

    #[test]
    fn commands_are_emitted_in_paint_order() {
        let mut record = PlayerRecord::uniform("Sam", Position::Cb, 4);
        Attribute::Passing.set(&mut record, 2);
        let mut buffer = CommandBuffer::new(canvas());

        render_radar(Some(&mut buffer), &record, AttributeGroup::Technical, RadarStyle::default());
        let commands = buffer.commands();

        assert_eq!(commands.len(), 1 + 5 + 5 + 1 + 5 + 5 + 5);
        assert_eq!(commands[0], DrawCommand::Clear);
        assert!(commands[1..6].iter().all(|c| matches!(
            c,
            DrawCommand::Polygon { fill: None, .. }
        )));
        assert!(commands[6..11].iter().all(|c| matches!(c, DrawCommand::Line { .. })));

        let DrawCommand::Polygon {
            points,
            fill,
            stroke,
            line_width,
        } = &commands[11]
        else {
            panic!("expected data polygon, got {:?}", commands[11]);
        };
        assert_eq!(points.len(), 5);
        assert_eq!(fill.map(Rgba::to_css).as_deref(), Some("rgba(124,58,237,0.3)"));
        assert_eq!(stroke.to_css(), "#7c3aed");
        assert_close(*line_width, 2.0);
        assert_close(points[0].distance(Point::new(175.0, 175.0)), 40.0);

        assert!(commands[12..17].iter().all(|c| matches!(
            c,
            DrawCommand::Circle { radius, fill, .. } if (*radius - 4.0).abs() < f64::EPSILON && fill.to_css() == "#7c3aed"
        )));
        assert!(commands[17..22].iter().all(|c| matches!(
            c,
            DrawCommand::Text { align: TextAlign::Center, .. }
        )));
        assert!(commands[22..27].iter().all(|c| matches!(
            c,
            DrawCommand::Text { align: TextAlign::Right, .. }
        )));
    }

    #[test]
    fn rendering_twice_replaces_previous_drawing() {
        let record = PlayerRecord::uniform("Again", Position::Gk, 3);
        let mut buffer = CommandBuffer::new(canvas());

        render_radar(Some(&mut buffer), &record, AttributeGroup::Mental, RadarStyle::default());
        let first = buffer.commands().to_vec();
        render_radar(Some(&mut buffer), &record, AttributeGroup::Mental, RadarStyle::default());

        assert_eq!(buffer.commands(), first.as_slice());
    }

    #[test]
    fn missing_surface_is_a_no_op() {
        let record = PlayerRecord::uniform("Nobody", Position::Cb, 3);
        render_radar::<CommandBuffer>(None, &record, AttributeGroup::Mental, RadarStyle::default());
    }
}
