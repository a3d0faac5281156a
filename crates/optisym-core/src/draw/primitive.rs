//! Drawing primitives a symbol is composed of.
//!
//! Every primitive lives in the symbol's local, y-up frame. Angles are in
//! degrees, counter-clockwise from the positive x-axis.

use svg::{self, node::element as svg_element};

use crate::{
    apply_stroke,
    color::Color,
    draw::{CanvasFrame, StrokeDefinition},
    geometry::{Bounds, Point},
};

/// Lengths below this are treated as zero when normalizing directions.
const EPSILON: f32 = 1e-6;

/// Sets `fill` to the given color for filled primitives, `none` otherwise.
macro_rules! apply_fill {
    ($element:expr, $filled:expr, $color:expr) => {{
        if $filled {
            $element
                .set("fill", $color.to_string())
                .set("fill-opacity", $color.alpha())
        } else {
            $element.set("fill", "none")
        }
    }};
}

/// Arrowhead drawn at the last point of a [`Segment`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    length: f32,
    width: f32,
}

impl Arrowhead {
    pub const fn new(length: f32, width: f32) -> Self {
        Self { length, width }
    }

    /// Distance from the tip back to the base of the head
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Full width of the head base
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// An open polyline, optionally ending in an arrowhead.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    points: Vec<Point>,
    arrow: Option<Arrowhead>,
}

impl Segment {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            arrow: None,
        }
    }

    /// A straight line from `start` to `end`.
    pub fn line(start: Point, end: Point) -> Self {
        Self::new([start, end])
    }

    /// Adds an arrowhead at the last point.
    pub fn with_arrow(mut self, arrow: Arrowhead) -> Self {
        self.arrow = Some(arrow);
        self
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn arrow(&self) -> Option<Arrowhead> {
        self.arrow
    }

    /// Returns the tip and the two base corners of the arrowhead.
    ///
    /// `None` when the segment has no arrow, fewer than two points, or a
    /// zero-length final leg.
    pub fn arrowhead_triangle(&self) -> Option<[Point; 3]> {
        let arrow = self.arrow?;
        let [.., prev, tip] = self.points.as_slice() else {
            return None;
        };

        let leg = tip.sub_point(*prev);
        let length = leg.hypot();
        if length < EPSILON {
            return None;
        }

        let direction = leg.scale(1.0 / length);
        let base = tip.sub_point(direction.scale(arrow.length));
        let half = direction.perpendicular().scale(arrow.width / 2.0);

        Some([*tip, base.add_point(half), base.sub_point(half)])
    }

    fn bounds(&self) -> Option<Bounds> {
        let head = self.arrowhead_triangle().into_iter().flatten();
        Bounds::from_points(self.points.iter().copied().chain(head))
    }
}

/// A closed polygon. The outline returns to the first point implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    filled: bool,
    corner_radius: Option<f32>,
}

impl Polygon {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
            filled: false,
            corner_radius: None,
        }
    }

    /// An axis-aligned rectangle given by its lower-left corner and extents,
    /// listed counter-clockwise from that corner.
    pub fn rectangle(corner: Point, width: f32, height: f32) -> Self {
        Self::new([
            corner,
            corner.offset(width, 0.0),
            corner.offset(width, height),
            corner.offset(0.0, height),
        ])
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    /// The points as given, including an explicit closing point if present.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn corner_radius(&self) -> Option<f32> {
        self.corner_radius
    }

    /// The distinct corners, without a repeated closing point.
    pub fn vertices(&self) -> &[Point] {
        match self.points.as_slice() {
            [first, rest @ .., last] if !rest.is_empty() && first == last => {
                &self.points[..self.points.len() - 1]
            }
            points => points,
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_points(self.points.iter().copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    filled: bool,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_center(self.center, self.radius, self.radius)
    }
}

/// An elliptical arc swept counter-clockwise from `start_angle` to `end_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    center: Point,
    radius_x: f32,
    radius_y: f32,
    start_angle: f32,
    end_angle: f32,
    filled: bool,
}

impl Arc {
    pub fn new(
        center: Point,
        radius_x: f32,
        radius_y: f32,
        start_angle: f32,
        end_angle: f32,
    ) -> Self {
        Self {
            center,
            radius_x,
            radius_y,
            start_angle,
            end_angle,
            filled: false,
        }
    }

    pub fn filled(mut self) -> Self {
        self.filled = true;
        self
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius_x(&self) -> f32 {
        self.radius_x
    }

    pub fn radius_y(&self) -> f32 {
        self.radius_y
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    /// Angular extent of the sweep, normalized to `(0, 360]`.
    pub fn sweep(&self) -> f32 {
        let sweep = (self.end_angle - self.start_angle).rem_euclid(360.0);
        if sweep == 0.0 { 360.0 } else { sweep }
    }

    /// The point on the ellipse at `angle` degrees.
    pub fn point_at(&self, angle: f32) -> Point {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.center.offset(self.radius_x * cos, self.radius_y * sin)
    }

    fn bounds(&self) -> Option<Bounds> {
        let sweep = self.sweep();
        // Axis extremes crossed by the sweep, plus both endpoints.
        let extremes = (0..4).map(|quarter| quarter as f32 * 90.0).filter(|angle| {
            (angle - self.start_angle).rem_euclid(360.0) <= sweep
        });
        let points = [self.start_angle, self.start_angle + sweep]
            .into_iter()
            .chain(extremes)
            .map(|angle| self.point_at(angle));
        Bounds::from_points(points)
    }
}

/// One drawable element of a symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Segment(Segment),
    Polygon(Polygon),
    Circle(Circle),
    Arc(Arc),
}

impl Primitive {
    /// Short lowercase name of the variant, used in logs and SVG class names.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Polygon(_) => "polygon",
            Self::Circle(_) => "circle",
            Self::Arc(_) => "arc",
        }
    }

    /// Local-frame bounding box, `None` for a primitive without points.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Segment(segment) => segment.bounds(),
            Self::Polygon(polygon) => polygon.bounds(),
            Self::Circle(circle) => Some(circle.bounds()),
            Self::Arc(arc) => arc.bounds(),
        }
    }

    /// Renders this primitive to an SVG node.
    ///
    /// # Arguments
    ///
    /// * `frame` - Projection from the local frame to canvas pixels.
    /// * `stroke` - Stroke applied to every outline.
    /// * `fill_color` - Color used by filled primitives and arrowheads.
    pub fn render_to_svg(
        &self,
        frame: &CanvasFrame,
        stroke: &StrokeDefinition,
        fill_color: Color,
    ) -> Box<dyn svg::Node> {
        match self {
            Self::Segment(segment) => render_segment(segment, frame, stroke, fill_color),
            Self::Polygon(polygon) => {
                let path = svg_element::Path::new()
                    .set("class", "polygon")
                    .set("d", polygon_path_data(polygon, frame));
                let path = apply_fill!(path, polygon.is_filled(), fill_color);
                Box::new(apply_stroke!(path, stroke))
            }
            Self::Circle(circle) => {
                let center = frame.project(circle.center());
                let node = svg_element::Circle::new()
                    .set("class", "circle")
                    .set("cx", center.x())
                    .set("cy", center.y())
                    .set("r", frame.project_length(circle.radius()));
                let node = apply_fill!(node, circle.is_filled(), fill_color);
                Box::new(apply_stroke!(node, stroke))
            }
            Self::Arc(arc) => {
                let path = svg_element::Path::new()
                    .set("class", "arc")
                    .set("d", arc_path_data(arc, frame));
                let path = apply_fill!(path, arc.is_filled(), fill_color);
                Box::new(apply_stroke!(path, stroke))
            }
        }
    }
}

impl From<Segment> for Primitive {
    fn from(segment: Segment) -> Self {
        Self::Segment(segment)
    }
}

impl From<Polygon> for Primitive {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Arc> for Primitive {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

fn render_segment(
    segment: &Segment,
    frame: &CanvasFrame,
    stroke: &StrokeDefinition,
    fill_color: Color,
) -> Box<dyn svg::Node> {
    let data = polyline_path_data(segment.points().iter().copied(), frame);
    let path = svg_element::Path::new()
        .set("class", "segment")
        .set("d", data)
        .set("fill", "none");
    let path = apply_stroke!(path, stroke);

    let Some(head) = segment.arrowhead_triangle() else {
        return Box::new(path);
    };

    let mut head_data = polyline_path_data(head, frame);
    head_data.push_str(" Z");
    let head = svg_element::Path::new()
        .set("class", "arrowhead")
        .set("d", head_data)
        .set("fill", fill_color.to_string())
        .set("fill-opacity", fill_color.alpha())
        .set("stroke", "none");

    Box::new(svg_element::Group::new().add(path).add(head))
}

/// Create path data for an open polyline through `points`.
fn polyline_path_data(points: impl IntoIterator<Item = Point>, frame: &CanvasFrame) -> String {
    points
        .into_iter()
        .map(|point| frame.project(point))
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", p.x(), p.y())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create path data for a closed polygon, cutting each corner with a
/// quadratic curve when a corner radius is set.
fn polygon_path_data(polygon: &Polygon, frame: &CanvasFrame) -> String {
    let vertices = polygon.vertices();
    let radius = polygon.corner_radius().unwrap_or(0.0);
    if radius <= 0.0 || vertices.len() < 3 {
        let mut data = polyline_path_data(vertices.iter().copied(), frame);
        data.push_str(" Z");
        return data;
    }

    let count = vertices.len();
    let mut commands = Vec::with_capacity(count * 2 + 1);
    for i in 0..count {
        let corner = vertices[i];
        let prev = vertices[(i + count - 1) % count];
        let next = vertices[(i + 1) % count];

        let entry = frame.project(toward(corner, prev, radius));
        let exit = frame.project(toward(corner, next, radius));
        let control = frame.project(corner);

        let command = if i == 0 { 'M' } else { 'L' };
        commands.push(format!("{command} {} {}", entry.x(), entry.y()));
        commands.push(format!(
            "Q {} {} {} {}",
            control.x(),
            control.y(),
            exit.x(),
            exit.y()
        ));
    }
    commands.push("Z".to_string());
    commands.join(" ")
}

/// Moves from `from` toward `to` by `distance`, never past the midpoint.
fn toward(from: Point, to: Point, distance: f32) -> Point {
    let leg = to.sub_point(from);
    let length = leg.hypot();
    if length < EPSILON {
        return from;
    }
    let step = distance.min(length / 2.0);
    from.add_point(leg.scale(step / length))
}

fn arc_path_data(arc: &Arc, frame: &CanvasFrame) -> String {
    let sweep = arc.sweep();
    let start = frame.project(arc.point_at(arc.start_angle()));
    let rx = frame.project_length(arc.radius_x());
    let ry = frame.project_length(arc.radius_y());

    // SVG cannot draw a full ellipse as a single arc command.
    if sweep >= 360.0 {
        let opposite = frame.project(arc.point_at(arc.start_angle() + 180.0));
        return format!(
            "M {} {} A {rx} {ry} 0 1 0 {} {} A {rx} {ry} 0 1 0 {} {} Z",
            start.x(),
            start.y(),
            opposite.x(),
            opposite.y(),
            start.x(),
            start.y()
        );
    }

    let end = frame.project(arc.point_at(arc.start_angle() + sweep));
    let large_arc = u8::from(sweep > 180.0);
    // Counter-clockwise in the y-up frame is sweep-flag 0 on the y-down canvas.
    let mut data = format!(
        "M {} {} A {rx} {ry} 0 {large_arc} 0 {} {}",
        start.x(),
        start.y(),
        end.x(),
        end.y()
    );
    if arc.is_filled() {
        data.push_str(" Z");
    }
    data
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn assert_point_eq(actual: Point, expected: Point) {
        assert_approx_eq!(f32, actual.x(), expected.x(), epsilon = 1e-5);
        assert_approx_eq!(f32, actual.y(), expected.y(), epsilon = 1e-5);
    }

    fn frame_for(primitive: &Primitive) -> CanvasFrame {
        CanvasFrame::new(primitive.bounds().unwrap(), 100.0, 10.0)
    }

    #[test]
    fn test_arrowhead_triangle_horizontal() {
        let segment = Segment::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
            .with_arrow(Arrowhead::new(0.2, 0.1));

        let [tip, left, right] = segment.arrowhead_triangle().unwrap();
        assert_point_eq(tip, Point::new(1.0, 0.0));
        assert_point_eq(left, Point::new(0.8, 0.05));
        assert_point_eq(right, Point::new(0.8, -0.05));
    }

    #[test]
    fn test_arrowhead_uses_last_leg() {
        let segment = Segment::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ])
        .with_arrow(Arrowhead::new(0.5, 0.2));

        let [tip, left, right] = segment.arrowhead_triangle().unwrap();
        assert_point_eq(tip, Point::new(1.0, 1.0));
        assert_point_eq(left, Point::new(0.9, 0.5));
        assert_point_eq(right, Point::new(1.1, 0.5));
    }

    #[test]
    fn test_arrowhead_absent_cases() {
        let plain = Segment::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!(plain.arrowhead_triangle().is_none());

        let degenerate = Segment::line(Point::new(1.0, 1.0), Point::new(1.0, 1.0))
            .with_arrow(Arrowhead::new(0.1, 0.1));
        assert!(degenerate.arrowhead_triangle().is_none());

        let single = Segment::new([Point::new(0.0, 0.0)]).with_arrow(Arrowhead::new(0.1, 0.1));
        assert!(single.arrowhead_triangle().is_none());
    }

    #[test]
    fn test_polygon_vertices_drop_closing_point() {
        let closed = Polygon::new([
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 0.0),
        ]);
        assert_eq!(closed.points().len(), 4);
        assert_eq!(closed.vertices().len(), 3);

        let open = Polygon::rectangle(Point::new(0.0, 0.0), 2.0, 1.0);
        assert_eq!(open.vertices().len(), 4);
        assert_eq!(open.points()[2], Point::new(2.0, 1.0));
    }

    #[test]
    fn test_polygon_flags() {
        let polygon = Polygon::rectangle(Point::default(), 1.0, 1.0)
            .filled()
            .with_corner_radius(0.25);
        assert!(polygon.is_filled());
        assert_eq!(polygon.corner_radius(), Some(0.25));
    }

    #[test]
    fn test_circle_bounds() {
        let circle = Primitive::from(Circle::new(Point::new(0.5, 0.0), 0.25));
        let bounds = circle.bounds().unwrap();
        assert_approx_eq!(f32, bounds.min_x(), 0.25);
        assert_approx_eq!(f32, bounds.max_x(), 0.75);
        assert_approx_eq!(f32, bounds.min_y(), -0.25);
        assert_approx_eq!(f32, bounds.max_y(), 0.25);
    }

    #[test]
    fn test_arc_sweep_normalization() {
        assert_approx_eq!(f32, Arc::new(Point::default(), 1.0, 1.0, 20.0, 160.0).sweep(), 140.0);
        assert_approx_eq!(f32, Arc::new(Point::default(), 1.0, 1.0, 270.0, 90.0).sweep(), 180.0);
        assert_approx_eq!(f32, Arc::new(Point::default(), 1.0, 1.0, 0.0, 360.0).sweep(), 360.0);
    }

    #[test]
    fn test_arc_bounds_include_top_extreme() {
        let arc = Primitive::from(Arc::new(Point::new(0.0, 0.0), 1.0, 1.0, 20.0, 160.0));
        let bounds = arc.bounds().unwrap();

        // The sweep passes 90 degrees, so the top of the circle is included
        assert_approx_eq!(f32, bounds.max_y(), 1.0, epsilon = 1e-5);
        // ...but never reaches the bottom half
        assert_approx_eq!(f32, bounds.min_y(), 20f32.to_radians().sin(), epsilon = 1e-5);
        assert_approx_eq!(f32, bounds.max_x(), 20f32.to_radians().cos(), epsilon = 1e-5);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Primitive::from(Segment::new([])).kind_name(), "segment");
        assert_eq!(Primitive::from(Polygon::new([])).kind_name(), "polygon");
        assert_eq!(Primitive::from(Circle::new(Point::default(), 1.0)).kind_name(), "circle");
        assert_eq!(
            Primitive::from(Arc::new(Point::default(), 1.0, 1.0, 0.0, 90.0)).kind_name(),
            "arc"
        );
    }

    #[test]
    fn test_empty_primitives_have_no_bounds() {
        assert!(Primitive::from(Segment::new([])).bounds().is_none());
        assert!(Primitive::from(Polygon::new([])).bounds().is_none());
    }

    #[test]
    fn test_render_segment_with_arrow_adds_head() {
        let primitive = Primitive::from(
            Segment::line(Point::new(0.0, 0.0), Point::new(1.0, 0.0))
                .with_arrow(Arrowhead::new(0.1, 0.1)),
        );
        let node = primitive.render_to_svg(
            &frame_for(&primitive),
            &StrokeDefinition::default(),
            Color::default(),
        );
        let rendered = node.to_string();

        assert!(rendered.contains("<g"));
        assert!(rendered.contains("arrowhead"));
    }

    #[test]
    fn test_render_rounded_polygon_uses_curves() {
        let primitive = Primitive::from(
            Polygon::rectangle(Point::new(0.0, 0.0), 1.1, 0.7).with_corner_radius(0.25),
        );
        let rendered = primitive
            .render_to_svg(
                &frame_for(&primitive),
                &StrokeDefinition::default(),
                Color::default(),
            )
            .to_string();

        assert_eq!(rendered.matches('Q').count(), 4);
        assert!(rendered.contains("fill=\"none\""));
    }

    #[test]
    fn test_render_filled_circle() {
        let primitive = Primitive::from(Circle::new(Point::new(0.0, 0.0), 0.05).filled());
        let rendered = primitive
            .render_to_svg(
                &frame_for(&primitive),
                &StrokeDefinition::default(),
                Color::new("red").unwrap(),
            )
            .to_string();

        assert!(rendered.contains("<circle"));
        assert!(rendered.contains("fill=\"red\""));
    }

    #[test]
    fn test_render_arc_path() {
        let primitive = Primitive::from(Arc::new(Point::new(0.0, 0.0), 0.5, 0.5, 20.0, 160.0));
        let rendered = primitive
            .render_to_svg(
                &frame_for(&primitive),
                &StrokeDefinition::default(),
                Color::default(),
            )
            .to_string();

        assert!(rendered.contains(" A 50 50 0 0 0 "));
    }
}
