//! Projection from a symbol's local frame into SVG canvas space.

use crate::geometry::{Bounds, Point, Size};

/// Maps local, y-up drawing units onto a y-down SVG canvas.
///
/// The local `bounds` are scaled by `scale` pixels per unit and surrounded by
/// `margin` pixels on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasFrame {
    bounds: Bounds,
    scale: f32,
    margin: f32,
}

impl CanvasFrame {
    pub fn new(bounds: Bounds, scale: f32, margin: f32) -> Self {
        Self {
            bounds,
            scale,
            margin,
        }
    }

    /// Converts a local point to canvas coordinates.
    pub fn project(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.bounds.min_x()).mul_add(self.scale, self.margin),
            (self.bounds.max_y() - point.y()).mul_add(self.scale, self.margin),
        )
    }

    /// Converts a local length to canvas pixels.
    pub fn project_length(&self, length: f32) -> f32 {
        length * self.scale
    }

    /// Total canvas size including margins.
    pub fn canvas_size(&self) -> Size {
        let margins = 2.0 * self.margin;
        Size::new(
            self.bounds.width().mul_add(self.scale, margins),
            self.bounds.height().mul_add(self.scale, margins),
        )
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn unit_frame() -> CanvasFrame {
        let bounds = Bounds::from_points([Point::new(0.0, -0.5), Point::new(2.0, 0.5)]).unwrap();
        CanvasFrame::new(bounds, 10.0, 5.0)
    }

    #[test]
    fn test_project_flips_y() {
        let frame = unit_frame();

        let top_left = frame.project(Point::new(0.0, 0.5));
        assert_approx_eq!(f32, top_left.x(), 5.0);
        assert_approx_eq!(f32, top_left.y(), 5.0);

        let bottom_right = frame.project(Point::new(2.0, -0.5));
        assert_approx_eq!(f32, bottom_right.x(), 25.0);
        assert_approx_eq!(f32, bottom_right.y(), 15.0);
    }

    #[test]
    fn test_canvas_size_includes_margin() {
        let size = unit_frame().canvas_size();
        assert_approx_eq!(f32, size.width(), 30.0);
        assert_approx_eq!(f32, size.height(), 20.0);
    }

    #[test]
    fn test_project_length() {
        assert_approx_eq!(f32, unit_frame().project_length(0.25), 2.5);
    }
}
