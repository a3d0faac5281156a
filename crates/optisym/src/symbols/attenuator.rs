//! Variable optical attenuator: a circle crossed by a diagonal arrow.

use optisym_core::{
    GeometryError,
    draw::{Arrowhead, Circle, Segment, Symbol},
    geometry::{Point, Size},
};

use super::rectangle;
use crate::SymbolOptions;

const DEFAULT_SIZE: Size = Size::new(1.0, 1.0);
/// Inset of the arrow tail from the lower-left corner.
const ARROW_INSET: f32 = 0.17;
/// Gap between the circle and the left and right edges of the body.
const CIRCLE_MARGIN: f32 = 0.2;

/// Variable optical attenuator, 1 × 1 unless overridden.
///
/// The circle is centered on the body with radius `w/2 - 0.2`, never
/// smaller than `w/10` so narrow bodies still get a visible circle.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn voa(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    let (mut builder, size) = rectangle::body("voa", options, DEFAULT_SIZE)?;
    let (w, h) = (size.width(), size.height());

    builder
        .push(Circle::new(Point::new(w / 2.0, 0.0), circle_radius(w)))
        .push(
            Segment::line(
                Point::new(ARROW_INSET, -h / 2.0 + ARROW_INSET),
                Point::new(0.7 + ARROW_INSET, 0.2 + ARROW_INSET),
            )
            .with_arrow(Arrowhead::new(0.15, 0.1)),
        );

    Ok(builder.build())
}

fn circle_radius(width: f32) -> f32 {
    (width / 2.0 - CIRCLE_MARGIN).max(width / 10.0)
}
