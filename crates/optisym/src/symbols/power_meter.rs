//! Optical power meter: an analog gauge with a needle.

use optisym_core::{
    GeometryError,
    draw::{Arc, Arrowhead, Circle, Segment, Symbol},
    geometry::{Point, Size},
};

use super::rectangle;
use crate::SymbolOptions;

const DEFAULT_SIZE: Size = Size::new(1.5, 1.0);
const DIAL_RADIUS: f32 = 0.5;
const DIAL_START: f32 = 20.0;
const DIAL_END: f32 = 160.0;
const PIVOT_RADIUS: f32 = 0.05;

/// Optical power meter, 1.5 × 1 unless overridden.
///
/// The dial pivot sits at `(w/2, -h/5)`; the needle tip is fixed at
/// `(1, 0.17)`.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn power_meter(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    let (mut builder, size) = rectangle::body("power_meter", options, DEFAULT_SIZE)?;
    let pivot = Point::new(size.width() / 2.0, -size.height() / 5.0);

    builder
        .push(Arc::new(pivot, DIAL_RADIUS, DIAL_RADIUS, DIAL_START, DIAL_END))
        .push(
            Segment::line(pivot, Point::new(1.0, 0.17)).with_arrow(Arrowhead::new(0.15, 0.1)),
        )
        .push(Circle::new(pivot, PIVOT_RADIUS).filled());

    Ok(builder.build())
}
