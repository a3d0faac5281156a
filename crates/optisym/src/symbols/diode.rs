//! Photodetector and laser diode: a diode glyph with two light arrows.
//!
//! Both symbols draw the same glyph; they differ only in whether the light
//! arrows point into the diode or away from it.

use optisym_core::{
    GeometryError,
    draw::{Arrowhead, Polygon, Segment, Symbol, SymbolBuilder},
    geometry::{Point, Size},
};

use super::rectangle;
use crate::SymbolOptions;

const DEFAULT_SIZE: Size = Size::new(1.0, 1.0);
const LIGHT_ARROWHEAD: Arrowhead = Arrowhead::new(0.1, 0.06);

/// Which way the light arrows of a diode symbol point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightDirection {
    /// Light falling onto the diode, drawn down and to the right.
    Incoming,
    /// Light leaving the diode, drawn up and to the right.
    Emitting,
}

impl LightDirection {
    /// Tail origins of the two arrows.
    fn origins(self) -> [Point; 2] {
        match self {
            Self::Incoming => [Point::new(0.25, 0.2), Point::new(0.17, 0.13)],
            Self::Emitting => [Point::new(0.62, 0.22), Point::new(0.7, 0.15)],
        }
    }

    /// One light arrow starting near `origin`, spanning `span` on each axis.
    fn arrow(self, origin: Point, span: f32) -> Segment {
        let (tail, tip) = match self {
            Self::Incoming => (origin.offset(0.0, span), origin.offset(span, 0.0)),
            Self::Emitting => (origin, origin.offset(span, span)),
        };
        Segment::line(tail, tip).with_arrow(LIGHT_ARROWHEAD)
    }
}

/// Photodetector, 1 × 1 unless overridden, with incoming light arrows.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn photodetector(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    diode("photodetector", options, LightDirection::Incoming)
}

/// Laser diode, 1 × 1 unless overridden, with emitting light arrows.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn laser_diode(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    diode("laser_diode", options, LightDirection::Emitting)
}

fn diode(
    name: &'static str,
    options: &SymbolOptions,
    direction: LightDirection,
) -> Result<Symbol, GeometryError> {
    let (mut builder, size) = rectangle::body(name, options, DEFAULT_SIZE)?;

    push_glyph(&mut builder, size);

    let span = size.height() / 6.0;
    builder.extend(
        direction
            .origins()
            .map(|origin| direction.arrow(origin, span)),
    );

    Ok(builder.build())
}

/// Lower lead, filled triangle, cathode bar and upper lead.
fn push_glyph(builder: &mut SymbolBuilder, size: Size) {
    let (w, h) = (size.width(), size.height());
    let bottom = -h / 2.0 + 0.25;
    let bar = h / 2.0 - 0.45;

    builder
        .push(Segment::line(
            Point::new(w / 2.0, -h / 2.0 + 0.1),
            Point::new(w / 2.0, bottom),
        ))
        .push(
            Polygon::new([
                Point::new(w / 4.0, bottom),
                Point::new(w / 2.0, bar),
                Point::new(3.0 * w / 4.0, bottom),
            ])
            .filled(),
        )
        .push(Segment::line(
            Point::new(w / 4.0, bar),
            Point::new(3.0 * w / 4.0, bar),
        ))
        .push(Segment::line(
            Point::new(w / 2.0, bar),
            Point::new(w / 2.0, h / 2.0 - 0.25),
        ));
}
