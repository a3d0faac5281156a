//! Mach-Zehnder modulator: a split waveguide between three electrodes.

use optisym_core::{
    GeometryError,
    draw::{Polygon, Segment, Symbol},
    geometry::{Point, Size},
};

use super::rectangle;
use crate::SymbolOptions;

const DEFAULT_SIZE: Size = Size::new(1.5, 1.0);

/// Waveguide legs, input to output, upper arm first.
const WAVEGUIDE: [((f32, f32), (f32, f32)); 8] = [
    ((0.1, 0.0), (0.2, 0.0)),
    ((0.2, 0.0), (0.4, 0.2)),
    ((0.4, 0.2), (1.1, 0.2)),
    ((1.1, 0.2), (1.3, 0.0)),
    ((1.3, 0.0), (1.4, 0.0)),
    ((0.2, 0.0), (0.4, -0.2)),
    ((0.4, -0.2), (1.1, -0.2)),
    ((1.1, -0.2), (1.3, 0.0)),
];

/// Electrode strips spanning `x ∈ [0.4, 1.1]`, as `(y_from, y_to)`.
const ELECTRODES: [(f32, f32); 3] = [(0.3, 0.35), (-0.3, -0.35), (-0.1, 0.1)];

/// Modulator, 1.5 × 1 unless overridden.
///
/// The waveguide and electrodes keep their literal positions when the body
/// is resized.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn modulator(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    let (mut builder, _) = rectangle::body("modulator", options, DEFAULT_SIZE)?;

    builder
        .extend(
            WAVEGUIDE
                .iter()
                .map(|&(from, to)| Segment::line(from.into(), to.into())),
        )
        .extend(ELECTRODES.iter().map(|&(y0, y1)| {
            Polygon::new([
                Point::new(0.4, y0),
                Point::new(0.4, y1),
                Point::new(1.1, y1),
                Point::new(1.1, y0),
            ])
            .filled()
        }));

    Ok(builder.build())
}
