//! Polarization controller: a line with three paddles sitting on it.

use optisym_core::{
    draw::{Circle, Segment, Symbol, SymbolBuilder},
    geometry::Point,
};

use super::warn_ignored_size;
use crate::SymbolOptions;

const LENGTH: f32 = 1.0;
const PADDLE_RADIUS: f32 = 0.15;

/// Polarization controller of fixed length 1 with three touching paddles of
/// radius 0.15 centered on the midpoint.
///
/// Width and height are not supported and are ignored with a warning.
pub fn polarization_controller(options: &SymbolOptions) -> Symbol {
    warn_ignored_size("polarization_controller", options);

    let mid = LENGTH / 2.0;
    let pitch = 2.0 * PADDLE_RADIUS;
    let mut builder = SymbolBuilder::new("polarization_controller");
    builder
        .push(Segment::line(Point::new(0.0, 0.0), Point::new(LENGTH, 0.0)))
        .extend(
            [mid - pitch, mid, mid + pitch]
                .map(|x| Circle::new(Point::new(x, PADDLE_RADIUS), PADDLE_RADIUS)),
        )
        .set_anchor("start", Point::new(0.0, 0.0))
        .set_anchor("end", Point::new(LENGTH, 0.0))
        .set_drop(Point::new(LENGTH, 0.0))
        .set_params(options.params().clone());

    builder.build()
}
