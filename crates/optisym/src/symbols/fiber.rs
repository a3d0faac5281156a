//! A fiber run: a straight line with two overlapping loops above it.

use optisym_core::{
    draw::{Circle, Segment, Symbol, SymbolBuilder},
    geometry::Point,
};

use super::warn_ignored_size;
use crate::SymbolOptions;

const LENGTH: f32 = 1.5;
const LOOP_RADIUS: f32 = 0.3;
/// Horizontal distance of each loop center from the midpoint.
const LOOP_SPREAD: f32 = 0.1;

/// Fiber of fixed length 1.5 with two loops of radius 0.3.
///
/// Width and height are not supported and are ignored with a warning.
pub fn fiber(options: &SymbolOptions) -> Symbol {
    warn_ignored_size("fiber", options);

    let mid = LENGTH / 2.0;
    let mut builder = SymbolBuilder::new("fiber");
    builder
        .push(Segment::line(Point::new(0.0, 0.0), Point::new(LENGTH, 0.0)))
        .extend(
            [mid - LOOP_SPREAD, mid + LOOP_SPREAD]
                .map(|x| Circle::new(Point::new(x, LOOP_RADIUS), LOOP_RADIUS)),
        )
        .set_anchor("start", Point::new(0.0, 0.0))
        .set_anchor("end", Point::new(LENGTH, 0.0))
        .set_drop(Point::new(LENGTH, 0.0))
        .set_params(options.params().clone());

    builder.build()
}
