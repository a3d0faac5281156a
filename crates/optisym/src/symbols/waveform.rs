//! Arbitrary waveform generator and oscilloscope.

use rand::Rng;

use optisym_core::{
    GeometryError,
    draw::{Polygon, Segment, Symbol},
};

use super::panel;
use crate::{SymbolOptions, trace};

const AWG_SAMPLES: usize = 500;
const SCOPE_SAMPLES: usize = 120;

/// Arbitrary waveform generator showing a filled sum of sines.
///
/// The trace is deterministic, so every AWG symbol is identical.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn waveform_generator(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    let (mut builder, panel) = panel::instrument("waveform_generator", options)?;
    let screen = panel.screen();

    let raw = trace::sum_of_sines(screen, AWG_SAMPLES);
    let baseline = screen.height() / 2.1;
    builder.push(Polygon::new(screen.place(raw, baseline)).filled());

    Ok(builder.build())
}

/// Oscilloscope showing one noisy sine period.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn oscilloscope<R: Rng + ?Sized>(
    options: &SymbolOptions,
    rng: &mut R,
) -> Result<Symbol, GeometryError> {
    let (mut builder, panel) = panel::instrument("oscilloscope", options)?;
    let screen = panel.screen();

    let raw = trace::noisy_sine(screen, SCOPE_SAMPLES, rng);
    let baseline = screen.height() / 2.0;
    builder.push(Segment::new(screen.place(raw, baseline)));

    Ok(builder.build())
}
