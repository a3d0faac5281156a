//! Optical and electrical spectrum analyzers.

use rand::Rng;

use optisym_core::{
    GeometryError,
    draw::{Segment, Symbol},
};

use super::panel;
use crate::{SymbolOptions, trace};

const OSA_SAMPLES: usize = 150;
const ESA_SAMPLES: usize = 200;
/// Height of the spectrum floor above the bottom of the screen.
const SPECTRUM_BASELINE: f32 = 0.15;

/// Optical spectrum analyzer showing a single peak over a noise floor.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn optical_spectrum_analyzer<R: Rng + ?Sized>(
    options: &SymbolOptions,
    rng: &mut R,
) -> Result<Symbol, GeometryError> {
    let (mut builder, panel) = panel::instrument("optical_spectrum_analyzer", options)?;
    let screen = panel.screen();

    let raw = trace::single_peak(screen, OSA_SAMPLES, rng);
    builder.push(Segment::new(screen.place(raw, SPECTRUM_BASELINE)));

    Ok(builder.build())
}

/// Electrical spectrum analyzer showing three peaks over a noise floor.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn electrical_spectrum_analyzer<R: Rng + ?Sized>(
    options: &SymbolOptions,
    rng: &mut R,
) -> Result<Symbol, GeometryError> {
    let (mut builder, panel) = panel::instrument("electrical_spectrum_analyzer", options)?;
    let screen = panel.screen();

    let raw = trace::multi_peak(screen, ESA_SAMPLES, rng);
    builder.push(Segment::new(screen.place(raw, SPECTRUM_BASELINE)));

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use optisym_core::draw::Primitive;

    use super::*;

    fn trace_of(symbol: &Symbol) -> &Segment {
        match symbol.primitives().last() {
            Some(Primitive::Segment(segment)) => segment,
            other => panic!("expected trace segment, got {other:?}"),
        }
    }

    #[test]
    fn test_osa_trace() {
        let mut rng = StdRng::seed_from_u64(11);
        let symbol = optical_spectrum_analyzer(&SymbolOptions::default(), &mut rng).unwrap();

        assert_eq!(symbol.primitives().len(), 7);
        let trace = trace_of(&symbol);
        assert_eq!(trace.points().len(), 150);
        assert!(trace.arrow().is_none());
        // First sample sits a tenth of the screen in from its left edge
        assert_approx_eq!(f32, trace.points()[0].x(), 0.31, epsilon = 1e-6);
    }

    #[test]
    fn test_esa_trace() {
        let mut rng = StdRng::seed_from_u64(12);
        let symbol = electrical_spectrum_analyzer(&SymbolOptions::default(), &mut rng).unwrap();

        assert_eq!(symbol.primitives().len(), 7);
        assert_eq!(trace_of(&symbol).points().len(), 200);
    }

    #[test]
    fn test_traces_vary_between_builds() {
        let mut rng = StdRng::seed_from_u64(13);
        let first = optical_spectrum_analyzer(&SymbolOptions::default(), &mut rng).unwrap();
        let second = optical_spectrum_analyzer(&SymbolOptions::default(), &mut rng).unwrap();

        assert_ne!(trace_of(&first), trace_of(&second));
        // Everything but the trace is identical
        let n = first.primitives().len() - 1;
        assert_eq!(first.primitives()[..n], second.primitives()[..n]);
    }

    #[test]
    fn test_same_seed_same_trace() {
        let build = |seed| {
            electrical_spectrum_analyzer(
                &SymbolOptions::default(),
                &mut StdRng::seed_from_u64(seed),
            )
            .unwrap()
        };
        assert_eq!(build(5), build(5));
    }

    #[test]
    fn test_degenerate_size_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let options = SymbolOptions::new().with_width(0.0);
        assert!(optical_spectrum_analyzer(&options, &mut rng).is_err());
        assert!(electrical_spectrum_analyzer(&options, &mut rng).is_err());
    }
}
