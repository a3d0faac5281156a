//! One constructor per catalog symbol.
//!
//! Rectangular symbols start from [`rectangle::base`] and append their own
//! primitives. The four instruments share the [`panel`] decorations and draw
//! a trace produced by the [`crate::trace`] generators. Constructors that
//! draw random traces take the random number generator as an argument.
//!
//! All coordinates are in the symbol's local frame, y up, with the west
//! anchor at the origin.

mod attenuator;
mod diode;
mod fiber;
mod modulator;
pub mod panel;
mod polarization;
mod power_meter;
pub mod rectangle;
mod spectrum;
mod waveform;

pub use attenuator::voa;
pub use diode::{LightDirection, laser_diode, photodetector};
pub use fiber::fiber;
pub use modulator::modulator;
pub use polarization::polarization_controller;
pub use power_meter::power_meter;
pub use rectangle::rectangle;
pub use spectrum::{electrical_spectrum_analyzer, optical_spectrum_analyzer};
pub use waveform::{oscilloscope, waveform_generator};

use log::warn;

use crate::SymbolOptions;

/// Logs a warning when a size is given to a symbol that has no body to size.
fn warn_ignored_size(symbol: &'static str, options: &SymbolOptions) {
    if options.has_size() {
        warn!(
            symbol,
            width:? = options.width(),
            height:? = options.height();
            "Symbol has a fixed length, ignoring width/height",
        );
    }
}
