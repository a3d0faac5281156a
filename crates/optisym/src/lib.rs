//! Optisym - schematic symbols for optical and RF communications components.
//!
//! The catalog covers rectangles, fiber runs, polarization controllers,
//! attenuators, modulators, spectrum analyzers, waveform generators,
//! oscilloscopes, power meters, photodetectors and laser diodes. Each symbol
//! is a static composition of segments, polygons, arcs and circles with named
//! anchors for wiring symbols together.

pub mod config;
pub mod export;
pub mod symbols;
pub mod trace;

mod catalog;
mod error;

pub use optisym_core::{GeometryError, color, draw, geometry};

pub use catalog::{SymbolKind, SymbolOptions};
pub use error::OptisymError;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng};

use config::AppConfig;
use draw::Symbol;

/// Builder for catalog symbols and their SVG previews.
///
/// The catalog owns the random number generator the instrument traces draw
/// from. With a configured seed every run produces the same traces;
/// otherwise the generator is seeded from the thread RNG.
///
/// # Examples
///
/// ```rust
/// use optisym::{Catalog, SymbolKind, SymbolOptions, config::AppConfig};
///
/// // Reproducible traces
/// let mut catalog = Catalog::new(AppConfig::default().with_seed(42));
///
/// let symbol = catalog
///     .build(SymbolKind::Voa, &SymbolOptions::default())
///     .expect("Failed to build symbol");
/// assert_eq!(symbol.primitives().len(), 3);
///
/// let svg = catalog.render_svg(&symbol).expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug)]
pub struct Catalog {
    config: AppConfig,
    rng: StdRng,
}

impl Catalog {
    /// Create a new catalog with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration with the RNG seed and style settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optisym::{Catalog, config::AppConfig};
    ///
    /// let catalog = Catalog::new(AppConfig::default());
    /// ```
    pub fn new(config: AppConfig) -> Self {
        let rng = match config.seed() {
            Some(seed) => {
                debug!(seed; "Seeding trace RNG from configuration");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build one symbol.
    ///
    /// Randomized instruments draw their traces from the catalog's RNG, so
    /// consecutive builds of the same kind differ unless the catalog is
    /// recreated with the same seed.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which symbol to build
    /// * `options` - Optional size and pass-through params
    ///
    /// # Errors
    ///
    /// Returns [`OptisymError::Geometry`] when the requested size is not
    /// finite and positive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optisym::{Catalog, SymbolKind, SymbolOptions};
    ///
    /// let mut catalog = Catalog::default();
    /// let options = SymbolOptions::new().with_size(2.0, 1.0);
    ///
    /// let rect = catalog.build(SymbolKind::Rectangle, &options).unwrap();
    /// assert_eq!(rect.anchor("E").map(|p| p.x()), Some(2.0));
    ///
    /// let bad = SymbolOptions::new().with_width(0.0);
    /// assert!(catalog.build(SymbolKind::Rectangle, &bad).is_err());
    /// ```
    pub fn build(
        &mut self,
        kind: SymbolKind,
        options: &SymbolOptions,
    ) -> Result<Symbol, OptisymError> {
        info!(kind:% = kind; "Building symbol");

        let rng = &mut self.rng;
        let symbol = match kind {
            SymbolKind::Rectangle => symbols::rectangle(options)?,
            SymbolKind::Fiber => symbols::fiber(options),
            SymbolKind::PolarizationController => symbols::polarization_controller(options),
            SymbolKind::Voa => symbols::voa(options)?,
            SymbolKind::Modulator => symbols::modulator(options)?,
            SymbolKind::OpticalSpectrumAnalyzer => {
                symbols::optical_spectrum_analyzer(options, rng)?
            }
            SymbolKind::ElectricalSpectrumAnalyzer => {
                symbols::electrical_spectrum_analyzer(options, rng)?
            }
            SymbolKind::WaveformGenerator => symbols::waveform_generator(options)?,
            SymbolKind::Oscilloscope => symbols::oscilloscope(options, rng)?,
            SymbolKind::PowerMeter => symbols::power_meter(options)?,
            SymbolKind::Photodetector => symbols::photodetector(options)?,
            SymbolKind::LaserDiode => symbols::laser_diode(options)?,
        };

        debug!(
            kind:% = kind,
            primitives = symbol.primitives().len(),
            anchors = symbol.anchors().len();
            "Symbol ready",
        );
        Ok(symbol)
    }

    /// Render a symbol to an SVG string using the configured style.
    ///
    /// # Errors
    ///
    /// Returns [`OptisymError::Style`] for unparseable colors in the style
    /// configuration or the symbol's params, and for a scale, margin or line
    /// width the canvas cannot use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optisym::{Catalog, SymbolKind, SymbolOptions};
    ///
    /// let mut catalog = Catalog::default();
    /// let symbol = catalog
    ///     .build(SymbolKind::Oscilloscope, &SymbolOptions::default())
    ///     .unwrap();
    ///
    /// let svg = catalog.render_svg(&symbol).expect("Failed to render symbol");
    /// println!("{svg}");
    /// ```
    pub fn render_svg(&self, symbol: &Symbol) -> Result<String, OptisymError> {
        export::svg::render(symbol, self.config.style())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
