//! Symbol kinds and the options every symbol constructor accepts.

use std::{fmt, str::FromStr};

use optisym_core::{draw::ElementParams, geometry::Size};

use crate::OptisymError;

/// Every symbol the catalog can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Rectangle,
    Fiber,
    PolarizationController,
    Voa,
    Modulator,
    OpticalSpectrumAnalyzer,
    ElectricalSpectrumAnalyzer,
    WaveformGenerator,
    Oscilloscope,
    PowerMeter,
    Photodetector,
    LaserDiode,
}

impl SymbolKind {
    pub const ALL: [SymbolKind; 12] = [
        Self::Rectangle,
        Self::Fiber,
        Self::PolarizationController,
        Self::Voa,
        Self::Modulator,
        Self::OpticalSpectrumAnalyzer,
        Self::ElectricalSpectrumAnalyzer,
        Self::WaveformGenerator,
        Self::Oscilloscope,
        Self::PowerMeter,
        Self::Photodetector,
        Self::LaserDiode,
    ];

    /// Canonical snake_case name
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Fiber => "fiber",
            Self::PolarizationController => "polarization_controller",
            Self::Voa => "voa",
            Self::Modulator => "modulator",
            Self::OpticalSpectrumAnalyzer => "optical_spectrum_analyzer",
            Self::ElectricalSpectrumAnalyzer => "electrical_spectrum_analyzer",
            Self::WaveformGenerator => "waveform_generator",
            Self::Oscilloscope => "oscilloscope",
            Self::PowerMeter => "power_meter",
            Self::Photodetector => "photodetector",
            Self::LaserDiode => "laser_diode",
        }
    }

    /// Whether building this symbol draws from the random number generator.
    pub fn is_randomized(self) -> bool {
        matches!(
            self,
            Self::OpticalSpectrumAnalyzer | Self::ElectricalSpectrumAnalyzer | Self::Oscilloscope
        )
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SymbolKind {
    type Err = OptisymError;

    /// Parses a canonical name or a short alias, ignoring case and treating
    /// `-` as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let kind = match normalized.as_str() {
            "rectangle" | "rect" => Self::Rectangle,
            "fiber" => Self::Fiber,
            "polarization_controller" | "polctrl" => Self::PolarizationController,
            "voa" => Self::Voa,
            "modulator" | "mod" => Self::Modulator,
            "optical_spectrum_analyzer" | "osa" => Self::OpticalSpectrumAnalyzer,
            "electrical_spectrum_analyzer" | "esa" => Self::ElectricalSpectrumAnalyzer,
            "waveform_generator" | "awg" => Self::WaveformGenerator,
            "oscilloscope" | "scope" => Self::Oscilloscope,
            "power_meter" | "opm" => Self::PowerMeter,
            "photodetector" | "pd" => Self::Photodetector,
            "laser_diode" | "ld" => Self::LaserDiode,
            _ => return Err(OptisymError::UnknownSymbol(s.to_string())),
        };
        Ok(kind)
    }
}

/// Options accepted by every symbol constructor.
///
/// `width` and `height` override the symbol's default body size; symbols
/// without a rectangular body ignore them. Everything else is forwarded
/// untouched as [`ElementParams`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolOptions {
    width: Option<f32>,
    height: Option<f32>,
    params: ElementParams,
}

impl SymbolOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        self.with_width(width).with_height(height)
    }

    pub fn with_params(mut self, params: ElementParams) -> Self {
        self.params = params;
        self
    }

    pub fn width(&self) -> Option<f32> {
        self.width
    }

    pub fn height(&self) -> Option<f32> {
        self.height
    }

    pub fn params(&self) -> &ElementParams {
        &self.params
    }

    /// True when either dimension was given.
    pub fn has_size(&self) -> bool {
        self.width.is_some() || self.height.is_some()
    }

    /// The requested size, falling back per dimension to `default`.
    pub(crate) fn size_or(&self, default: Size) -> Size {
        Size::new(
            self.width.unwrap_or(default.width()),
            self.height.unwrap_or(default.height()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        let cases = [
            ("rect", SymbolKind::Rectangle),
            ("voa", SymbolKind::Voa),
            ("mod", SymbolKind::Modulator),
            ("polctrl", SymbolKind::PolarizationController),
            ("osa", SymbolKind::OpticalSpectrumAnalyzer),
            ("esa", SymbolKind::ElectricalSpectrumAnalyzer),
            ("awg", SymbolKind::WaveformGenerator),
            ("scope", SymbolKind::Oscilloscope),
            ("opm", SymbolKind::PowerMeter),
            ("pd", SymbolKind::Photodetector),
            ("ld", SymbolKind::LaserDiode),
        ];

        for (alias, expected) in cases {
            assert_eq!(alias.parse::<SymbolKind>().unwrap(), expected, "{alias}");
        }
    }

    #[test]
    fn test_parse_is_case_and_dash_insensitive() {
        assert_eq!(
            "PolCtrl".parse::<SymbolKind>().unwrap(),
            SymbolKind::PolarizationController
        );
        assert_eq!(
            "laser-diode".parse::<SymbolKind>().unwrap(),
            SymbolKind::LaserDiode
        );
    }

    #[test]
    fn test_canonical_names_round_trip() {
        for kind in SymbolKind::ALL {
            assert_eq!(kind.to_string().parse::<SymbolKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_symbol() {
        let err = "klystron".parse::<SymbolKind>().unwrap_err();
        assert!(matches!(err, OptisymError::UnknownSymbol(name) if name == "klystron"));
    }

    #[test]
    fn test_randomized_kinds() {
        let randomized: Vec<_> = SymbolKind::ALL
            .into_iter()
            .filter(|kind| kind.is_randomized())
            .collect();
        assert_eq!(
            randomized,
            [
                SymbolKind::OpticalSpectrumAnalyzer,
                SymbolKind::ElectricalSpectrumAnalyzer,
                SymbolKind::Oscilloscope
            ]
        );
    }

    #[test]
    fn test_size_or_falls_back_per_dimension() {
        let options = SymbolOptions::new().with_width(2.0);
        let size = options.size_or(Size::new(1.85, 1.25));
        assert_eq!(size.width(), 2.0);
        assert_eq!(size.height(), 1.25);
        assert!(options.has_size());
        assert!(!SymbolOptions::new().has_size());
    }
}
