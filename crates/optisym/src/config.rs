//! Configuration types for optisym symbol building and preview rendering.
//!
//! All types implement [`serde::Deserialize`] for loading from external
//! sources such as a TOML file.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the RNG seed, default
//!   symbol params and style settings.
//! - [`StyleConfig`] - Controls how the SVG preview is drawn.
//!
//! # Example
//!
//! ```
//! # use optisym::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.seed().is_none());
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use optisym_core::{
    color::{Color, palette},
    draw::{ElementParams, StrokeCap, StrokeJoin},
};

const DEFAULT_LINE_WIDTH: f32 = 2.0;
const DEFAULT_SCALE: f32 = 64.0;
const DEFAULT_MARGIN: f32 = 16.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Seed for the trace RNG. Unset means a fresh seed per catalog.
    #[serde(default)]
    seed: Option<u64>,

    /// Params handed to every symbol unless the caller overrides them.
    #[serde(default)]
    params: ElementParams,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`].
    ///
    /// # Arguments
    ///
    /// * `seed` - Optional seed making randomized traces reproducible.
    /// * `style` - Preview styling options.
    pub fn new(seed: Option<u64>, style: StyleConfig) -> Self {
        Self {
            seed,
            params: ElementParams::default(),
            style,
        }
    }

    /// Returns a copy of this configuration with the given seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_params(mut self, params: ElementParams) -> Self {
        self.params = params;
        self
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Default pass-through params from the `[params]` section.
    pub fn params(&self) -> &ElementParams {
        &self.params
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Visual styling for the SVG preview.
///
/// Colors accept any CSS color string or one of the signal-path palette names
/// (`optical`, `rf`, `electrical`). Fields that are not set fall back to
/// renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    line_color: Option<String>,

    /// Stroke width in pixels.
    #[serde(default)]
    line_width: Option<f32>,

    #[serde(default)]
    line_cap: Option<StrokeCap>,

    #[serde(default)]
    line_join: Option<StrokeJoin>,

    #[serde(default)]
    background_color: Option<String>,

    /// Pixels per drawing unit.
    #[serde(default)]
    scale: Option<f32>,

    /// Pixels of empty space around the symbol.
    #[serde(default)]
    margin: Option<f32>,

    /// Draws a marker and name at every anchor.
    #[serde(default)]
    show_anchors: bool,
}

impl StyleConfig {
    pub fn with_line_color(mut self, color: impl Into<String>) -> Self {
        self.line_color = Some(color.into());
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_line_cap(mut self, cap: StrokeCap) -> Self {
        self.line_cap = Some(cap);
        self
    }

    pub fn with_line_join(mut self, join: StrokeJoin) -> Self {
        self.line_join = Some(join);
        self
    }

    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_show_anchors(mut self, show: bool) -> Self {
        self.show_anchors = show;
        self
    }

    /// Returns the parsed line [`Color`], black when unset.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn line_color(&self) -> Result<Color, String> {
        self.line_color
            .as_deref()
            .map(parse_color)
            .transpose()
            .map(Option::unwrap_or_default)
            .map_err(|err| format!("Invalid line color in config: {err}"))
    }

    pub fn line_width(&self) -> f32 {
        self.line_width.unwrap_or(DEFAULT_LINE_WIDTH)
    }

    pub fn line_cap(&self) -> StrokeCap {
        self.line_cap.unwrap_or_default()
    }

    pub fn line_join(&self) -> StrokeJoin {
        self.line_join.unwrap_or_default()
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(parse_color)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    pub fn scale(&self) -> f32 {
        self.scale.unwrap_or(DEFAULT_SCALE)
    }

    pub fn margin(&self) -> f32 {
        self.margin.unwrap_or(DEFAULT_MARGIN)
    }

    pub fn show_anchors(&self) -> bool {
        self.show_anchors
    }

    /// Checks the numeric settings a canvas can be built from.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first setting that is not finite, or
    /// that is non-positive (`scale`) or negative (`margin`, `line_width`).
    pub fn validate(&self) -> Result<(), String> {
        let scale = self.scale();
        if !(scale.is_finite() && scale > 0.0) {
            return Err(format!("Scale must be positive, got {scale}"));
        }

        let lengths = [
            ("Margin", self.margin()),
            ("Line width", self.line_width()),
        ];
        for (name, value) in lengths {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be non-negative, got {value}"));
            }
        }
        Ok(())
    }
}

/// Parses a palette name or a CSS color string.
pub(crate) fn parse_color(value: &str) -> Result<Color, String> {
    palette::by_name(value).map_or_else(|| Color::new(value), Ok)
}
