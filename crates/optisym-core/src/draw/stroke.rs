//! Stroke definitions for symbol outlines.
//!
//! A [`StrokeDefinition`] is built once per rendered symbol from the style
//! configuration and the symbol's own params, then stamped onto every SVG
//! element with [`apply_stroke!`](crate::apply_stroke!).
//!
//! ```
//! use optisym_core::draw::{StrokeDefinition, StrokeCap};
//! use optisym_core::color::Color;
//! use svg::node::element as svg_element;
//!
//! let stroke =
//!     StrokeDefinition::new(Color::new("black").unwrap(), 1.5).with_cap(StrokeCap::Butt);
//!
//! let path = svg_element::Path::new().set("d", "M 0 0 L 10 0");
//! let path = optisym_core::apply_stroke!(path, &stroke);
//! ```

use serde::Deserialize;

use crate::color::Color;

/// SVG `stroke-linecap` of symbol lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeCap {
    Butt,
    #[default]
    Round,
    Square,
}

impl StrokeCap {
    fn svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

/// SVG `stroke-linejoin` of polygon corners and polyline bends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

impl StrokeJoin {
    fn svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

/// Stroke shared by every primitive of a rendered symbol.
///
/// Width is in SVG pixels, not drawing units; it does not scale with the
/// symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
    join: StrokeJoin,
}

impl StrokeDefinition {
    /// Round caps and joins unless overridden.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
            join: StrokeJoin::default(),
        }
    }

    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: StrokeJoin) -> Self {
        self.join = join;
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// SVG `stroke-linecap` value.
    pub fn linecap(&self) -> &'static str {
        self.cap.svg_value()
    }

    /// SVG `stroke-linejoin` value.
    pub fn linejoin(&self) -> &'static str {
        self.join.svg_value()
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 2.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width, line cap and line join.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.linecap())
            .set("stroke-linejoin", $stroke.linejoin())
    }};
}
