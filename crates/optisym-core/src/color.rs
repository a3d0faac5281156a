//! Color handling for optisym symbols
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate, and the [`palette`] of signal-path colors used when
//! drawing optical, RF and electrical connections.

use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// Wrapper around the `DynamicColor` type from the color crate
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use optisym_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Self { color }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the alpha (transparency) component of this color, between
    /// 0.0 (fully transparent) and 1.0 (fully opaque).
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

/// Colors conventionally used for the three kinds of signal path in a
/// communications schematic.
pub mod palette {
    use super::Color;

    /// CSS value of the optical path color.
    pub const OPTICAL: &str = "#1f77b4";
    /// CSS value of the RF path color.
    pub const RF: &str = "#d62728";
    /// CSS value of the electrical path color.
    pub const ELECTRICAL: &str = "#000000";

    /// Blue used for fiber and free-space optical connections.
    pub fn optical() -> Color {
        Color::new(OPTICAL).expect("palette colors are valid CSS")
    }

    /// Red used for RF connections.
    pub fn rf() -> Color {
        Color::new(RF).expect("palette colors are valid CSS")
    }

    /// Black used for plain electrical connections.
    pub fn electrical() -> Color {
        Color::new(ELECTRICAL).expect("palette colors are valid CSS")
    }

    /// Looks up a signal-path color by name (`optical`, `rf`, `electrical`).
    pub fn by_name(name: &str) -> Option<Color> {
        match name {
            "optical" => Some(optical()),
            "rf" => Some(rf()),
            "electrical" => Some(electrical()),
            _ => None,
        }
    }
}
