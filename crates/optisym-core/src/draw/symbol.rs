//! The [`Symbol`] value object and the builder symbol constructors use.
//!
//! A symbol is an ordered list of [`Primitive`]s, a map of named anchors, an
//! optional drop point and label placement hints. Constructors assemble one
//! through a [`SymbolBuilder`] and hand out the finished, immutable
//! [`Symbol`].

use std::{collections::BTreeMap, fmt, str::FromStr};

use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;

use crate::{
    draw::Primitive,
    geometry::{Bounds, Point},
};

/// Where a label sits relative to its symbol.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLoc {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

impl FromStr for LabelLoc {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" | "bot" => Ok(Self::Bottom),
            "left" | "lft" => Ok(Self::Left),
            "right" | "rgt" => Ok(Self::Right),
            "center" => Ok(Self::Center),
            _ => Err(format!(
                "invalid label location `{s}`, valid values: top, bottom, left, right, center"
            )),
        }
    }
}

/// Label placement hint handed to the rendering engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    loc: LabelLoc,
    offset: f32,
}

impl LabelPlacement {
    pub fn new(loc: LabelLoc, offset: f32) -> Self {
        Self { loc, offset }
    }

    /// Label centered on the symbol body with no offset.
    pub fn center() -> Self {
        Self::new(LabelLoc::Center, 0.0)
    }

    pub fn loc(&self) -> LabelLoc {
        self.loc
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }
}

impl Default for LabelPlacement {
    fn default() -> Self {
        Self::new(LabelLoc::Top, 0.1)
    }
}

/// Scalar value of a pass-through option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Options forwarded untouched from a symbol constructor to its base shape.
///
/// Known keys are typed; any other scalar lands in `extra` so callers can pass
/// engine-specific options through the catalog. Explicit label options take
/// precedence over the placement a symbol picks for itself.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ElementParams {
    color: Option<String>,
    fill: Option<String>,
    line_width: Option<f32>,
    label: Option<String>,
    label_loc: Option<LabelLoc>,
    label_offset: Option<f32>,
    #[serde(flatten)]
    extra: BTreeMap<String, ParamValue>,
}

impl ElementParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = Some(width);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_loc(mut self, loc: LabelLoc) -> Self {
        self.label_loc = Some(loc);
        self
    }

    pub fn with_label_offset(mut self, offset: f32) -> Self {
        self.label_offset = Some(offset);
        self
    }

    /// Adds an option this library does not interpret.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }

    pub fn line_width(&self) -> Option<f32> {
        self.line_width
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn label_loc(&self) -> Option<LabelLoc> {
        self.label_loc
    }

    pub fn label_offset(&self) -> Option<f32> {
        self.label_offset
    }

    pub fn extra(&self) -> &BTreeMap<String, ParamValue> {
        &self.extra
    }
}

/// A finished schematic symbol.
///
/// Symbols are value objects: once built, primitives and anchors are only
/// readable.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    name: &'static str,
    primitives: Vec<Primitive>,
    anchors: IndexMap<String, Point>,
    drop: Option<Point>,
    label: LabelPlacement,
    params: ElementParams,
}

impl Symbol {
    /// Name of the symbol type this was built as
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Anchors in insertion order
    pub fn anchors(&self) -> &IndexMap<String, Point> {
        &self.anchors
    }

    pub fn anchor(&self, name: &str) -> Option<Point> {
        self.anchors.get(name).copied()
    }

    /// Where the next element of a chain should start
    pub fn drop_point(&self) -> Option<Point> {
        self.drop
    }

    /// Effective label placement, with explicit params overriding the
    /// symbol's own choice.
    pub fn label_placement(&self) -> LabelPlacement {
        LabelPlacement::new(
            self.params.label_loc().unwrap_or(self.label.loc()),
            self.params.label_offset().unwrap_or(self.label.offset()),
        )
    }

    pub fn params(&self) -> &ElementParams {
        &self.params
    }

    /// Union of the bounds of every primitive, `None` if nothing is drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        self.primitives
            .iter()
            .filter_map(Primitive::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

/// Mutable staging area for a [`Symbol`].
///
/// Base shapes return a builder; decorated symbols append their own
/// primitives before calling [`SymbolBuilder::build`].
#[derive(Debug, Clone)]
pub struct SymbolBuilder {
    name: &'static str,
    primitives: Vec<Primitive>,
    anchors: IndexMap<String, Point>,
    drop: Option<Point>,
    label: LabelPlacement,
    params: ElementParams,
}

impl SymbolBuilder {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            primitives: Vec::new(),
            anchors: IndexMap::new(),
            drop: None,
            label: LabelPlacement::default(),
            params: ElementParams::default(),
        }
    }

    /// Renames the symbol, used when a decorated symbol reuses a base shape.
    pub fn rename(&mut self, name: &'static str) -> &mut Self {
        self.name = name;
        self
    }

    pub fn push(&mut self, primitive: impl Into<Primitive>) -> &mut Self {
        self.primitives.push(primitive.into());
        self
    }

    pub fn extend<P: Into<Primitive>>(
        &mut self,
        primitives: impl IntoIterator<Item = P>,
    ) -> &mut Self {
        self.primitives.extend(primitives.into_iter().map(Into::into));
        self
    }

    /// Sets an anchor, replacing any earlier anchor of the same name.
    pub fn set_anchor(&mut self, name: impl Into<String>, point: Point) -> &mut Self {
        self.anchors.insert(name.into(), point);
        self
    }

    pub fn set_drop(&mut self, point: Point) -> &mut Self {
        self.drop = Some(point);
        self
    }

    pub fn set_label(&mut self, placement: LabelPlacement) -> &mut Self {
        self.label = placement;
        self
    }

    pub fn set_params(&mut self, params: ElementParams) -> &mut Self {
        self.params = params;
        self
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn anchor(&self, name: &str) -> Option<Point> {
        self.anchors.get(name).copied()
    }

    pub fn build(self) -> Symbol {
        debug!(
            symbol = self.name,
            primitives = self.primitives.len(),
            anchors = self.anchors.len();
            "Symbol built",
        );

        Symbol {
            name: self.name,
            primitives: self.primitives,
            anchors: self.anchors,
            drop: self.drop,
            label: self.label,
            params: self.params,
        }
    }
}
