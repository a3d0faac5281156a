//! SVG preview of a single symbol.
//!
//! The preview projects the symbol's y-up local frame onto a y-down canvas,
//! draws every primitive with one stroke, and optionally the label and
//! anchor markers. It never composes several symbols.

use log::{debug, info};
use svg::{self, node::element as svg_element};

use optisym_core::{
    color::Color,
    draw::{CanvasFrame, LabelLoc, LabelPlacement, StrokeDefinition, Symbol},
    geometry::{Bounds, Point},
};

use crate::{
    OptisymError,
    config::{StyleConfig, parse_color},
};

const ANCHOR_MARKER_RADIUS: f32 = 3.0;
const ANCHOR_MARKER_COLOR: &str = "#e6550d";
const ANCHOR_FONT_SIZE: f32 = 10.0;
const LABEL_FONT_SIZE: f32 = 14.0;
/// Space reserved around the symbol for a label drawn outside it, in
/// drawing units.
const LABEL_CLEARANCE: f32 = 0.4;

/// Renders `symbol` to a standalone SVG document.
///
/// The symbol's own `color`, `fill` and `line_width` params take precedence
/// over the style.
///
/// # Errors
///
/// Returns [`OptisymError::Style`] if a configured or symbol color cannot be
/// parsed, or if the style's scale, margin or line width cannot produce a
/// canvas.
pub fn render(symbol: &Symbol, style: &StyleConfig) -> Result<String, OptisymError> {
    style.validate().map_err(OptisymError::Style)?;

    let stroke = stroke_for(symbol, style)?;
    let fill_color = match symbol.params().fill() {
        Some(fill) => parse_color(fill).map_err(OptisymError::Style)?,
        None => stroke.color(),
    };

    let frame = CanvasFrame::new(content_bounds(symbol, style), style.scale(), style.margin());
    let size = frame.canvas_size();
    debug!(
        symbol = symbol.name(),
        width = size.width(),
        height = size.height();
        "Canvas size calculated",
    );

    let doc = svg::Document::new()
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        )
        .set("width", size.width())
        .set("height", size.height());

    let mut doc = match style.background_color().map_err(OptisymError::Style)? {
        Some(color) => doc.add(
            svg_element::Rectangle::new()
                .set("class", "background")
                .set("x", 0)
                .set("y", 0)
                .set("width", size.width())
                .set("height", size.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
        ),
        None => doc,
    };

    let mut group =
        svg_element::Group::new().set("class", format!("symbol {}", symbol.name()));
    for primitive in symbol.primitives() {
        group = group.add(primitive.render_to_svg(&frame, &stroke, fill_color));
    }
    doc = doc.add(group);

    if let Some(label) = symbol.params().label() {
        doc = doc.add(render_label(label, symbol, &frame, stroke.color()));
    }

    if style.show_anchors() {
        doc = doc.add(render_anchors(symbol, &frame));
    }

    info!(
        symbol = symbol.name(),
        primitives = symbol.primitives().len();
        "Symbol rendered to SVG",
    );
    Ok(doc.to_string())
}

fn stroke_for(symbol: &Symbol, style: &StyleConfig) -> Result<StrokeDefinition, OptisymError> {
    let params = symbol.params();
    let color = match params.color() {
        Some(color) => parse_color(color),
        None => style.line_color(),
    }
    .map_err(OptisymError::Style)?;
    let width = params.line_width().unwrap_or_else(|| style.line_width());

    Ok(StrokeDefinition::new(color, width)
        .with_cap(style.line_cap())
        .with_join(style.line_join()))
}

/// Bounds of the drawn symbol, an empty symbol collapsing to the origin.
fn symbol_bounds(symbol: &Symbol) -> Bounds {
    symbol
        .bounds()
        .unwrap_or_else(|| Bounds::from_point(Point::default()))
}

/// Everything that ends up on the canvas: primitives, anchors when shown and
/// room for an outside label.
fn content_bounds(symbol: &Symbol, style: &StyleConfig) -> Bounds {
    let mut bounds = symbol_bounds(symbol);

    if style.show_anchors() {
        bounds = symbol
            .anchors()
            .values()
            .fold(bounds, |acc, point| acc.include(*point));
    }

    let placement = symbol.label_placement();
    if symbol.params().label().is_some() && placement.loc() != LabelLoc::Center {
        bounds = bounds.expand(placement.offset().max(0.0) + LABEL_CLEARANCE);
    }

    bounds
}

/// Local position of the label plus its SVG `text-anchor` and
/// `dominant-baseline`.
fn label_position(
    bounds: Bounds,
    placement: LabelPlacement,
) -> (Point, &'static str, &'static str) {
    let center = bounds.center();
    let offset = placement.offset();

    match placement.loc() {
        LabelLoc::Top => (center.with_y(bounds.max_y() + offset), "middle", "auto"),
        LabelLoc::Bottom => (center.with_y(bounds.min_y() - offset), "middle", "hanging"),
        LabelLoc::Left => (center.with_x(bounds.min_x() - offset), "end", "central"),
        LabelLoc::Right => (center.with_x(bounds.max_x() + offset), "start", "central"),
        LabelLoc::Center => (center, "middle", "central"),
    }
}

fn render_label(
    label: &str,
    symbol: &Symbol,
    frame: &CanvasFrame,
    color: Color,
) -> svg_element::Text {
    let (position, anchor, baseline) =
        label_position(symbol_bounds(symbol), symbol.label_placement());
    let position = frame.project(position);

    svg_element::Text::new(label)
        .set("class", "label")
        .set("x", position.x())
        .set("y", position.y())
        .set("text-anchor", anchor)
        .set("dominant-baseline", baseline)
        .set("font-size", LABEL_FONT_SIZE)
        .set("fill", color.to_string())
}

fn render_anchors(symbol: &Symbol, frame: &CanvasFrame) -> svg_element::Group {
    symbol.anchors().iter().fold(
        svg_element::Group::new().set("class", "anchors"),
        |group, (name, point)| {
            let center = frame.project(*point);
            let marker = svg_element::Circle::new()
                .set("class", "anchor")
                .set("cx", center.x())
                .set("cy", center.y())
                .set("r", ANCHOR_MARKER_RADIUS)
                .set("fill", ANCHOR_MARKER_COLOR);
            let name = svg_element::Text::new(name.as_str())
                .set("class", "anchor-name")
                .set("x", center.x() + ANCHOR_MARKER_RADIUS)
                .set("y", center.y() - ANCHOR_MARKER_RADIUS)
                .set("font-size", ANCHOR_FONT_SIZE)
                .set("fill", ANCHOR_MARKER_COLOR);
            group.add(marker).add(name)
        },
    )
}
