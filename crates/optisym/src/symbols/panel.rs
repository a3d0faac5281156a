//! Front panel shared by the instrument symbols.
//!
//! Every instrument is a default-sized rectangle with a rounded screen on the
//! left, a knob in the upper right and a column of three buttons below it.
//! The panel layout is fixed: resizing the body does not move it.

use optisym_core::{
    GeometryError,
    draw::{Circle, Polygon, SymbolBuilder},
    geometry::Point,
};

use super::rectangle;
use crate::SymbolOptions;

const SCREEN_CORNER_RADIUS: f32 = 0.25;
const KNOB_CENTER: Point = Point::new(1.6, 0.35);
const KNOB_RADIUS: f32 = 0.1;
const BUTTON_SIZE: f32 = 0.1;
const BUTTON_X: f32 = 1.55;
const BUTTON_Y: f32 = -0.5;
const BUTTON_PITCH: f32 = 0.2;
const BUTTON_COUNT: usize = 3;

/// The display area of an instrument, in the symbol's local frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Screen {
    x_offset: f32,
    y_offset: f32,
    width: f32,
    height: f32,
}

impl Screen {
    /// The screen every instrument uses.
    pub const STANDARD: Screen = Screen::new(0.2, -0.35, 1.1, 0.7);

    pub const fn new(x_offset: f32, y_offset: f32, width: f32, height: f32) -> Self {
        Self {
            x_offset,
            y_offset,
            width,
            height,
        }
    }

    /// Left edge
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Bottom edge
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rounded outline, listed clockwise from the top-left corner.
    pub fn outline(&self) -> Polygon {
        let (left, bottom) = (self.x_offset, self.y_offset);
        let (right, top) = (left + self.width, bottom + self.height);

        Polygon::new([
            Point::new(left, top),
            Point::new(right, top),
            Point::new(right, bottom),
            Point::new(left, bottom),
        ])
        .with_corner_radius(SCREEN_CORNER_RADIUS)
    }

    /// Moves raw trace samples onto the screen.
    ///
    /// The trace starts a tenth of the screen width in from the left edge;
    /// `baseline` is the height of the trace's zero line above the bottom
    /// edge.
    pub fn place(
        &self,
        raw: impl IntoIterator<Item = Point>,
        baseline: f32,
    ) -> impl Iterator<Item = Point> {
        let dx = self.x_offset + 0.1 * self.width;
        let dy = self.y_offset + baseline;
        raw.into_iter().map(move |point| point.offset(dx, dy))
    }
}

/// Screen, knob and buttons of an instrument front panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstrumentPanel {
    screen: Screen,
}

impl InstrumentPanel {
    pub fn new(screen: Screen) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Appends the screen outline, the knob and the buttons, in that order.
    pub fn decorate(&self, builder: &mut SymbolBuilder) {
        builder
            .push(self.screen.outline())
            .push(Circle::new(KNOB_CENTER, KNOB_RADIUS))
            .extend((0..BUTTON_COUNT).map(|i| {
                let corner = Point::new(BUTTON_X, BUTTON_Y + i as f32 * BUTTON_PITCH);
                Polygon::rectangle(corner, BUTTON_SIZE, BUTTON_SIZE)
            }));
    }
}

impl Default for InstrumentPanel {
    fn default() -> Self {
        Self::new(Screen::STANDARD)
    }
}

/// Starts an instrument symbol: the default rectangle with the panel drawn
/// on it, ready for its trace.
pub(crate) fn instrument(
    name: &'static str,
    options: &SymbolOptions,
) -> Result<(SymbolBuilder, InstrumentPanel), GeometryError> {
    let (mut builder, _) = rectangle::body(name, options, rectangle::DEFAULT_SIZE)?;
    let panel = InstrumentPanel::default();
    panel.decorate(&mut builder);
    Ok((builder, panel))
}
