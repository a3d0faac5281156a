//! Drawing vocabulary shared by every symbol.
//!
//! - [`Primitive`] and its variants ([`Segment`], [`Polygon`], [`Circle`], [`Arc`])
//! - [`Symbol`], the immutable result of a symbol builder, and [`SymbolBuilder`]
//! - [`ElementParams`], the pass-through options forwarded to a symbol
//! - [`StrokeDefinition`] and [`CanvasFrame`] for SVG output

mod frame;
mod primitive;
mod stroke;
mod symbol;

pub use frame::CanvasFrame;
pub use primitive::{Arc, Arrowhead, Circle, Polygon, Primitive, Segment};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin};
pub use symbol::{ElementParams, LabelLoc, LabelPlacement, ParamValue, Symbol, SymbolBuilder};
