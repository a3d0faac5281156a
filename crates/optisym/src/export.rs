//! Export of built symbols to viewable formats.
//!
//! # Available Backends
//!
//! - [`svg`]: a standalone SVG preview of one symbol, see [`svg::render`]
//!
//! Symbols are rendered in memory; writing the result anywhere is up to the
//! caller.

/// SVG export backend.
pub mod svg;
