//! Optisym Core Types and Definitions
//!
//! This crate provides the foundational types shared by the optisym symbol
//! catalog. It includes:
//!
//! - **Geometry**: Points, sizes and bounding boxes ([`geometry`] module)
//! - **Colors**: Color handling with CSS color support and the signal palette ([`color::Color`])
//! - **Draw**: Drawing primitives, strokes and the [`draw::Symbol`] value object ([`draw`] module)
//! - **Errors**: The [`GeometryError`] raised for degenerate symbol dimensions

pub mod color;
pub mod draw;
pub mod geometry;

mod error;

pub use error::GeometryError;
