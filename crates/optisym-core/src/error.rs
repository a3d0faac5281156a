//! Error type for symbol geometry.

use thiserror::Error;

use crate::geometry::Size;

/// Raised when a symbol is asked for dimensions it cannot be drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid geometry: width {width} and height {height} must both be finite and positive")]
    InvalidGeometry { width: f32, height: f32 },
}

impl GeometryError {
    /// Checks that both dimensions of `size` are finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidGeometry`] carrying the offending size
    /// otherwise. NaN is rejected along with zero and negative values.
    pub fn check_size(size: Size) -> Result<Size, Self> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if valid(size.width()) && valid(size.height()) {
            Ok(size)
        } else {
            Err(Self::InvalidGeometry {
                width: size.width(),
                height: size.height(),
            })
        }
    }
}
