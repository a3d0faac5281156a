//! The rectangular body shared by most symbols.

use optisym_core::{
    GeometryError,
    draw::{LabelPlacement, Polygon, Symbol, SymbolBuilder},
    geometry::{Point, Size},
};

use crate::SymbolOptions;

/// Size of a plain [`rectangle`] and of every instrument panel.
pub const DEFAULT_SIZE: Size = Size::new(1.85, 1.25);

/// Builds the rectangular body other symbols decorate.
///
/// The body spans `x ∈ [0, w]`, `y ∈ [-h/2, h/2]` and carries the compass
/// anchors `N`, `S`, `E`, `W`. The drop point is `E` and the label is
/// centered on the body.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] unless both dimensions are
/// finite and positive.
pub fn base(size: Size) -> Result<SymbolBuilder, GeometryError> {
    let size = GeometryError::check_size(size)?;
    let (w, h) = (size.width(), size.height());

    let mut builder = SymbolBuilder::new("rectangle");
    builder
        .push(Polygon::new([
            Point::new(0.0, -h / 2.0),
            Point::new(w, -h / 2.0),
            Point::new(w, h / 2.0),
            Point::new(0.0, h / 2.0),
            Point::new(0.0, -h / 2.0),
        ]))
        .set_anchor("N", Point::new(w / 2.0, h / 2.0))
        .set_anchor("S", Point::new(w / 2.0, -h / 2.0))
        .set_anchor("E", Point::new(w, 0.0))
        .set_anchor("W", Point::new(0.0, 0.0))
        .set_drop(Point::new(w, 0.0))
        .set_label(LabelPlacement::center());

    Ok(builder)
}

/// Starts a decorated symbol: the body at the requested size, falling back
/// to `default_size`, renamed and carrying the caller's params.
pub(crate) fn body(
    name: &'static str,
    options: &SymbolOptions,
    default_size: Size,
) -> Result<(SymbolBuilder, Size), GeometryError> {
    let size = options.size_or(default_size);
    let mut builder = base(size)?;
    builder.rename(name).set_params(options.params().clone());
    Ok((builder, size))
}

/// A plain rectangle, 1.85 × 1.25 unless overridden.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidGeometry`] for a degenerate size.
pub fn rectangle(options: &SymbolOptions) -> Result<Symbol, GeometryError> {
    let (builder, _) = body("rectangle", options, DEFAULT_SIZE)?;
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use optisym_core::draw::{ElementParams, LabelLoc, Primitive};

    use super::*;

    #[test]
    fn test_default_rectangle() {
        let symbol = rectangle(&SymbolOptions::default()).unwrap();

        assert_eq!(symbol.name(), "rectangle");
        assert_eq!(symbol.primitives().len(), 1);
        let Primitive::Polygon(outline) = &symbol.primitives()[0] else {
            panic!("expected polygon outline");
        };
        assert_eq!(outline.points().len(), 5);
        assert_eq!(outline.points()[0], Point::new(0.0, -0.625));
        assert_eq!(outline.points()[2], Point::new(1.85, 0.625));
        assert_eq!(outline.vertices().len(), 4);
    }

    #[test]
    fn test_anchor_order_and_positions() {
        let symbol = rectangle(&SymbolOptions::new().with_size(2.0, 1.0)).unwrap();

        let names: Vec<_> = symbol.anchors().keys().map(String::as_str).collect();
        assert_eq!(names, ["N", "S", "E", "W"]);
        assert_eq!(symbol.anchor("E"), Some(Point::new(2.0, 0.0)));
        assert_eq!(symbol.anchor("N"), Some(Point::new(1.0, 0.5)));
        assert_eq!(symbol.drop_point(), symbol.anchor("E"));
    }

    #[test]
    fn test_label_centered() {
        let symbol = rectangle(&SymbolOptions::default()).unwrap();
        assert_eq!(symbol.label_placement(), LabelPlacement::center());
    }

    #[test]
    fn test_params_forwarded() {
        let params = ElementParams::new()
            .with_label("Tx")
            .with_label_loc(LabelLoc::Top)
            .with_extra("zorder", "2");
        let symbol = rectangle(&SymbolOptions::new().with_params(params.clone())).unwrap();

        assert_eq!(symbol.params(), &params);
        assert_eq!(symbol.label_placement().loc(), LabelLoc::Top);
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = rectangle(&SymbolOptions::new().with_width(0.0)).unwrap_err();
        assert_eq!(
            err,
            GeometryError::InvalidGeometry {
                width: 0.0,
                height: 1.25
            }
        );
    }

    #[test]
    fn test_nan_height_rejected() {
        assert!(base(Size::new(1.0, f32::NAN)).is_err());
    }
}
