//! Integration tests for the Catalog API
//!
//! These tests verify that the public API works and is usable.

use optisym::{
    Catalog, OptisymError, SymbolKind, SymbolOptions,
    config::AppConfig,
    draw::{ElementParams, LabelLoc, Primitive},
    geometry::Point,
};

#[test]
fn test_catalog_api_exists() {
    // Just verify the API compiles and can be constructed
    let _catalog = Catalog::default();
}

#[test]
fn test_build_and_render_every_symbol() {
    let mut catalog = Catalog::default();

    for kind in SymbolKind::ALL {
        let symbol = catalog
            .build(kind, &SymbolOptions::default())
            .unwrap_or_else(|err| panic!("Failed to build {kind}: {err}"));
        let svg = catalog
            .render_svg(&symbol)
            .unwrap_or_else(|err| panic!("Failed to render {kind}: {err}"));

        assert!(svg.contains("<svg"), "Output should contain SVG tag");
        assert!(svg.contains("</svg>"), "Output should be complete SVG");
    }
}

#[test]
fn test_build_from_alias() {
    let kind: SymbolKind = "osa".parse().expect("alias should parse");
    let mut catalog = Catalog::new(AppConfig::default().with_seed(3));

    let symbol = catalog
        .build(kind, &SymbolOptions::default())
        .expect("Failed to build OSA");
    let Some(Primitive::Segment(trace)) = symbol.primitives().last() else {
        panic!("OSA should end with its trace");
    };
    assert_eq!(trace.points().len(), 150);
}

#[test]
fn test_unknown_symbol_name() {
    let result = "transponder".parse::<SymbolKind>();
    assert!(matches!(result, Err(OptisymError::UnknownSymbol(_))));
}

#[test]
fn test_rectangle_anchors_after_resize() {
    let mut catalog = Catalog::default();
    let options = SymbolOptions::new().with_size(2.0, 1.0);

    let symbol = catalog
        .build(SymbolKind::Rectangle, &options)
        .expect("Failed to build rectangle");

    assert_eq!(symbol.anchor("E"), Some(Point::new(2.0, 0.0)));
    assert_eq!(symbol.anchor("S"), Some(Point::new(1.0, -0.5)));
}

#[test]
fn test_voa_circle() {
    let mut catalog = Catalog::default();
    let symbol = catalog
        .build(SymbolKind::Voa, &SymbolOptions::default())
        .expect("Failed to build VOA");

    let circle = symbol
        .primitives()
        .iter()
        .find_map(|p| match p {
            Primitive::Circle(circle) => Some(*circle),
            _ => None,
        })
        .expect("VOA should contain a circle");
    assert_eq!(circle.center(), Point::new(0.5, 0.0));
    assert!((circle.radius() - 0.3).abs() < 1e-6);
}

#[test]
fn test_zero_size_rejected_for_rectangular_symbols() {
    let mut catalog = Catalog::default();

    for kind in SymbolKind::ALL {
        let result = catalog.build(kind, &SymbolOptions::new().with_height(0.0));
        let fixed_length = matches!(kind, SymbolKind::Fiber | SymbolKind::PolarizationController);
        assert_eq!(result.is_ok(), fixed_length, "{kind}");
    }
}

#[test]
fn test_params_pass_through() {
    let params = ElementParams::new()
        .with_label("Rx")
        .with_label_loc(LabelLoc::Bottom)
        .with_extra("zorder", "5");
    let options = SymbolOptions::new().with_params(params.clone());

    let mut catalog = Catalog::default();
    let symbol = catalog
        .build(SymbolKind::Photodetector, &options)
        .expect("Failed to build photodetector");

    assert_eq!(symbol.params(), &params);
    assert_eq!(symbol.label_placement().loc(), LabelLoc::Bottom);

    let svg = catalog.render_svg(&symbol).expect("Failed to render");
    assert!(svg.contains("Rx"));
}

#[test]
fn test_catalog_reusability() {
    let mut catalog = Catalog::default();

    let first = catalog
        .build(SymbolKind::Modulator, &SymbolOptions::default())
        .expect("Failed to build first modulator");
    let second = catalog
        .build(SymbolKind::Modulator, &SymbolOptions::default())
        .expect("Failed to build second modulator");

    assert_eq!(first, second);
}
