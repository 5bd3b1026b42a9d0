//! End-to-end pipeline tests covering the documented scenarios.

use furnikit_catalog::{LegStyle, ProductRegistry, TopShape};
use furnikit_core::{
    ConstraintViolation, Dimensions, Error, MaterialChoice, MaterialLibrary, Position,
};
use furnikit_layout::{
    build_compartments, compute_layout, layout_rows, resolve_positions, total_height, validate,
    ComponentKind, CompartmentType, ProductConfiguration, RowHeight, StyleName, StyleRegistry,
};

fn setup() -> (ProductRegistry, MaterialLibrary, StyleRegistry) {
    (
        ProductRegistry::standard(),
        MaterialLibrary::standard(),
        StyleRegistry::standard(),
    )
}

#[test]
fn test_row_resolution_scenario() {
    let rows = [RowHeight::Small, RowHeight::Medium, RowHeight::Large];
    assert_eq!(resolve_positions(&rows), vec![0.0, 25.0, 60.0, 105.0]);
    assert_eq!(total_height(&rows), 105.0);
}

#[test]
fn test_rectangular_table_leg_scenario() {
    let (registry, library, styles) = setup();
    let profile = registry.get("dining-table").unwrap();
    let mut config = ProductConfiguration::new(
        "dining-table",
        Dimensions::new(120.0, 75.0, 200.0),
        MaterialChoice::new("oak-solid", "oak"),
    );
    config.top_shape = TopShape::Rectangular;
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();

    let mut leg_positions: Vec<(f64, f64, f64)> = result
        .components
        .iter()
        .filter(|c| c.kind == ComponentKind::Leg)
        .map(|c| (c.position.x, c.position.y, c.position.z))
        .collect();
    leg_positions.sort_by(|a, b| a.partial_cmp(b).unwrap());

    // Standard leg position is a 5 cm inset: (±(60-5), -height/2, ±(100-5))
    assert_eq!(
        leg_positions,
        vec![
            (-55.0, -37.5, -95.0),
            (-55.0, -37.5, 95.0),
            (55.0, -37.5, -95.0),
            (55.0, -37.5, 95.0),
        ]
    );
}

#[test]
fn test_round_pedestal_scenario() {
    let (registry, library, styles) = setup();
    let profile = registry.get("dining-table").unwrap();
    let mut config = ProductConfiguration::new(
        "dining-table",
        Dimensions::new(150.0, 75.0, 150.0),
        MaterialChoice::new("walnut-solid", "walnut"),
    );
    config.top_shape = TopShape::Round;
    config.leg_style = LegStyle::Pedestal;
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();

    let legs: Vec<&furnikit_layout::ProductComponent> = result
        .components
        .iter()
        .filter(|c| c.kind == ComponentKind::Leg)
        .collect();
    assert_eq!(legs.len(), 1);
    assert_eq!(legs[0].position, Position::new(0.0, -37.5, 0.0));
}

#[test]
fn test_material_grouping_scenario() {
    let (registry, library, styles) = setup();
    let profile = registry.get("bookcase").unwrap();
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 30.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];
    // One walnut-fronted door among oak components.
    config.front_material = MaterialChoice::new("oak-veneer", "walnut");
    config.compartments = vec![vec![CompartmentType::Door]];
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();

    assert_eq!(result.material_groups.len(), 2);
    // First-seen order: the oak carcass precedes the walnut front.
    assert_eq!(result.material_groups[0].color, "oak");
    assert_eq!(result.material_groups[1].color, "walnut");
    assert_eq!(result.material_groups[1].component_ids.len(), 1);
    let total: usize = result
        .material_groups
        .iter()
        .map(|g| g.component_ids.len())
        .sum();
    assert_eq!(total, result.components.len());
}

#[test]
fn test_shallow_drawer_cell_rejected_by_builder() {
    let (registry, library, styles) = setup();
    let profile = registry.get("bookcase").unwrap();

    // Depth 21: the validator's check against depth minus the back panel
    // (20.2 cm) passes, but the resolved cell depth after the drawer
    // front (18.6 cm) is below the 20 cm minimum.
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 21.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];
    config.compartments = vec![vec![CompartmentType::Drawer]];
    let validated = validate(profile, &library, &styles, &config).unwrap();

    let rules = profile.cabinet_rules().unwrap();
    let def = styles.get(StyleName::Grid).unwrap();
    let inner = config.dimensions.width - 2.0 * rules.panel_thickness;
    let layout = layout_rows(def, inner, config.density, &config.row_heights);
    let positions = resolve_positions(&config.row_heights);

    let violations =
        build_compartments(profile, &validated, &layout, &positions, &[]).unwrap_err();
    // The violation names the exact cell; the drawer is never silently
    // downgraded to an open compartment.
    assert!(violations.iter().any(|v| matches!(
        v,
        ConstraintViolation::DrawerTooShallow { row: 0, column: 0, min_depth, actual }
            if *min_depth == 20.0 && (*actual - 18.6).abs() < 1e-9
    )));

    // The pipeline surfaces the same violations as a constraint error.
    let err = compute_layout(profile, &styles, &validated).unwrap_err();
    assert!(matches!(err, Error::Constraint(_)));
    assert!(!err.violations().is_empty());
}

#[test]
fn test_compartment_bounds_derive_from_grid() {
    let (registry, library, styles) = setup();
    let profile = registry.get("bookcase").unwrap();
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 30.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();

    let rules = profile.cabinet_rules().unwrap();
    for compartment in &result.compartments {
        let size = compartment.bounds.size();
        assert!(size.width > 0.0);
        // Each cell is exactly one row tall.
        assert!((size.height - 35.0).abs() < 1e-9);
        // Cells sit between the back panel and the front face.
        assert!((size.depth - (30.0 - rules.back_thickness)).abs() < 1e-9);
    }

    // 5 rows x 3 columns for this width at medium density.
    assert_eq!(result.compartments.len(), 15);
    let rows = result.compartments.iter().map(|c| c.row).max().unwrap();
    assert_eq!(rows, 4);
}

#[test]
fn test_staggered_style_produces_offset_dividers() {
    let (registry, library, styles) = setup();
    let profile = registry.get("bookcase").unwrap();
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 30.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];
    config.style = StyleName::Staggered;
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();

    // Dividers in odd rows sit a quarter row height above the even rows.
    let row0_y: Vec<f64> = divider_ys(&result.components, 0);
    let row1_y: Vec<f64> = divider_ys(&result.components, 1);
    assert!(!row0_y.is_empty());
    assert_eq!(row0_y.len(), row1_y.len());
    let offset = row1_y[0] - row0_y[0];
    assert!((offset - (35.0 + 0.25 * 35.0)).abs() < 1e-9);
}

fn divider_ys(components: &[furnikit_layout::ProductComponent], row: usize) -> Vec<f64> {
    let prefix = format!("divider-{}-", row);
    components
        .iter()
        .filter(|c| c.label.starts_with(&prefix))
        .map(|c| c.position.y)
        .collect()
}

#[test]
fn test_table_ignores_cabinet_only_inputs() {
    let (registry, library, styles) = setup();
    let profile = registry.get("dining-table").unwrap();
    let mut config = ProductConfiguration::new(
        "dining-table",
        Dimensions::new(120.0, 75.0, 200.0),
        MaterialChoice::new("oak-solid", "oak"),
    );
    config.density = furnikit_layout::Density::High;
    let validated = validate(profile, &library, &styles, &config).unwrap();
    let result = compute_layout(profile, &styles, &validated).unwrap();
    assert!(result.compartments.is_empty());
    assert!(result
        .components
        .iter()
        .all(|c| c.kind != ComponentKind::Divider));
}
