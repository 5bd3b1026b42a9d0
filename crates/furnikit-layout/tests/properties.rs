//! Property-based tests for the engine invariants.

use furnikit_catalog::ProductRegistry;
use furnikit_core::{Dimensions, MaterialChoice, MaterialLibrary};
use furnikit_layout::{
    compute_divider_positions, compute_layout, divider_count, product_bounds, resolve_positions,
    total_height, validate, Density, ProductConfiguration, RowHeight, StyleName, StyleRegistry,
};
use proptest::prelude::*;

fn any_style() -> impl Strategy<Value = StyleName> {
    prop_oneof![
        Just(StyleName::Grid),
        Just(StyleName::Asymmetric),
        Just(StyleName::Staggered),
        Just(StyleName::Minimal),
        Just(StyleName::Mosaic),
        Just(StyleName::Pattern),
        Just(StyleName::Slant),
        Just(StyleName::Gradient),
    ]
}

fn any_density() -> impl Strategy<Value = Density> {
    prop_oneof![Just(Density::Low), Just(Density::Medium), Just(Density::High)]
}

fn any_row_height() -> impl Strategy<Value = RowHeight> {
    prop_oneof![
        Just(RowHeight::Small),
        Just(RowHeight::Medium),
        Just(RowHeight::Large),
        (10.0_f64..60.0).prop_map(RowHeight::Custom),
    ]
}

proptest! {
    /// Identical inputs always yield identical divider positions.
    #[test]
    fn divider_positions_deterministic(
        style in any_style(),
        width in 10.0_f64..320.0,
        height in 25.0_f64..275.0,
        density in any_density(),
    ) {
        let styles = StyleRegistry::standard();
        let def = styles.get(style).unwrap();
        let a = compute_divider_positions(def, width, height, density);
        let b = compute_divider_positions(def, width, height, density);
        prop_assert_eq!(a, b);
    }

    /// Grid gaps are all equal and inside the declared gap band.
    #[test]
    fn grid_gaps_equal_and_bounded(
        width in 18.0_f64..320.0,
        density in any_density(),
    ) {
        let styles = StyleRegistry::standard();
        let def = styles.get(StyleName::Grid).unwrap();
        let count = divider_count(def, width, density);
        let positions = compute_divider_positions(def, width, 200.0, density);
        prop_assert_eq!(positions.len(), count);

        if count > 0 {
            let mut edges = vec![0.0];
            edges.extend(positions.iter().map(|p| p.x));
            edges.push(width);
            let first_gap = edges[1] - edges[0];
            for pair in edges.windows(2) {
                let gap = pair[1] - pair[0];
                prop_assert!((gap - first_gap).abs() < 1e-9);
                prop_assert!(gap >= def.min_gap - 1e-9);
                prop_assert!(gap <= def.max_gap + 1e-9);
            }
        }
    }

    /// Row resolution starts at zero and increases strictly.
    #[test]
    fn row_positions_strictly_increasing(
        rows in prop::collection::vec(any_row_height(), 1..8),
    ) {
        let positions = resolve_positions(&rows);
        prop_assert_eq!(positions[0], 0.0);
        prop_assert_eq!(positions.len(), rows.len() + 1);
        for pair in positions.windows(2) {
            prop_assert!(pair[1] > pair[0]);
        }
    }

    /// The resolver and the height sum agree for any row sequence.
    #[test]
    fn total_height_matches_last_position(
        rows in prop::collection::vec(any_row_height(), 0..8),
    ) {
        let positions = resolve_positions(&rows);
        prop_assert!((total_height(&rows) - positions.last().unwrap()).abs() < 1e-9);
    }

    /// Every in-range cabinet request at the declared increments
    /// validates, and every assembled component stays inside the
    /// bounding box implied by the dimensions.
    #[test]
    fn cabinet_components_stay_in_bounds(
        width_steps in 0_u32..260,
        height_steps in 1_u32..11,
        depth_steps in 0_u32..44,
        style in any_style(),
    ) {
        let registry = ProductRegistry::standard();
        let library = MaterialLibrary::standard();
        let styles = StyleRegistry::standard();
        let profile = registry.get("bookcase").unwrap();

        let dims = Dimensions::new(
            40.0 + width_steps as f64,
            25.0 * height_steps as f64,
            16.0 + depth_steps as f64,
        );
        let mut config = ProductConfiguration::new(
            "bookcase",
            dims,
            MaterialChoice::new("oak-veneer", "oak"),
        );
        config.style = style;
        config.row_heights = furnikit_layout::derive_row_heights(dims.height, RowHeight::Medium);

        let validated = validate(profile, &library, &styles, &config);
        prop_assert!(validated.is_ok(), "rejected: {:?}", validated.err());
        let validated = validated.unwrap();
        let result = compute_layout(profile, &styles, &validated);
        prop_assert!(result.is_ok(), "layout failed: {:?}", result.err());
        let result = result.unwrap();

        let bounds = product_bounds(profile, dims);
        for c in &result.components {
            prop_assert!(
                bounds.contains(c.position),
                "{} at {} escapes {:?}",
                c.label, c.position, bounds
            );
        }

        // Material groups partition the component list.
        let grouped: usize = result
            .material_groups
            .iter()
            .map(|g| g.component_ids.len())
            .sum();
        prop_assert_eq!(grouped, result.components.len());
    }
}
