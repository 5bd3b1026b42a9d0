//! The layout pipeline.
//!
//! Runs the full derivation for a validated configuration: style layout
//! and row resolution, component assembly, compartment building, and
//! material grouping. Invoked on every configuration edit; every stage is
//! pure and synchronous, so the pipeline can be re-run cheaply and
//! called concurrently from multiple threads without locking.

use furnikit_catalog::{ProductProfile, ProductRules};
use furnikit_core::{Error, LayoutError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assembler::{assemble, ProductComponent};
use crate::compartments::{build_compartments, Compartment};
use crate::grouping::{group_by_material, MaterialGroup};
use crate::rows::resolve_positions;
use crate::styles::{layout_rows, DividerLayout, StyleRegistry};
use crate::validator::ValidatedConfig;

/// Everything the pipeline derives from one configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// The full structural component list
    pub components: Vec<ProductComponent>,
    /// The compartment grid (empty for tables and consoles)
    pub compartments: Vec<Compartment>,
    /// Components grouped by (material, color)
    pub material_groups: Vec<MaterialGroup>,
}

/// Compute the full layout for a validated configuration.
///
/// Deterministic and side-effect-free: identical inputs yield identical
/// positions, dimensions, compartments, and groups (component ids are
/// fresh per run). Constraint violations discovered during compartment
/// building surface as [`Error::Constraint`]; internal inconsistencies
/// fail fast as [`Error::Layout`].
pub fn compute_layout(
    profile: &ProductProfile,
    styles: &StyleRegistry,
    validated: &ValidatedConfig,
) -> Result<LayoutResult> {
    let config = validated.config();

    let (layout, row_positions) = match &profile.rules {
        ProductRules::Cabinet(rules) => {
            let def = styles
                .get(config.style)
                .ok_or_else(|| LayoutError::UnknownStyle(config.style.to_string()))?;
            let inner_width = config.dimensions.width - 2.0 * rules.panel_thickness;
            let layout = layout_rows(def, inner_width, config.density, &config.row_heights);
            let row_positions = resolve_positions(&config.row_heights);
            (layout, row_positions)
        }
        ProductRules::Table(_) | ProductRules::Console(_) => {
            (DividerLayout::empty(), Vec::new())
        }
    };

    let components = assemble(profile, validated, &layout, &row_positions)?;
    let compartments =
        build_compartments(profile, validated, &layout, &row_positions, &components)
            .map_err(Error::Constraint)?;
    let material_groups = group_by_material(&components);

    debug!(
        "layout for {}: {} components, {} compartments, {} material groups",
        profile.id,
        components.len(),
        compartments.len(),
        material_groups.len()
    );

    Ok(LayoutResult {
        components,
        compartments,
        material_groups,
    })
}
