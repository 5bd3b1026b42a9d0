//! Compartment builder.
//!
//! Derives the grid of storage compartments from the divider and shelf
//! position sets. Compartment bounds are never specified independently:
//! they are always derived from the enclosing divider and shelf
//! positions, and the whole grid is rebuilt whenever those change.

use furnikit_catalog::{ProductProfile, ProductRules};
use furnikit_core::{Bounds, ConstraintViolation, MaterialId, Position};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::assembler::{ComponentKind, ProductComponent};
use crate::styles::DividerLayout;
use crate::validator::ValidatedConfig;

/// Thickness of door and drawer fronts, in cm
pub(crate) const FRONT_THICKNESS: f64 = 1.6;

/// What a compartment cell holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompartmentType {
    /// Open shelf cell
    Open,
    /// Cell closed by a hinged door
    Door,
    /// Cell with a pull-out drawer
    Drawer,
}

impl Default for CompartmentType {
    fn default() -> Self {
        Self::Open
    }
}

impl std::fmt::Display for CompartmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Door => write!(f, "door"),
            Self::Drawer => write!(f, "drawer"),
        }
    }
}

/// One storage cell of a cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    /// Grid row, bottom row first
    pub row: usize,
    /// Grid column, leftmost first
    pub column: usize,
    /// What the cell holds
    pub kind: CompartmentType,
    /// Absolute bounds derived from the enclosing dividers and shelves
    pub bounds: Bounds,
    /// Ids of the components enclosed by this cell (door/drawer fronts)
    pub components: Vec<Uuid>,
    /// Backing material of the cell
    pub material: MaterialId,
    /// Backing finish color
    pub color: String,
}

/// Build the compartment grid for a validated configuration.
///
/// One compartment per (row, column) cell implied by the divider and
/// shelf positions; per-row column counts differ only for styles that
/// declare non-uniform rows. Drawer cells whose resolved depth is below
/// the profile minimum are reported as constraint violations naming the
/// cell — never silently downgraded to open. Tables and consoles have no
/// compartments and produce an empty list.
pub fn build_compartments(
    profile: &ProductProfile,
    validated: &ValidatedConfig,
    layout: &DividerLayout,
    row_positions: &[f64],
    components: &[ProductComponent],
) -> Result<Vec<Compartment>, Vec<ConstraintViolation>> {
    let rules = match &profile.rules {
        ProductRules::Cabinet(rules) => rules,
        ProductRules::Table(_) | ProductRules::Console(_) => return Ok(Vec::new()),
    };

    let config = validated.config();
    let dims = config.dimensions;
    let base_y = if config.feet { rules.foot_height } else { 0.0 };
    let inner_left = rules.panel_thickness;
    let front_z = dims.depth;
    let back_z = rules.back_thickness;
    // Interior depth left for drawers once back panel and front are gone.
    let resolved_depth = dims.depth - rules.back_thickness - FRONT_THICKNESS;

    let mut compartments = Vec::new();
    let mut violations = Vec::new();

    for (row, window) in row_positions.windows(2).enumerate() {
        let bottom = base_y + window[0];
        let top = base_y + window[1];
        let row_height = window[1] - window[0];

        let empty = Vec::new();
        let xs = layout
            .rows
            .get(row)
            .map(|r| &r.divider_xs)
            .unwrap_or(&empty);

        let mut edges = Vec::with_capacity(xs.len() + 2);
        edges.push(0.0);
        edges.extend(xs.iter().copied());
        edges.push(layout.width);

        for (column, pair) in edges.windows(2).enumerate() {
            let kind = config.compartment_type(row, column);

            match kind {
                CompartmentType::Drawer if resolved_depth < rules.min_drawer_depth => {
                    violations.push(ConstraintViolation::DrawerTooShallow {
                        row,
                        column,
                        min_depth: rules.min_drawer_depth,
                        actual: resolved_depth,
                    });
                    continue;
                }
                CompartmentType::Door if row_height < rules.min_door_height => {
                    violations.push(ConstraintViolation::DoorTooShort {
                        row,
                        min_height: rules.min_door_height,
                        actual: row_height,
                    });
                    continue;
                }
                _ => {}
            }

            let bounds = Bounds::new(
                Position::new(inner_left + pair[0], bottom, back_z),
                Position::new(inner_left + pair[1], top, front_z),
            );

            let enclosed = components
                .iter()
                .filter(|c| {
                    matches!(c.kind, ComponentKind::Door | ComponentKind::Drawer)
                        && bounds.contains(c.position)
                })
                .map(|c| c.id)
                .collect();

            compartments.push(Compartment {
                row,
                column,
                kind,
                bounds,
                components: enclosed,
                material: config.body_material.material.clone(),
                color: config.body_material.color.clone(),
            });
        }
    }

    if !violations.is_empty() {
        debug!(
            "compartment grid rejected with {} violation(s)",
            violations.len()
        );
        return Err(violations);
    }

    debug!("built {} compartments", compartments.len());
    Ok(compartments)
}
