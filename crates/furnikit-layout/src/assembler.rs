//! Component assembler.
//!
//! Builds the full structural component list for a validated
//! configuration: carcass panels, shelves, dividers, doors, drawers, and
//! feet for cabinets; tops, legs, and bracing for tables and consoles.
//!
//! Components are value objects created fresh on every run; the previous
//! list is discarded wholesale. Identical inputs always yield identical
//! positions and dimensions — only the ids are freshly generated.
//!
//! ## Coordinate conventions
//!
//! Cabinets use a corner origin: x rightward in `[0, width]`, y upward in
//! `[0, height]`, z from the back panel (`0`) to the front (`depth`).
//! Tables and consoles use a tabletop-center origin: x/z centered on the
//! top, y downward from the top surface, so legs reach `-height`. All
//! positions refer to component centers.

use furnikit_catalog::{
    CabinetRules, ConsoleRules, LegStyle, ProductProfile, ProductRules, TableRules, TopShape,
};
use furnikit_core::{
    Bounds, Dimensions, LayoutError, MaterialChoice, MaterialId, Position,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::compartments::{CompartmentType, FRONT_THICKNESS};
use crate::config::ProductConfiguration;
use crate::styles::DividerLayout;
use crate::validator::ValidatedConfig;

/// Structural component kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Vertical panel: side panels and compartment dividers
    Divider,
    /// Horizontal panel: top, bottom, and shelves
    Shelf,
    /// Leg or foot
    Leg,
    /// Tabletop
    Tabletop,
    /// Hinged door front
    Door,
    /// Drawer front
    Drawer,
    /// Back panels, bracing, and other secondary parts
    Accessory,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Divider => "divider",
            Self::Shelf => "shelf",
            Self::Leg => "leg",
            Self::Tabletop => "tabletop",
            Self::Door => "door",
            Self::Drawer => "drawer",
            Self::Accessory => "accessory",
        };
        write!(f, "{}", name)
    }
}

/// One structural component with its 3D placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductComponent {
    /// Unique component id, fresh on every assembly run
    pub id: Uuid,
    /// Component kind
    pub kind: ComponentKind,
    /// Role label, e.g. `"left-side"` or `"divider-2-1"`
    pub label: String,
    /// Center position
    pub position: Position,
    /// Extents along each axis
    pub size: Dimensions,
    /// Material id
    pub material: MaterialId,
    /// Finish color
    pub color: String,
    /// Whether the rendering consumer should draw this component
    pub visible: bool,
}

impl ProductComponent {
    fn new(
        kind: ComponentKind,
        label: impl Into<String>,
        position: Position,
        size: Dimensions,
        choice: &MaterialChoice,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            label: label.into(),
            position,
            size,
            material: choice.material.clone(),
            color: choice.color.clone(),
            visible: true,
        }
    }

    /// Axis-aligned bounds of this component
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.position, self.size)
    }
}

/// Assemble the component list for a validated configuration.
///
/// Fails fast with a [`LayoutError`] when called with internally
/// inconsistent input — a profile other than the one the configuration
/// was validated for, a row-position count that does not match the rows,
/// or non-finite dimensions. These are calling-layer bugs, not
/// user-facing conditions, and are never silently corrected.
pub fn assemble(
    profile: &ProductProfile,
    validated: &ValidatedConfig,
    layout: &DividerLayout,
    row_positions: &[f64],
) -> Result<Vec<ProductComponent>, LayoutError> {
    if profile.id != validated.profile_id() {
        return Err(LayoutError::ProfileMismatch {
            expected: validated.profile_id().to_string(),
            actual: profile.id.clone(),
        });
    }

    let config = validated.config();
    let dims = config.dimensions;
    if !dims.is_finite() {
        return Err(LayoutError::NonFinite {
            field: "dimensions".to_string(),
            value: f64::NAN,
        });
    }

    let components = match &profile.rules {
        ProductRules::Cabinet(rules) => assemble_cabinet(rules, config, layout, row_positions)?,
        ProductRules::Table(rules) => assemble_table(rules, config),
        ProductRules::Console(rules) => assemble_console(rules, config),
    };

    debug!(
        "assembled {} components for profile {}",
        components.len(),
        profile.id
    );
    Ok(components)
}

fn assemble_cabinet(
    rules: &CabinetRules,
    config: &ProductConfiguration,
    layout: &DividerLayout,
    row_positions: &[f64],
) -> Result<Vec<ProductComponent>, LayoutError> {
    let rows = config.row_count();
    if rows == 0 {
        return Err(LayoutError::EmptyRows);
    }
    if row_positions.len() != rows + 1 {
        return Err(LayoutError::RowCountMismatch {
            rows,
            row_heights: row_positions.len().saturating_sub(1),
        });
    }
    if layout.rows.len() != rows {
        return Err(LayoutError::RowCountMismatch {
            rows,
            row_heights: layout.rows.len(),
        });
    }

    let dims = config.dimensions;
    let body = &config.body_material;
    let front = &config.front_material;
    let t = rules.panel_thickness;
    let back_t = rules.back_thickness;
    let base_y = if config.feet { rules.foot_height } else { 0.0 };
    let body_height = dims.height - base_y;
    let inner_width = dims.width - 2.0 * t;
    // Shelves and dividers sit in front of the back panel.
    let interior_depth = dims.depth - back_t;
    let interior_z = back_t + interior_depth / 2.0;

    let mut components = Vec::new();

    // Carcass.
    components.push(ProductComponent::new(
        ComponentKind::Divider,
        "left-side",
        Position::new(t / 2.0, base_y + body_height / 2.0, dims.depth / 2.0),
        Dimensions::new(t, body_height, dims.depth),
        body,
    ));
    components.push(ProductComponent::new(
        ComponentKind::Divider,
        "right-side",
        Position::new(dims.width - t / 2.0, base_y + body_height / 2.0, dims.depth / 2.0),
        Dimensions::new(t, body_height, dims.depth),
        body,
    ));
    components.push(ProductComponent::new(
        ComponentKind::Shelf,
        "bottom-panel",
        Position::new(dims.width / 2.0, base_y + t / 2.0, dims.depth / 2.0),
        Dimensions::new(inner_width, t, dims.depth),
        body,
    ));
    components.push(ProductComponent::new(
        ComponentKind::Shelf,
        "top-panel",
        Position::new(dims.width / 2.0, dims.height - t / 2.0, dims.depth / 2.0),
        Dimensions::new(inner_width, t, dims.depth),
        body,
    ));
    components.push(ProductComponent::new(
        ComponentKind::Accessory,
        "back-panel",
        Position::new(dims.width / 2.0, base_y + body_height / 2.0, back_t / 2.0),
        Dimensions::new(dims.width, body_height, back_t),
        body,
    ));

    // One shelf per interior row boundary.
    for (i, y) in row_positions
        .iter()
        .enumerate()
        .skip(1)
        .take(rows.saturating_sub(1))
    {
        components.push(ProductComponent::new(
            ComponentKind::Shelf,
            format!("shelf-{}", i),
            Position::new(dims.width / 2.0, base_y + y, interior_z),
            Dimensions::new(inner_width, t, interior_depth),
            body,
        ));
    }

    // Dividers per row, as the style laid them out.
    for (row, row_layout) in layout.rows.iter().enumerate() {
        let bottom = base_y + row_positions[row];
        let row_height = row_positions[row + 1] - row_positions[row];
        for (k, x) in row_layout.divider_xs.iter().enumerate() {
            components.push(ProductComponent::new(
                ComponentKind::Divider,
                format!("divider-{}-{}", row, k),
                Position::new(
                    t + x,
                    bottom + row_height / 2.0 + row_layout.y_offset,
                    interior_z,
                ),
                Dimensions::new(t, row_height, interior_depth),
                body,
            ));
        }
    }

    // Door and drawer fronts from the compartment grid.
    for (row, row_layout) in layout.rows.iter().enumerate() {
        let bottom = base_y + row_positions[row];
        let row_height = row_positions[row + 1] - row_positions[row];

        let mut edges = Vec::with_capacity(row_layout.divider_xs.len() + 2);
        edges.push(0.0);
        edges.extend(row_layout.divider_xs.iter().copied());
        edges.push(inner_width);

        for (column, pair) in edges.windows(2).enumerate() {
            let cell_width = pair[1] - pair[0];
            let center_x = t + (pair[0] + pair[1]) / 2.0;
            let front_pos = Position::new(
                center_x,
                bottom + row_height / 2.0,
                dims.depth - FRONT_THICKNESS / 2.0,
            );
            match config.compartment_type(row, column) {
                CompartmentType::Open => {}
                CompartmentType::Door => components.push(ProductComponent::new(
                    ComponentKind::Door,
                    format!("door-{}-{}", row, column),
                    front_pos,
                    Dimensions::new(cell_width, row_height, FRONT_THICKNESS),
                    front,
                )),
                CompartmentType::Drawer => components.push(ProductComponent::new(
                    ComponentKind::Drawer,
                    format!("drawer-{}-{}", row, column),
                    front_pos,
                    Dimensions::new(cell_width, row_height, FRONT_THICKNESS),
                    front,
                )),
            }
        }
    }

    // Feet: four corners, plus one under every bottom-row divider whose
    // adjacent span exceeds the support threshold.
    if config.feet {
        let ft = rules.foot_thickness;
        let fh = rules.foot_height;
        let foot_size = Dimensions::new(ft, fh, ft);
        let corners = [
            (ft / 2.0, ft / 2.0),
            (dims.width - ft / 2.0, ft / 2.0),
            (ft / 2.0, dims.depth - ft / 2.0),
            (dims.width - ft / 2.0, dims.depth - ft / 2.0),
        ];
        for (i, (x, z)) in corners.iter().enumerate() {
            components.push(ProductComponent::new(
                ComponentKind::Leg,
                format!("foot-{}", i),
                Position::new(*x, fh / 2.0, *z),
                foot_size,
                body,
            ));
        }

        if let Some(bottom_row) = layout.rows.first() {
            let mut edges = Vec::with_capacity(bottom_row.divider_xs.len() + 2);
            edges.push(0.0);
            edges.extend(bottom_row.divider_xs.iter().copied());
            edges.push(inner_width);

            for (k, x) in bottom_row.divider_xs.iter().enumerate() {
                let left_span = x - edges[k];
                let right_span = edges[k + 2] - x;
                if left_span > rules.support_span || right_span > rules.support_span {
                    components.push(ProductComponent::new(
                        ComponentKind::Leg,
                        format!("foot-divider-{}", k),
                        Position::new(t + x, fh / 2.0, dims.depth / 2.0),
                        foot_size,
                        body,
                    ));
                }
            }
        }
    }

    Ok(components)
}

fn assemble_table(rules: &TableRules, config: &ProductConfiguration) -> Vec<ProductComponent> {
    let dims = config.dimensions;
    let body = &config.body_material;
    let width = dims.width;
    let length = dims.depth;
    let height = dims.height;
    let top_t = rules.top_thickness;
    let leg_t = rules.leg_thickness;
    let leg_size = Dimensions::new(leg_t, height - top_t, leg_t);
    let leg_y = -height / 2.0;

    let mut components = Vec::new();

    components.push(ProductComponent::new(
        ComponentKind::Tabletop,
        format!("tabletop-{}", config.top_shape).to_lowercase(),
        Position::new(0.0, -top_t / 2.0, 0.0),
        Dimensions::new(width, top_t, length),
        body,
    ));

    match (config.top_shape, config.leg_style) {
        (TopShape::Round, LegStyle::Pedestal) => {
            components.push(ProductComponent::new(
                ComponentKind::Leg,
                "pedestal",
                Position::new(0.0, leg_y, 0.0),
                Dimensions::new(rules.pedestal_diameter, height - top_t, rules.pedestal_diameter),
                body,
            ));
            components.push(ProductComponent::new(
                ComponentKind::Accessory,
                "pedestal-base",
                Position::new(0.0, -height + 1.0, 0.0),
                Dimensions::new(width / 2.0, 2.0, width / 2.0),
                body,
            ));
        }
        (TopShape::Round, _) => {
            // Four legs spaced evenly around the radius.
            let inset = rules.leg_inset(config.leg_position);
            let radius = width / 2.0 - inset;
            for (i, angle_deg) in [45.0_f64, 135.0, 225.0, 315.0].iter().enumerate() {
                let angle = angle_deg.to_radians();
                components.push(ProductComponent::new(
                    ComponentKind::Leg,
                    format!("leg-{}", i),
                    Position::new(radius * angle.cos(), leg_y, radius * angle.sin()),
                    leg_size,
                    body,
                ));
            }
        }
        (TopShape::Rectangular | TopShape::Oval, _) => {
            let inset = rules.leg_inset(config.leg_position);
            let x = width / 2.0 - inset;
            let z = length / 2.0 - inset;
            let corners = [(x, z), (-x, z), (x, -z), (-x, -z)];
            for (i, (lx, lz)) in corners.iter().enumerate() {
                components.push(ProductComponent::new(
                    ComponentKind::Leg,
                    format!("leg-{}", i),
                    Position::new(*lx, leg_y, *lz),
                    leg_size,
                    body,
                ));
            }

            // Bracing once the top outgrows the unsupported span.
            let span = length - 2.0 * inset;
            if span > rules.max_unsupported_span {
                components.push(ProductComponent::new(
                    ComponentKind::Accessory,
                    "stretcher",
                    Position::new(0.0, -height + 10.0, 0.0),
                    Dimensions::new(leg_t, leg_t, span),
                    body,
                ));
            }
        }
    }

    components
}

fn assemble_console(rules: &ConsoleRules, config: &ProductConfiguration) -> Vec<ProductComponent> {
    let dims = config.dimensions;
    let body = &config.body_material;
    let width = dims.width;
    let depth = dims.depth;
    let height = dims.height;
    let top_t = rules.top_thickness;
    let leg_t = rules.leg_thickness;

    let mut components = Vec::new();

    components.push(ProductComponent::new(
        ComponentKind::Tabletop,
        "console-top",
        Position::new(0.0, -top_t / 2.0, 0.0),
        Dimensions::new(width, top_t, depth),
        body,
    ));

    // Legs flush with the corners.
    let x = width / 2.0 - leg_t / 2.0;
    let z = depth / 2.0 - leg_t / 2.0;
    let leg_size = Dimensions::new(leg_t, height - top_t, leg_t);
    let corners = [(x, z), (-x, z), (x, -z), (-x, -z)];
    for (i, (lx, lz)) in corners.iter().enumerate() {
        components.push(ProductComponent::new(
            ComponentKind::Leg,
            format!("leg-{}", i),
            Position::new(*lx, -height / 2.0, *lz),
            leg_size,
            body,
        ));
    }

    // Open shelves evenly distributed between top and floor.
    let shelf_size = Dimensions::new(width - 2.0 * leg_t, rules.shelf_thickness, depth - 2.0 * leg_t);
    for i in 1..=config.shelf_count {
        let y = -height * i as f64 / (config.shelf_count + 1) as f64;
        components.push(ProductComponent::new(
            ComponentKind::Shelf,
            format!("shelf-{}", i),
            Position::new(0.0, y, 0.0),
            shelf_size,
            body,
        ));
    }

    // Shelves brace the legs; without any, a wide span needs a stretcher.
    if config.shelf_count == 0 && width - leg_t > rules.max_unsupported_span {
        components.push(ProductComponent::new(
            ComponentKind::Accessory,
            "stretcher",
            Position::new(0.0, -height + 8.0, 0.0),
            Dimensions::new(width - 2.0 * leg_t, leg_t, leg_t),
            body,
        ));
    }

    components
}

/// The bounding box every component of a product must stay inside.
///
/// Cabinets span `[0, width] x [0, height] x [0, depth]`; tables and
/// consoles span the centered analogue with y in `[-height, 0]`.
pub fn product_bounds(profile: &ProductProfile, dims: Dimensions) -> Bounds {
    match profile.rules {
        ProductRules::Cabinet(_) => Bounds::from_dimensions(dims),
        ProductRules::Table(_) | ProductRules::Console(_) => Bounds::new(
            Position::new(-dims.width / 2.0, -dims.height, -dims.depth / 2.0),
            Position::new(dims.width / 2.0, 0.0, dims.depth / 2.0),
        ),
    }
}
