//! Dimension and constraint validator.
//!
//! Validates a requested configuration against a product profile's
//! manufacturing rules. Validation is all-or-nothing: every check runs,
//! violations accumulate, and any violation means no [`ValidatedConfig`]
//! is produced. The engine only reports violations — it never clamps or
//! corrects; the calling layer decides whether to block, fix, or warn.
//!
//! Two policies the product requirements left open are fixed here:
//! - Off-increment dimensions are rejected, never rounded. The violation
//!   reports the nearest valid value so the caller can offer it.
//! - Row heights drive the total height: the configured height must equal
//!   the row-height sum (plus foot height when feet are enabled). Callers
//!   that edit height first recompute rows via
//!   [`crate::rows::derive_row_heights`].

use furnikit_catalog::{
    CabinetRules, ConsoleRules, LegStyle, ProductProfile, ProductRules, TableRules, TopShape,
};
use furnikit_core::{ConstraintViolation, MaterialChoice, MaterialLibrary};
use tracing::debug;

use crate::config::ProductConfiguration;
use crate::rows;
use crate::styles::{layout_rows, DividerLayout, StyleRegistry};

/// Tolerance for cross-field sums in cm
const EPS: f64 = 1e-6;

/// A configuration that has passed constraint validation.
///
/// Can only be constructed by [`validate`], so downstream stages can rely
/// on the type as proof of validation. The assembler still re-checks
/// internal consistency and fails fast on mismatch.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    config: ProductConfiguration,
    profile_id: String,
}

impl ValidatedConfig {
    /// The validated configuration
    pub fn config(&self) -> &ProductConfiguration {
        &self.config
    }

    /// Id of the profile the configuration was validated against
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Consume the wrapper and return the configuration
    pub fn into_config(self) -> ProductConfiguration {
        self.config
    }
}

/// Validate a configuration against a product profile.
///
/// Checks run in order: dimension ranges, increment grids, cross-field
/// rules (row heights vs. height, row count), span rules, compartment
/// type rules, material selections. Pure; no side effects.
pub fn validate(
    profile: &ProductProfile,
    library: &MaterialLibrary,
    styles: &StyleRegistry,
    config: &ProductConfiguration,
) -> Result<ValidatedConfig, Vec<ConstraintViolation>> {
    let mut violations = Vec::new();

    match &profile.rules {
        ProductRules::Cabinet(rules) => {
            check_cabinet(profile, rules, styles, config, &mut violations);
        }
        ProductRules::Table(rules) => check_table(profile, rules, config, &mut violations),
        ProductRules::Console(rules) => check_console(rules, config, &mut violations),
    }

    check_material(library, &config.body_material, &mut violations);
    if config.front_material != config.body_material {
        check_material(library, &config.front_material, &mut violations);
    }

    if violations.is_empty() {
        Ok(ValidatedConfig {
            config: config.clone(),
            profile_id: profile.id.clone(),
        })
    } else {
        debug!(
            "configuration {} rejected with {} violation(s)",
            config.id,
            violations.len()
        );
        Err(violations)
    }
}

fn check_dimension(
    field: &str,
    value: f64,
    range: &furnikit_catalog::DimensionRange,
    violations: &mut Vec<ConstraintViolation>,
) {
    if !range.contains(value) {
        violations.push(ConstraintViolation::OutOfRange {
            field: field.to_string(),
            min: range.min,
            max: range.max,
            actual: value,
        });
        return;
    }
    if !range.on_increment(value) {
        violations.push(ConstraintViolation::OffIncrement {
            field: field.to_string(),
            step: range.step,
            actual: value,
            nearest: range.nearest_increment(value),
        });
    }
}

fn check_cabinet(
    profile: &ProductProfile,
    rules: &CabinetRules,
    styles: &StyleRegistry,
    config: &ProductConfiguration,
    violations: &mut Vec<ConstraintViolation>,
) {
    let dims = config.dimensions;
    check_dimension("width", dims.width, &rules.width, violations);
    check_dimension("height", dims.height, &rules.height, violations);
    check_dimension("depth", dims.depth, &rules.depth, violations);

    // Row heights drive the height; feet consume part of it.
    let interior = dims.height - if config.feet { rules.foot_height } else { 0.0 };
    if config.row_count() > rules.max_rows {
        violations.push(ConstraintViolation::TooManyRows {
            max: rules.max_rows,
            actual: config.row_count(),
        });
    }
    for (i, rh) in config.row_heights.iter().enumerate() {
        let v = rh.value_cm();
        if v <= 0.0 || v > interior {
            violations.push(ConstraintViolation::OutOfRange {
                field: format!("row_heights[{}]", i),
                min: 0.0,
                max: interior,
                actual: v,
            });
        }
    }
    let sum = rows::total_height(&config.row_heights);
    if (sum - interior).abs() > EPS {
        violations.push(ConstraintViolation::RowHeightSumMismatch {
            expected: interior,
            actual: sum,
        });
    }

    // Span rules, checked against the layout the style actually produces.
    let inner_width = dims.width - 2.0 * rules.panel_thickness;
    match styles.get(config.style) {
        None => violations.push(ConstraintViolation::UnsupportedOption {
            product: profile.id.clone(),
            feature: format!("style {}", config.style),
        }),
        Some(def) => {
            let layout = layout_rows(def, inner_width, config.density, &config.row_heights);
            let columns = layout.max_columns();
            if columns > rules.max_columns {
                violations.push(ConstraintViolation::TooManyColumns {
                    max: rules.max_columns,
                    actual: columns,
                });
            }
            if let Some(widest) = widest_span(&layout, inner_width) {
                if widest > rules.max_unsupported_span {
                    violations.push(ConstraintViolation::SpanTooWide {
                        span: widest,
                        max_span: rules.max_unsupported_span,
                    });
                }
            }
        }
    }

    // Compartment-type feasibility at the configuration level; the
    // compartment builder re-checks per cell with resolved depths.
    let usable_depth = dims.depth - rules.back_thickness;
    for (row, row_types) in config.compartments.iter().enumerate() {
        if row >= config.row_count() {
            violations.push(ConstraintViolation::UnsupportedOption {
                product: profile.id.clone(),
                feature: format!(
                    "compartment grid row {} beyond row count {}",
                    row,
                    config.row_count()
                ),
            });
            continue;
        }
        let row_height = config.row_heights[row].value_cm();
        for (column, kind) in row_types.iter().enumerate() {
            match kind {
                crate::compartments::CompartmentType::Drawer
                    if usable_depth < rules.min_drawer_depth =>
                {
                    violations.push(ConstraintViolation::DrawerTooShallow {
                        row,
                        column,
                        min_depth: rules.min_drawer_depth,
                        actual: usable_depth,
                    });
                }
                crate::compartments::CompartmentType::Door
                    if row_height < rules.min_door_height =>
                {
                    violations.push(ConstraintViolation::DoorTooShort {
                        row,
                        min_height: rules.min_door_height,
                        actual: row_height,
                    });
                }
                _ => {}
            }
        }
    }
}

/// The widest compartment span across all rows of a layout
fn widest_span(layout: &DividerLayout, width: f64) -> Option<f64> {
    let mut widest: Option<f64> = None;
    for row in &layout.rows {
        let mut edges = Vec::with_capacity(row.divider_xs.len() + 2);
        edges.push(0.0);
        edges.extend(row.divider_xs.iter().copied());
        edges.push(width);
        for pair in edges.windows(2) {
            let gap = pair[1] - pair[0];
            if widest.map_or(true, |w| gap > w) {
                widest = Some(gap);
            }
        }
    }
    widest
}

fn check_table(
    profile: &ProductProfile,
    rules: &TableRules,
    config: &ProductConfiguration,
    violations: &mut Vec<ConstraintViolation>,
) {
    let dims = config.dimensions;
    check_dimension("width", dims.width, &rules.width, violations);
    check_dimension("length", dims.depth, &rules.length, violations);
    check_dimension("height", dims.height, &rules.height, violations);

    if !rules.top_shapes.contains(&config.top_shape) {
        violations.push(ConstraintViolation::UnsupportedOption {
            product: profile.id.clone(),
            feature: format!("{} top", config.top_shape),
        });
    }
    if !rules.leg_styles.contains(&config.leg_style) {
        violations.push(ConstraintViolation::UnsupportedOption {
            product: profile.id.clone(),
            feature: format!("{} legs", config.leg_style),
        });
    }
    // A pedestal column only works under a round top.
    if config.leg_style == LegStyle::Pedestal && config.top_shape != TopShape::Round {
        violations.push(ConstraintViolation::UnsupportedOption {
            product: profile.id.clone(),
            feature: format!("pedestal legs on {} top", config.top_shape),
        });
    }
    // Round tops use width as the diameter; length must agree.
    if config.top_shape == TopShape::Round && (dims.width - dims.depth).abs() > EPS {
        violations.push(ConstraintViolation::UnsupportedOption {
            product: profile.id.clone(),
            feature: format!(
                "round top requires length == width, got {} x {}",
                dims.width, dims.depth
            ),
        });
    }
}

fn check_console(
    rules: &ConsoleRules,
    config: &ProductConfiguration,
    violations: &mut Vec<ConstraintViolation>,
) {
    let dims = config.dimensions;
    check_dimension("width", dims.width, &rules.width, violations);
    check_dimension("height", dims.height, &rules.height, violations);
    check_dimension("depth", dims.depth, &rules.depth, violations);

    if !rules.shelf_count.contains(config.shelf_count) {
        violations.push(ConstraintViolation::OutOfRange {
            field: "shelf_count".to_string(),
            min: rules.shelf_count.min as f64,
            max: rules.shelf_count.max as f64,
            actual: config.shelf_count as f64,
        });
    }
}

fn check_material(
    library: &MaterialLibrary,
    choice: &MaterialChoice,
    violations: &mut Vec<ConstraintViolation>,
) {
    match library.get_material(&choice.material) {
        None => violations.push(ConstraintViolation::UnknownMaterial {
            material: choice.material.to_string(),
        }),
        Some(material) => {
            if !material.has_color(&choice.color) {
                violations.push(ConstraintViolation::ColorUnavailable {
                    material: choice.material.to_string(),
                    color: choice.color.clone(),
                });
            }
        }
    }
}
