//! Product profiles and constraint tables.
//!
//! A [`ProductProfile`] describes one configurable product type: a
//! cabinet/bookcase, a table, or a console. The rules payload is a tagged
//! variant per product kind so the validator and assembler dispatch via
//! exhaustive match instead of string comparison.

use furnikit_core::MaterialChoice;
use serde::{Deserialize, Serialize};

/// The supported product kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    /// Shelving cabinet / bookcase with rows and dividers
    Cabinet,
    /// Table with a shaped top and legs
    Table,
    /// Console: table-like top and legs plus open shelves
    Console,
}

impl std::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cabinet => write!(f, "Cabinet"),
            Self::Table => write!(f, "Table"),
            Self::Console => write!(f, "Console"),
        }
    }
}

/// Leg construction styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegStyle {
    /// Straight square-section legs
    Straight,
    /// Tapered legs
    Tapered,
    /// Single central pedestal (round tabletops only)
    Pedestal,
}

impl Default for LegStyle {
    fn default() -> Self {
        Self::Straight
    }
}

impl std::fmt::Display for LegStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Straight => write!(f, "Straight"),
            Self::Tapered => write!(f, "Tapered"),
            Self::Pedestal => write!(f, "Pedestal"),
        }
    }
}

/// How far corner legs are pulled in from the tabletop edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegPosition {
    /// Legs pulled well inside the edge
    Inset,
    /// Default placement
    Standard,
    /// Legs flush with the edge
    Outset,
}

impl Default for LegPosition {
    fn default() -> Self {
        Self::Standard
    }
}

/// Tabletop shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TopShape {
    /// Rectangular top
    Rectangular,
    /// Oval top
    Oval,
    /// Round top (width is the diameter)
    Round,
}

impl std::fmt::Display for TopShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rectangular => write!(f, "Rectangular"),
            Self::Oval => write!(f, "Oval"),
            Self::Round => write!(f, "Round"),
        }
    }
}

/// An allowed dimension range with increment granularity, in cm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionRange {
    /// Minimum allowed value
    pub min: f64,
    /// Maximum allowed value
    pub max: f64,
    /// Increment step; requested values must lie on this grid
    pub step: f64,
}

impl DimensionRange {
    /// Create a new range
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Check whether a value lies within [min, max]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check whether a value lies on the increment grid anchored at `min`
    pub fn on_increment(&self, value: f64) -> bool {
        if self.step <= 0.0 {
            return true;
        }
        let steps = (value - self.min) / self.step;
        (steps - steps.round()).abs() < 1e-6
    }

    /// The nearest value on the increment grid, clamped into the range
    pub fn nearest_increment(&self, value: f64) -> f64 {
        if self.step <= 0.0 {
            return value.clamp(self.min, self.max);
        }
        let steps = ((value - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }
}

/// An allowed integer count range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Minimum allowed count
    pub min: usize,
    /// Maximum allowed count
    pub max: usize,
}

impl CountRange {
    /// Create a new count range
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Check whether a count lies within [min, max]
    pub fn contains(&self, value: usize) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Constraint table for cabinets and bookcases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetRules {
    /// Allowed width range, 1 cm steps
    pub width: DimensionRange,
    /// Allowed height range, 25 cm steps
    pub height: DimensionRange,
    /// Allowed depth range
    pub depth: DimensionRange,
    /// Maximum number of structural rows
    pub max_rows: usize,
    /// Maximum number of compartment columns per row
    pub max_columns: usize,
    /// Shelf span above which a foot is placed under the divider
    pub support_span: f64,
    /// Widest compartment span a shelf may bridge unsupported
    pub max_unsupported_span: f64,
    /// Minimum resolved depth for drawer compartments
    pub min_drawer_depth: f64,
    /// Minimum row height for door compartments
    pub min_door_height: f64,
    /// Carcass panel thickness
    pub panel_thickness: f64,
    /// Back panel thickness
    pub back_thickness: f64,
    /// Height of optional feet
    pub foot_height: f64,
    /// Foot cross-section size
    pub foot_thickness: f64,
}

impl Default for CabinetRules {
    fn default() -> Self {
        Self {
            width: DimensionRange::new(40.0, 300.0, 1.0),
            height: DimensionRange::new(25.0, 275.0, 25.0),
            depth: DimensionRange::new(16.0, 60.0, 1.0),
            max_rows: 7,
            max_columns: 10,
            support_span: 55.0,
            max_unsupported_span: 110.0,
            min_drawer_depth: 20.0,
            min_door_height: 25.0,
            panel_thickness: 1.9,
            back_thickness: 0.8,
            foot_height: 10.0,
            foot_thickness: 4.0,
        }
    }
}

/// Constraint table for tables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRules {
    /// Allowed width range (diameter for round tops)
    pub width: DimensionRange,
    /// Allowed length range
    pub length: DimensionRange,
    /// Allowed height range
    pub height: DimensionRange,
    /// Allowed top shapes
    pub top_shapes: Vec<TopShape>,
    /// Allowed leg styles
    pub leg_styles: Vec<LegStyle>,
    /// Longest top span without bracing between legs
    pub max_unsupported_span: f64,
    /// Tabletop thickness
    pub top_thickness: f64,
    /// Leg cross-section size
    pub leg_thickness: f64,
    /// Pedestal column diameter
    pub pedestal_diameter: f64,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            width: DimensionRange::new(60.0, 160.0, 1.0),
            length: DimensionRange::new(60.0, 280.0, 1.0),
            height: DimensionRange::new(65.0, 110.0, 1.0),
            top_shapes: vec![TopShape::Rectangular, TopShape::Oval, TopShape::Round],
            leg_styles: vec![LegStyle::Straight, LegStyle::Tapered, LegStyle::Pedestal],
            max_unsupported_span: 180.0,
            top_thickness: 3.0,
            leg_thickness: 6.0,
            pedestal_diameter: 12.0,
        }
    }
}

impl TableRules {
    /// Corner-leg inset from the tabletop edge for a leg position, in cm
    pub fn leg_inset(&self, position: LegPosition) -> f64 {
        match position {
            LegPosition::Inset => 10.0,
            LegPosition::Standard => 5.0,
            LegPosition::Outset => 0.0,
        }
    }
}

/// Constraint table for consoles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleRules {
    /// Allowed width range
    pub width: DimensionRange,
    /// Allowed height range
    pub height: DimensionRange,
    /// Allowed depth range
    pub depth: DimensionRange,
    /// Allowed number of open shelves
    pub shelf_count: CountRange,
    /// Longest span without bracing
    pub max_unsupported_span: f64,
    /// Top thickness
    pub top_thickness: f64,
    /// Shelf thickness
    pub shelf_thickness: f64,
    /// Leg cross-section size
    pub leg_thickness: f64,
}

impl Default for ConsoleRules {
    fn default() -> Self {
        Self {
            width: DimensionRange::new(60.0, 180.0, 1.0),
            height: DimensionRange::new(60.0, 100.0, 1.0),
            depth: DimensionRange::new(20.0, 50.0, 1.0),
            shelf_count: CountRange::new(0, 3),
            max_unsupported_span: 140.0,
            top_thickness: 2.5,
            shelf_thickness: 1.9,
            leg_thickness: 4.0,
        }
    }
}

/// Per-kind rules payload, dispatched by exhaustive match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductRules {
    /// Cabinet constraint table
    Cabinet(CabinetRules),
    /// Table constraint table
    Table(TableRules),
    /// Console constraint table
    Console(ConsoleRules),
}

impl ProductRules {
    /// The product kind this rules payload belongs to
    pub fn kind(&self) -> ProductKind {
        match self {
            Self::Cabinet(_) => ProductKind::Cabinet,
            Self::Table(_) => ProductKind::Table,
            Self::Console(_) => ProductKind::Console,
        }
    }
}

/// A named, immutable product profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductProfile {
    /// Unique profile id, used for registry lookup
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// Constraint table for this product type
    pub rules: ProductRules,
    /// Default body material selection for new configurations
    pub default_material: MaterialChoice,
}

impl ProductProfile {
    /// The product kind of this profile
    pub fn kind(&self) -> ProductKind {
        self.rules.kind()
    }

    /// The cabinet rules, if this is a cabinet profile
    pub fn cabinet_rules(&self) -> Option<&CabinetRules> {
        match &self.rules {
            ProductRules::Cabinet(r) => Some(r),
            _ => None,
        }
    }

    /// The table rules, if this is a table profile
    pub fn table_rules(&self) -> Option<&TableRules> {
        match &self.rules {
            ProductRules::Table(r) => Some(r),
            _ => None,
        }
    }

    /// The console rules, if this is a console profile
    pub fn console_rules(&self) -> Option<&ConsoleRules> {
        match &self.rules {
            ProductRules::Console(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_contains() {
        let r = DimensionRange::new(40.0, 300.0, 1.0);
        assert!(r.contains(40.0));
        assert!(r.contains(300.0));
        assert!(!r.contains(39.9));
        assert!(!r.contains(300.1));
    }

    #[test]
    fn test_increment_grid() {
        let r = DimensionRange::new(25.0, 275.0, 25.0);
        assert!(r.on_increment(25.0));
        assert!(r.on_increment(250.0));
        assert!(!r.on_increment(140.0));
        assert_eq!(r.nearest_increment(140.0), 150.0);
        assert_eq!(r.nearest_increment(130.0), 125.0);
        assert_eq!(r.nearest_increment(1000.0), 275.0);
    }

    #[test]
    fn test_increment_float_tolerance() {
        let r = DimensionRange::new(16.0, 60.0, 0.5);
        // 16.0 + 13 * 0.5 accumulated in floating point still counts
        let v = (0..13).fold(16.0_f64, |acc, _| acc + 0.5);
        assert!(r.on_increment(v));
    }

    #[test]
    fn test_leg_inset_amounts() {
        let rules = TableRules::default();
        assert_eq!(rules.leg_inset(LegPosition::Standard), 5.0);
        assert_eq!(rules.leg_inset(LegPosition::Inset), 10.0);
        assert_eq!(rules.leg_inset(LegPosition::Outset), 0.0);
    }

    #[test]
    fn test_rules_kind_dispatch() {
        let rules = ProductRules::Console(ConsoleRules::default());
        assert_eq!(rules.kind(), ProductKind::Console);
    }
}
