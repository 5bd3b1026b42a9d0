//! The product configuration aggregate.
//!
//! A [`ProductConfiguration`] holds everything the customer has chosen:
//! product type, dimensions, row heights, style and density, leg and top
//! options, compartment types, and material selections. It is owned by
//! the calling layer (UI or session); the engine is a pure function over
//! it and never holds one. Derived data (components, compartments,
//! material groups) lives in the pipeline's [`crate::LayoutResult`], not
//! here — it is rebuilt wholesale on every edit.

use std::collections::HashMap;

use chrono::Utc;
use furnikit_catalog::{LegPosition, LegStyle, TopShape};
use furnikit_core::{Dimensions, MaterialChoice};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::compartments::CompartmentType;
use crate::rows::RowHeight;
use crate::styles::{Density, StyleName};

/// A customer's product configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductConfiguration {
    /// Unique configuration id
    pub id: Uuid,
    /// Id of the product profile this configuration targets
    pub product_id: String,
    /// Outer dimensions in cm
    pub dimensions: Dimensions,
    /// One row height per structural row (cabinets)
    pub row_heights: Vec<RowHeight>,
    /// Selected layout style
    pub style: StyleName,
    /// Selected divider density
    pub density: Density,
    /// Tabletop shape (tables and consoles)
    pub top_shape: TopShape,
    /// Leg construction style (tables and consoles)
    pub leg_style: LegStyle,
    /// Corner leg placement (tables and consoles)
    pub leg_position: LegPosition,
    /// Whether the cabinet stands on feet
    pub feet: bool,
    /// Number of open shelves (consoles)
    pub shelf_count: usize,
    /// Compartment types by row, then column; missing cells are open
    pub compartments: Vec<Vec<CompartmentType>>,
    /// Material selection for the carcass and shelves
    pub body_material: MaterialChoice,
    /// Material selection for door and drawer fronts
    pub front_material: MaterialChoice,
    /// Free-form metadata owned by the calling layer
    pub metadata: HashMap<String, serde_json::Value>,
    /// Creation timestamp (RFC 3339)
    pub created_at: String,
    /// Last modification timestamp (RFC 3339)
    pub modified_at: String,
}

impl ProductConfiguration {
    /// Create a new configuration with defaults for the optional choices
    pub fn new(
        product_id: impl Into<String>,
        dimensions: Dimensions,
        body_material: MaterialChoice,
    ) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4(),
            product_id: product_id.into(),
            dimensions,
            row_heights: Vec::new(),
            style: StyleName::Grid,
            density: Density::default(),
            top_shape: TopShape::Rectangular,
            leg_style: LegStyle::default(),
            leg_position: LegPosition::default(),
            feet: false,
            shelf_count: 0,
            compartments: Vec::new(),
            front_material: body_material.clone(),
            body_material,
            metadata: HashMap::new(),
            created_at: now.clone(),
            modified_at: now,
        }
    }

    /// Number of structural rows
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// The compartment type requested for a cell; missing cells are open
    pub fn compartment_type(&self, row: usize, column: usize) -> CompartmentType {
        self.compartments
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or_default()
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.modified_at = Utc::now().to_rfc3339();
    }
}
