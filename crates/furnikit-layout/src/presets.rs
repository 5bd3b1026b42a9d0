//! Preset configurations.
//!
//! Ready-made starting points for each product profile. A preset is a
//! complete, valid configuration: new sessions start from one and every
//! later edit goes through the validator and pipeline like any other
//! change.

use furnikit_catalog::{LegStyle, TopShape};
use furnikit_core::{Dimensions, MaterialChoice};
use serde::{Deserialize, Serialize};

use crate::compartments::CompartmentType;
use crate::config::ProductConfiguration;
use crate::rows::RowHeight;
use crate::styles::{Density, StyleName};

/// A named preset configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    /// Unique preset id
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description
    pub description: String,
    /// The ready-made configuration
    pub config: ProductConfiguration,
}

/// Classic five-row oak bookcase
pub fn bookcase_classic() -> Preset {
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(100.0, 175.0, 30.0),
        MaterialChoice::new("oak-veneer", "oak"),
    );
    config.row_heights = vec![RowHeight::Medium; 5];
    config.style = StyleName::Grid;
    config.density = Density::Medium;
    Preset {
        id: "bookcase-classic".to_string(),
        name: "Classic Bookcase".to_string(),
        description: "Five rows of medium shelves in an even grid".to_string(),
        config,
    }
}

/// Low sideboard with doors and drawers
pub fn sideboard_low() -> Preset {
    let mut config = ProductConfiguration::new(
        "bookcase",
        Dimensions::new(160.0, 75.0, 40.0),
        MaterialChoice::new("mdf-lacquer", "white"),
    );
    config.row_heights = vec![RowHeight::Custom(40.0), RowHeight::Medium];
    config.front_material = MaterialChoice::new("mdf-lacquer", "sage");
    config.compartments = vec![
        vec![
            CompartmentType::Door,
            CompartmentType::Door,
            CompartmentType::Door,
        ],
        vec![
            CompartmentType::Drawer,
            CompartmentType::Drawer,
            CompartmentType::Drawer,
        ],
    ];
    Preset {
        id: "sideboard-low".to_string(),
        name: "Low Sideboard".to_string(),
        description: "Two-row sideboard with doors below and drawers above".to_string(),
        config,
    }
}

/// Six-seat rectangular dining table
pub fn table_rectangular() -> Preset {
    let mut config = ProductConfiguration::new(
        "dining-table",
        Dimensions::new(100.0, 75.0, 200.0),
        MaterialChoice::new("oak-solid", "oak"),
    );
    config.top_shape = TopShape::Rectangular;
    config.leg_style = LegStyle::Straight;
    Preset {
        id: "table-rectangular".to_string(),
        name: "Rectangular Dining Table".to_string(),
        description: "200 cm six-seat table on straight corner legs".to_string(),
        config,
    }
}

/// Round pedestal table
pub fn table_round_pedestal() -> Preset {
    let mut config = ProductConfiguration::new(
        "dining-table",
        Dimensions::new(120.0, 75.0, 120.0),
        MaterialChoice::new("walnut-solid", "walnut"),
    );
    config.top_shape = TopShape::Round;
    config.leg_style = LegStyle::Pedestal;
    Preset {
        id: "table-round-pedestal".to_string(),
        name: "Round Pedestal Table".to_string(),
        description: "120 cm round top on a central pedestal".to_string(),
        config,
    }
}

/// Hallway console with one shelf
pub fn console_hallway() -> Preset {
    let mut config = ProductConfiguration::new(
        "console",
        Dimensions::new(120.0, 80.0, 35.0),
        MaterialChoice::new("oak-veneer", "black"),
    );
    config.shelf_count = 1;
    Preset {
        id: "console-hallway".to_string(),
        name: "Hallway Console".to_string(),
        description: "Slim console with a single open shelf".to_string(),
        config,
    }
}

/// All presets shipped with the configurator
pub fn standard_presets() -> Vec<Preset> {
    vec![
        bookcase_classic(),
        sideboard_low(),
        table_rectangular(),
        table_round_pedestal(),
        console_hallway(),
    ]
}
