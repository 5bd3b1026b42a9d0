//! Materials Database module
//!
//! This module provides:
//! - Material categories and types
//! - Finish colors offered per material
//! - Relative price factors consumed by the pricing collaborator
//! - Material library management
//! - Custom material support

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Material categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
pub enum MaterialCategory {
    /// Solid natural wood (oak, walnut, ash)
    SolidWood,
    /// Veneered engineered board
    VeneeredBoard,
    /// Lacquered MDF
    LacqueredMdf,
    /// Metal (steel legs, frames)
    Metal,
    /// Glass (doors, tabletops)
    Glass,
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SolidWood => write!(f, "Solid Wood"),
            Self::VeneeredBoard => write!(f, "Veneered Board"),
            Self::LacqueredMdf => write!(f, "Lacquered MDF"),
            Self::Metal => write!(f, "Metal"),
            Self::Glass => write!(f, "Glass"),
        }
    }
}

/// Unique material identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialId(pub String);

impl From<&str> for MaterialId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A material with its finish options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// Unique identifier
    pub id: MaterialId,
    /// Display name
    pub name: String,
    /// Category for organization
    pub category: MaterialCategory,
    /// Finish colors offered for this material
    pub colors: Vec<String>,
    /// Relative price factor (1.0 = baseline); consumed by the external
    /// pricing collaborator, not interpreted by the engine
    pub price_factor: f64,
    /// Stock panel thickness in cm
    pub panel_thickness: f64,
}

impl Material {
    /// Create a new material
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: MaterialCategory,
        colors: Vec<String>,
        price_factor: f64,
        panel_thickness: f64,
    ) -> Self {
        Self {
            id: MaterialId(id.into()),
            name: name.into(),
            category,
            colors,
            price_factor,
            panel_thickness,
        }
    }

    /// Check whether a finish color is offered for this material
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// A material selection: material id plus finish color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialChoice {
    /// The selected material
    pub material: MaterialId,
    /// The selected finish color
    pub color: String,
}

impl MaterialChoice {
    /// Create a new material selection
    pub fn new(material: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            material: MaterialId(material.into()),
            color: color.into(),
        }
    }
}

/// Library of available materials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialLibrary {
    materials: HashMap<MaterialId, Material>,
}

impl MaterialLibrary {
    /// Create an empty library
    pub fn new() -> Self {
        Self {
            materials: HashMap::new(),
        }
    }

    /// Add a material to the library
    pub fn add_material(&mut self, material: Material) {
        self.materials.insert(material.id.clone(), material);
    }

    /// Get a material by id
    pub fn get_material(&self, id: &MaterialId) -> Option<&Material> {
        self.materials.get(id)
    }

    /// Remove a material from the library
    pub fn remove_material(&mut self, id: &MaterialId) -> Option<Material> {
        self.materials.remove(id)
    }

    /// Get all materials
    pub fn get_all_materials(&self) -> Vec<&Material> {
        self.materials.values().collect()
    }

    /// Get materials in a category
    pub fn get_materials_by_category(&self, category: MaterialCategory) -> Vec<&Material> {
        self.materials
            .values()
            .filter(|m| m.category == category)
            .collect()
    }

    /// Search materials by name (case-insensitive substring)
    pub fn search_by_name(&self, query: &str) -> Vec<&Material> {
        let query = query.to_lowercase();
        self.materials
            .values()
            .filter(|m| m.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Check whether a selection names an existing material and an
    /// offered finish color
    pub fn is_valid_choice(&self, choice: &MaterialChoice) -> bool {
        self.get_material(&choice.material)
            .map(|m| m.has_color(&choice.color))
            .unwrap_or(false)
    }

    /// Number of materials in the library
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Build the stock material catalog
    pub fn standard() -> Self {
        let mut library = Self::new();

        library.add_material(Material::new(
            "oak-solid",
            "Solid Oak",
            MaterialCategory::SolidWood,
            vec![
                "oak".to_string(),
                "smoked".to_string(),
                "white-oiled".to_string(),
            ],
            1.6,
            2.2,
        ));
        library.add_material(Material::new(
            "walnut-solid",
            "Solid Walnut",
            MaterialCategory::SolidWood,
            vec!["walnut".to_string(), "dark-oiled".to_string()],
            2.1,
            2.2,
        ));
        library.add_material(Material::new(
            "oak-veneer",
            "Oak Veneer Board",
            MaterialCategory::VeneeredBoard,
            vec!["oak".to_string(), "walnut".to_string(), "black".to_string()],
            1.0,
            1.9,
        ));
        library.add_material(Material::new(
            "mdf-lacquer",
            "Lacquered MDF",
            MaterialCategory::LacqueredMdf,
            vec![
                "white".to_string(),
                "black".to_string(),
                "sage".to_string(),
                "terracotta".to_string(),
            ],
            0.8,
            1.9,
        ));
        library.add_material(Material::new(
            "steel-powder",
            "Powder-Coated Steel",
            MaterialCategory::Metal,
            vec!["black".to_string(), "white".to_string()],
            1.2,
            0.3,
        ));
        library.add_material(Material::new(
            "glass-clear",
            "Tempered Glass",
            MaterialCategory::Glass,
            vec!["clear".to_string(), "smoked".to_string()],
            1.4,
            0.8,
        ));

        debug!("loaded stock material catalog ({} materials)", library.len());
        library
    }
}
