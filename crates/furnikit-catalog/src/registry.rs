//! Product profile registry.
//!
//! An immutable mapping from profile id to [`ProductProfile`], built once
//! at startup and injected into the engine. Profiles cannot be mutated
//! after registration; replacing a profile means building a new registry.

use std::collections::HashMap;

use furnikit_core::MaterialChoice;
use tracing::debug;

use crate::error::{CatalogError, CatalogResult};
use crate::model::{CabinetRules, ConsoleRules, ProductProfile, ProductRules, TableRules};

/// Registry of product profiles, looked up by id
#[derive(Debug, Clone, Default)]
pub struct ProductRegistry {
    profiles: HashMap<String, ProductProfile>,
}

impl ProductRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Register a profile; fails if the id is already taken
    pub fn register(&mut self, profile: ProductProfile) -> CatalogResult<()> {
        if profile.id.is_empty() {
            return Err(CatalogError::InvalidProfile {
                id: profile.id,
                reason: "empty id".to_string(),
            });
        }
        if self.profiles.contains_key(&profile.id) {
            return Err(CatalogError::ProfileAlreadyExists(profile.id));
        }
        self.profiles.insert(profile.id.clone(), profile);
        Ok(())
    }

    /// Get a profile by id
    pub fn get(&self, id: &str) -> CatalogResult<&ProductProfile> {
        self.profiles
            .get(id)
            .ok_or_else(|| CatalogError::ProfileNotFound(id.to_string()))
    }

    /// All registered profile ids, sorted for stable iteration
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.profiles.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// Number of registered profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Build the standard registry shipped with the configurator
    pub fn standard() -> Self {
        let mut registry = Self::new();

        // Registration of the built-in profiles cannot collide.
        let _ = registry.register(ProductProfile {
            id: "bookcase".to_string(),
            name: "Bookcase".to_string(),
            description: "Open shelving cabinet with configurable rows and compartments"
                .to_string(),
            rules: ProductRules::Cabinet(CabinetRules::default()),
            default_material: MaterialChoice::new("oak-veneer", "oak"),
        });
        let _ = registry.register(ProductProfile {
            id: "dining-table".to_string(),
            name: "Dining Table".to_string(),
            description: "Table with rectangular, oval, or round top".to_string(),
            rules: ProductRules::Table(TableRules::default()),
            default_material: MaterialChoice::new("oak-solid", "oak"),
        });
        let _ = registry.register(ProductProfile {
            id: "console".to_string(),
            name: "Console".to_string(),
            description: "Slim hallway table with open shelves".to_string(),
            rules: ProductRules::Console(ConsoleRules::default()),
            default_material: MaterialChoice::new("oak-veneer", "black"),
        });

        debug!("built standard product registry ({} profiles)", registry.len());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductKind;

    #[test]
    fn test_standard_registry() {
        let registry = ProductRegistry::standard();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.ids(), vec!["bookcase", "console", "dining-table"]);
        assert_eq!(
            registry.get("bookcase").unwrap().kind(),
            ProductKind::Cabinet
        );
    }

    #[test]
    fn test_unknown_profile() {
        let registry = ProductRegistry::standard();
        let err = registry.get("wardrobe").unwrap_err();
        assert_eq!(err, CatalogError::ProfileNotFound("wardrobe".to_string()));
    }

    #[test]
    fn test_duplicate_registration() {
        let mut registry = ProductRegistry::standard();
        let profile = registry.get("bookcase").unwrap().clone();
        assert_eq!(
            registry.register(profile),
            Err(CatalogError::ProfileAlreadyExists("bookcase".to_string()))
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let mut registry = ProductRegistry::new();
        let mut profile = ProductRegistry::standard().get("bookcase").unwrap().clone();
        profile.id = String::new();
        assert!(registry.register(profile).is_err());
    }
}
