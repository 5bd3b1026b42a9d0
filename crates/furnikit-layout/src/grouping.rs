//! Material grouping.
//!
//! Groups an assembled component list by (material, color) for the
//! rendering and pricing consumers. Fully derived data: recomputed after
//! every assembly, never hand-edited.

use std::collections::HashMap;

use furnikit_core::MaterialId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assembler::ProductComponent;

/// Components sharing one (material, color) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialGroup {
    /// The shared material
    pub material: MaterialId,
    /// The shared finish color
    pub color: String,
    /// Ids of the components in this group
    pub component_ids: Vec<Uuid>,
}

/// Group components by (material, color).
///
/// The result partitions the input exactly: every component id appears in
/// exactly one group. Groups are ordered by first appearance of their
/// key, which is stable across reruns on identical component lists.
pub fn group_by_material(components: &[ProductComponent]) -> Vec<MaterialGroup> {
    let mut groups: Vec<MaterialGroup> = Vec::new();
    let mut index: HashMap<(MaterialId, String), usize> = HashMap::new();

    for component in components {
        let key = (component.material.clone(), component.color.clone());
        match index.get(&key) {
            Some(&i) => groups[i].component_ids.push(component.id),
            None => {
                index.insert(key, groups.len());
                groups.push(MaterialGroup {
                    material: component.material.clone(),
                    color: component.color.clone(),
                    component_ids: vec![component.id],
                });
            }
        }
    }

    groups
}
