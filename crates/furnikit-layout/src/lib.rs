//! # Furnikit Layout
//!
//! The layout derivation engine of the furniture configurator. Given a
//! product configuration (dimensions, style, density, per-row heights,
//! leg options, materials), it deterministically computes the structural
//! component list — shelves, dividers, legs, compartments — and their 3D
//! positions, gated by the manufacturing-constraint validator.
//!
//! ## Pipeline
//!
//! ```text
//! validate (constraint gate)
//!   ├── styles   (divider positions per row)
//!   ├── rows     (cumulative shelf boundaries)
//!   └── compute_layout
//!         ├── assembler    (typed components with 3D positions)
//!         ├── compartments (storage cells with derived bounds)
//!         └── grouping     (components by material + color)
//! ```
//!
//! Every stage is a pure, synchronous function: no shared mutable state,
//! no I/O, no randomness. The previous component list is discarded and
//! rebuilt wholesale on every edit, which keeps recomputation trivially
//! testable and safe to run from multiple threads.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use furnikit_layout::{compute_layout, validate, StyleRegistry};
//! use furnikit_catalog::ProductRegistry;
//! use furnikit_core::MaterialLibrary;
//!
//! let registry = ProductRegistry::standard();
//! let library = MaterialLibrary::standard();
//! let styles = StyleRegistry::standard();
//!
//! let profile = registry.get("bookcase")?;
//! let validated = validate(profile, &library, &styles, &config)?;
//! let layout = compute_layout(profile, &styles, &validated)?;
//! // layout.components -> rendering, layout.material_groups -> pricing
//! ```

pub mod assembler;
pub mod compartments;
pub mod config;
pub mod grouping;
pub mod pipeline;
pub mod presets;
pub mod rows;
pub mod styles;
pub mod validator;

pub use assembler::{assemble, product_bounds, ComponentKind, ProductComponent};
pub use compartments::{build_compartments, Compartment, CompartmentType};
pub use config::ProductConfiguration;
pub use grouping::{group_by_material, MaterialGroup};
pub use pipeline::{compute_layout, LayoutResult};
pub use presets::{standard_presets, Preset};
pub use rows::{derive_row_heights, resolve_positions, total_height, RowHeight};
pub use styles::{
    compute_divider_positions, divider_count, layout_rows, Density, DividerLayout, RowLayout,
    StyleDefinition, StyleName, StyleRegistry,
};
pub use validator::{validate, ValidatedConfig};
