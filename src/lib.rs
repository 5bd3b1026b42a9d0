//! # Furnikit
//!
//! Layout and geometry derivation engine for a parametric 3D furniture
//! configurator. This facade crate re-exports the public API of the
//! member crates:
//!
//! - [`furnikit_core`] — units, geometry value types, errors, materials
//! - [`furnikit_catalog`] — product profiles and constraint tables
//! - [`furnikit_layout`] — validator, style strategies, assembler,
//!   compartments, grouping, and the `compute_layout` pipeline
//!
//! The engine is a stateless function library: build the registries once
//! at startup, then run every configuration edit through
//! [`validate`](furnikit_layout::validate) and
//! [`compute_layout`](furnikit_layout::compute_layout). Rendering,
//! persistence, pricing, and UI state live in the surrounding
//! application layers, not here.

pub use furnikit_catalog as catalog;
pub use furnikit_core as core;
pub use furnikit_layout as layout;

pub use furnikit_catalog::{ProductKind, ProductProfile, ProductRegistry};
pub use furnikit_core::{
    ConstraintViolation, Dimensions, Error, LayoutError, MaterialChoice, MaterialLibrary,
    Position, Result,
};
pub use furnikit_layout::{
    compute_layout, validate, Density, LayoutResult, ProductConfiguration, RowHeight, StyleName,
    StyleRegistry, ValidatedConfig,
};
