//! # Furnikit Catalog
//!
//! Product type profiles for the Furnikit layout engine. Each profile
//! carries the manufacturing constraint tables (dimension ranges with
//! increments, row/column limits, span rules, compartment minimums, leg
//! and top options) that the validator checks configurations against and
//! the assembler consults when emitting components.
//!
//! Profiles are immutable once built. The [`ProductRegistry`] is
//! constructed once at startup and injected into the engine; it is never
//! ambient global state.

pub mod error;
pub mod model;
pub mod registry;

pub use error::{CatalogError, CatalogResult};
pub use model::{
    CabinetRules, ConsoleRules, CountRange, DimensionRange, LegPosition, LegStyle, ProductKind,
    ProductProfile, ProductRules, TableRules, TopShape,
};
pub use registry::ProductRegistry;
