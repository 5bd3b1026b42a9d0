//! # Furnikit Core
//!
//! Core types, errors, and utilities for the Furnikit layout engine.
//! Provides the fundamental abstractions shared by the catalog and layout
//! crates: measurement units, 3D position and dimension value types, the
//! error taxonomy, and the material database.

pub mod data;
pub mod error;
pub mod geometry;
pub mod units;

pub use data::{
    Material, MaterialCategory, MaterialChoice, MaterialId, MaterialLibrary,
};

pub use error::{ConstraintViolation, Error, LayoutError, Result};

pub use geometry::{Bounds, Dimensions, Position};

pub use units::{format_length, get_unit_label, parse_length, Units};
