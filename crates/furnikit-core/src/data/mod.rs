//! Data models for the furniture material catalog
//!
//! This module provides:
//! - Material categories and finish colors
//! - The material library with the stock catalog
//! - Custom material support

pub mod materials;

pub use materials::{Material, MaterialCategory, MaterialChoice, MaterialId, MaterialLibrary};
