//! Error handling for Furnikit
//!
//! Provides the two error families of the layout engine:
//! - Constraint violations (user-facing, recoverable, returned as data)
//! - Layout errors (caller contract violations, fatal to the call)
//!
//! All error types use `thiserror` for ergonomic error handling.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A manufacturing-constraint violation.
///
/// Violations are always returned as data in the `Err` position of a
/// `Result`, never panicked. Each variant carries the offending field,
/// the limit that was violated, and the actual value, so the calling
/// layer can decide whether to block the edit, clamp, or warn. The
/// engine itself only reports violations; it never corrects them.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstraintViolation {
    /// A dimension is outside the allowed range for the product type.
    #[error("{field} out of range: {actual} cm (allowed {min}..={max} cm)")]
    OutOfRange {
        /// The offending field, e.g. `"width"`.
        field: String,
        /// Lower bound in cm.
        min: f64,
        /// Upper bound in cm.
        max: f64,
        /// The requested value in cm.
        actual: f64,
    },

    /// A dimension does not lie on the declared increment grid.
    ///
    /// Off-increment values are rejected, never rounded; `nearest` is
    /// reported so the caller can offer a correction.
    #[error("{field} not on {step} cm increment: {actual} cm (nearest valid {nearest} cm)")]
    OffIncrement {
        /// The offending field.
        field: String,
        /// Increment step in cm.
        step: f64,
        /// The requested value in cm.
        actual: f64,
        /// The closest value that lies on the increment grid.
        nearest: f64,
    },

    /// The row-height sequence does not add up to the configured height.
    #[error("row heights sum to {actual} cm, configured interior height is {expected} cm")]
    RowHeightSumMismatch {
        /// Height the rows must fill, in cm.
        expected: f64,
        /// Sum of the requested row heights, in cm.
        actual: f64,
    },

    /// More rows were requested than the product type allows.
    #[error("row count {actual} exceeds maximum of {max}")]
    TooManyRows {
        /// Maximum row count for the product type.
        max: usize,
        /// Requested row count.
        actual: usize,
    },

    /// The layout produces more columns than the product type allows.
    #[error("column count {actual} exceeds maximum of {max}")]
    TooManyColumns {
        /// Maximum column count for the product type.
        max: usize,
        /// Columns the requested style and density would produce.
        actual: usize,
    },

    /// An unsupported span exceeds the structural maximum.
    #[error("unsupported span {span} cm exceeds maximum of {max_span} cm")]
    SpanTooWide {
        /// The resulting span in cm.
        span: f64,
        /// Maximum unsupported span in cm.
        max_span: f64,
    },

    /// A drawer compartment's resolved depth is below the minimum.
    #[error(
        "drawer at row {row}, column {column} needs depth >= {min_depth} cm, resolved {actual} cm"
    )]
    DrawerTooShallow {
        /// Grid row of the offending cell.
        row: usize,
        /// Grid column of the offending cell.
        column: usize,
        /// Minimum drawer depth in cm.
        min_depth: f64,
        /// Resolved cell depth in cm.
        actual: f64,
    },

    /// A door compartment's row is shorter than the minimum door height.
    #[error("door at row {row} needs row height >= {min_height} cm, got {actual} cm")]
    DoorTooShort {
        /// Grid row of the offending cell.
        row: usize,
        /// Minimum door height in cm.
        min_height: f64,
        /// Actual row height in cm.
        actual: f64,
    },

    /// The selected material id is not in the material library.
    #[error("unknown material: {material}")]
    UnknownMaterial {
        /// The unknown material id.
        material: String,
    },

    /// The selected finish color is not offered for the material.
    #[error("color '{color}' not available for material {material}")]
    ColorUnavailable {
        /// The material id.
        material: String,
        /// The requested color.
        color: String,
    },

    /// An option was requested that the product type does not support.
    #[error("{feature} not supported by product type {product}")]
    UnsupportedOption {
        /// The product profile id.
        product: String,
        /// The unsupported option, e.g. `"pedestal legs on oval top"`.
        feature: String,
    },
}

impl ConstraintViolation {
    /// The configuration field this violation refers to, for UI display.
    pub fn field(&self) -> String {
        match self {
            Self::OutOfRange { field, .. } | Self::OffIncrement { field, .. } => field.clone(),
            Self::RowHeightSumMismatch { .. } | Self::TooManyRows { .. } => {
                "row_heights".to_string()
            }
            Self::TooManyColumns { .. } => "density".to_string(),
            Self::SpanTooWide { .. } => "width".to_string(),
            Self::DrawerTooShallow { row, column, .. } => {
                format!("compartments[{}][{}]", row, column)
            }
            Self::DoorTooShort { row, .. } => format!("compartments[{}]", row),
            Self::UnknownMaterial { .. } | Self::ColorUnavailable { .. } => "material".to_string(),
            Self::UnsupportedOption { feature, .. } => feature.clone(),
        }
    }
}

/// Assembly precondition failure.
///
/// Raised when the assembler or compartment builder is invoked with an
/// unvalidated or internally inconsistent configuration. This is a bug in
/// the calling layer, not a user-facing condition: it is fatal to the
/// call and should be surfaced as an internal error, never corrected
/// silently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Row-height sequence length does not match the row count.
    #[error("row height count {row_heights} does not match row count {rows}")]
    RowCountMismatch {
        /// Number of structural rows.
        rows: usize,
        /// Length of the row-height sequence.
        row_heights: usize,
    },

    /// A cabinet configuration reached the assembler with no rows.
    #[error("configuration has no rows")]
    EmptyRows,

    /// A dimension reached the assembler as NaN or infinity.
    #[error("non-finite value for {field}: {value}")]
    NonFinite {
        /// The offending field.
        field: String,
        /// The non-finite value.
        value: f64,
    },

    /// No style definition with the given name exists in the registry.
    #[error("unknown style: {0}")]
    UnknownStyle(String),

    /// The validated configuration belongs to a different profile.
    #[error("configuration was validated for profile '{expected}', got '{actual}'")]
    ProfileMismatch {
        /// Profile the configuration was validated against.
        expected: String,
        /// Profile passed to the assembler.
        actual: String,
    },
}

/// Main error type for Furnikit.
///
/// A unified error type that can represent any error from the engine.
/// This is the primary error type used in public pipeline APIs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The configuration failed constraint validation.
    #[error("configuration failed validation with {} violation(s)", .0.len())]
    Constraint(Vec<ConstraintViolation>),

    /// A caller contract violation inside the pipeline.
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

impl Error {
    /// Check if this is a recoverable constraint error.
    pub fn is_constraint(&self) -> bool {
        matches!(self, Error::Constraint(_))
    }

    /// The violations behind a constraint error, if any.
    pub fn violations(&self) -> &[ConstraintViolation] {
        match self {
            Error::Constraint(v) => v,
            Error::Layout(_) => &[],
        }
    }
}

impl From<Vec<ConstraintViolation>> for Error {
    fn from(violations: Vec<ConstraintViolation>) -> Self {
        Error::Constraint(violations)
    }
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
