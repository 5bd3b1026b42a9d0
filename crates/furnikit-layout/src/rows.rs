//! Row-height resolver.
//!
//! Maps the discrete row-height choices to centimeter values and resolves
//! a row-height sequence into cumulative shelf boundary positions. The
//! height mapping table here is the single source of truth: the
//! validator's cross-field height check and the assembler both go through
//! [`RowHeight::value_cm`], so the two can never drift apart.

use serde::{Deserialize, Serialize};

/// Height of one structural row.
///
/// The discrete choices mirror the manufacturing program; `Custom` is the
/// continuous override used when a total height does not divide evenly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RowHeight {
    /// 25 cm row
    Small,
    /// 35 cm row
    Medium,
    /// 45 cm row
    Large,
    /// Continuous override, in cm
    Custom(f64),
}

impl Default for RowHeight {
    fn default() -> Self {
        Self::Medium
    }
}

impl RowHeight {
    /// The row height in centimeters
    pub fn value_cm(&self) -> f64 {
        match self {
            Self::Small => 25.0,
            Self::Medium => 35.0,
            Self::Large => 45.0,
            Self::Custom(v) => *v,
        }
    }
}

impl std::fmt::Display for RowHeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "small (25 cm)"),
            Self::Medium => write!(f, "medium (35 cm)"),
            Self::Large => write!(f, "large (45 cm)"),
            Self::Custom(v) => write!(f, "custom ({:.1} cm)", v),
        }
    }
}

/// Total height of a row sequence, in cm.
///
/// Matches the validator's cross-field height check exactly: both use the
/// mapping in [`RowHeight::value_cm`].
pub fn total_height(row_heights: &[RowHeight]) -> f64 {
    row_heights.iter().map(RowHeight::value_cm).sum()
}

/// Resolve a row-height sequence into cumulative Y boundary positions.
///
/// Returns `len(row_heights) + 1` values: the bottom and top of every
/// row, starting at 0.0 and strictly increasing for positive heights.
pub fn resolve_positions(row_heights: &[RowHeight]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(row_heights.len() + 1);
    let mut y = 0.0;
    positions.push(y);
    for rh in row_heights {
        y += rh.value_cm();
        positions.push(y);
    }
    positions
}

/// Derive a row-height sequence from a total height.
///
/// Supports height-first editing: rows drive the configured height, so a
/// caller that edits the height instead uses this to recompute the rows.
/// Fills with `preferred` rows and folds any remainder into the top row
/// as a `Custom` height, so the sequence always sums to `height` exactly.
pub fn derive_row_heights(height: f64, preferred: RowHeight) -> Vec<RowHeight> {
    let unit = preferred.value_cm();
    if height <= 0.0 || unit <= 0.0 {
        return Vec::new();
    }
    if height < unit {
        return vec![RowHeight::Custom(height)];
    }

    let count = (height / unit).floor() as usize;
    let remainder = height - count as f64 * unit;
    let mut rows = vec![preferred; count];
    if remainder > 1e-9 {
        if let Some(last) = rows.last_mut() {
            *last = RowHeight::Custom(unit + remainder);
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_positions_small_medium_large() {
        let rows = [RowHeight::Small, RowHeight::Medium, RowHeight::Large];
        assert_eq!(resolve_positions(&rows), vec![0.0, 25.0, 60.0, 105.0]);
        assert_eq!(total_height(&rows), 105.0);
    }

    #[test]
    fn test_positions_start_at_zero_and_increase() {
        let rows = [RowHeight::Medium; 5];
        let positions = resolve_positions(&rows);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions.len(), 6);
        for pair in positions.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_total_matches_last_position() {
        let rows = [
            RowHeight::Large,
            RowHeight::Custom(12.5),
            RowHeight::Small,
            RowHeight::Medium,
        ];
        let positions = resolve_positions(&rows);
        assert!((total_height(&rows) - positions.last().unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(resolve_positions(&[]), vec![0.0]);
        assert_eq!(total_height(&[]), 0.0);
    }

    #[test]
    fn test_derive_exact_multiple() {
        let rows = derive_row_heights(175.0, RowHeight::Medium);
        assert_eq!(rows.len(), 5);
        assert!((total_height(&rows) - 175.0).abs() < 1e-9);
        assert!(rows.iter().all(|r| *r == RowHeight::Medium));
    }

    #[test]
    fn test_derive_with_remainder() {
        let rows = derive_row_heights(250.0, RowHeight::Medium);
        // 7 * 35 = 245, remainder 5 folded into the top row
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[6], RowHeight::Custom(40.0));
        assert!((total_height(&rows) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn test_derive_below_one_row() {
        let rows = derive_row_heights(20.0, RowHeight::Small);
        assert_eq!(rows, vec![RowHeight::Custom(20.0)]);
    }

    #[test]
    fn test_derive_degenerate_height() {
        assert!(derive_row_heights(0.0, RowHeight::Medium).is_empty());
        assert!(derive_row_heights(-10.0, RowHeight::Medium).is_empty());
    }
}
