//! Style layout strategies.
//!
//! One pure strategy per visual style, each computing divider positions
//! for a given span, density, and row sequence. No randomness anywhere:
//! varied styles draw their variation from deterministic patterns, so
//! identical inputs always produce identical layouts.
//!
//! ## Divider count selection
//!
//! Density maps to a target gap inside the style's `[min_gap, max_gap]`
//! band: `Low` targets the widest gap (fewest dividers), `High` the
//! narrowest, `Medium` the midpoint. The divider count is the feasible
//! count — every count whose uniform gap lies inside the band — whose gap
//! is closest to the target; ties prefer the smaller count. When no count
//! is feasible (the span is too small for even one divider at the minimum
//! gap) the strategy returns zero dividers and the row stays open. This
//! formula is the project's explicit resolution of the qualitative
//! "fewer / balanced / more" behavior of the product requirements.

use std::collections::HashMap;

use furnikit_core::Position;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rows::RowHeight;

/// Golden-ratio weight used by the asymmetric gap pattern
const WIDE_GAP_WEIGHT: f64 = 1.618;

/// Geometric growth factor of the gradient gap pattern
const GRADIENT_RATIO: f64 = 1.15;

/// The named layout styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleName {
    /// Uniform grid of equal compartments
    Grid,
    /// Alternating wide and narrow compartments
    Asymmetric,
    /// Grid with alternate rows vertically offset
    Staggered,
    /// Grid with one divider fewer than the density suggests
    Minimal,
    /// Alternating per-row column counts, offset like masonry
    Mosaic,
    /// Per-row column counts cycling a fixed sequence
    Pattern,
    /// Grid with alternate rows shifted horizontally
    Slant,
    /// Gap widths growing from left to right
    Gradient,
}

impl std::fmt::Display for StyleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Grid => "grid",
            Self::Asymmetric => "asymmetric",
            Self::Staggered => "staggered",
            Self::Minimal => "minimal",
            Self::Mosaic => "mosaic",
            Self::Pattern => "pattern",
            Self::Slant => "slant",
            Self::Gradient => "gradient",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for StyleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "asymmetric" => Ok(Self::Asymmetric),
            "staggered" => Ok(Self::Staggered),
            "minimal" => Ok(Self::Minimal),
            "mosaic" => Ok(Self::Mosaic),
            "pattern" => Ok(Self::Pattern),
            "slant" => Ok(Self::Slant),
            "gradient" => Ok(Self::Gradient),
            _ => Err(format!("Unknown style: {}", s)),
        }
    }
}

/// Qualitative spacing control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Density {
    /// Wider gaps, fewer dividers
    Low,
    /// Balanced default
    Medium,
    /// Narrower gaps, more dividers
    High,
}

impl Default for Density {
    fn default() -> Self {
        Self::Medium
    }
}

/// Spacing parameters of one named style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    /// The style this definition describes
    pub name: StyleName,
    /// Narrowest allowed gap between dividers, in cm
    pub min_gap: f64,
    /// Widest gap the count selection aims to stay under, in cm
    pub max_gap: f64,
    /// Vertical offset of alternate rows as a fraction of the row height;
    /// nonzero only for the staggered style
    pub stagger_fraction: f64,
}

impl StyleDefinition {
    /// The density target gap inside this style's gap band
    pub fn target_gap(&self, density: Density) -> f64 {
        match density {
            Density::Low => self.max_gap,
            Density::Medium => (self.min_gap + self.max_gap) / 2.0,
            Density::High => self.min_gap,
        }
    }
}

/// Registry of the named layout styles.
///
/// Built once at startup and injected into the engine; never ambient
/// global state.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    styles: HashMap<StyleName, StyleDefinition>,
}

impl StyleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// Register a style definition, replacing any previous one
    pub fn register(&mut self, definition: StyleDefinition) {
        self.styles.insert(definition.name, definition);
    }

    /// Look up a style definition
    pub fn get(&self, name: StyleName) -> Option<&StyleDefinition> {
        self.styles.get(&name)
    }

    /// Number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Build the standard registry with all eight styles
    pub fn standard() -> Self {
        let mut registry = Self::new();
        let gap = |name, min_gap, max_gap, stagger_fraction| StyleDefinition {
            name,
            min_gap,
            max_gap,
            stagger_fraction,
        };

        registry.register(gap(StyleName::Grid, 18.0, 60.0, 0.0));
        registry.register(gap(StyleName::Asymmetric, 18.0, 60.0, 0.0));
        registry.register(gap(StyleName::Staggered, 18.0, 60.0, 0.25));
        registry.register(gap(StyleName::Minimal, 24.0, 80.0, 0.0));
        registry.register(gap(StyleName::Mosaic, 18.0, 60.0, 0.0));
        registry.register(gap(StyleName::Pattern, 18.0, 60.0, 0.0));
        registry.register(gap(StyleName::Slant, 18.0, 60.0, 0.0));
        registry.register(gap(StyleName::Gradient, 16.0, 70.0, 0.0));

        debug!("built standard style registry ({} styles)", registry.len());
        registry
    }
}

/// Divider positions for one structural row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowLayout {
    /// Divider center x positions, measured from the left edge of the span
    pub divider_xs: Vec<f64>,
    /// Vertical offset applied to this row's dividers, in cm
    pub y_offset: f64,
}

/// Divider positions for every row of a cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividerLayout {
    /// The horizontal span the layout was computed for, in cm
    pub width: f64,
    /// Per-row divider positions, bottom row first
    pub rows: Vec<RowLayout>,
}

impl DividerLayout {
    /// An empty layout (no rows, no dividers)
    pub fn empty() -> Self {
        Self {
            width: 0.0,
            rows: Vec::new(),
        }
    }

    /// True when every row has identical dividers and no offsets
    pub fn is_uniform(&self) -> bool {
        match self.rows.first() {
            None => true,
            Some(first) => self
                .rows
                .iter()
                .all(|r| r.divider_xs == first.divider_xs && r.y_offset == 0.0),
        }
    }

    /// The widest column count across all rows
    pub fn max_columns(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.divider_xs.len() + 1)
            .max()
            .unwrap_or(1)
    }
}

/// Select the divider count for a span.
///
/// Implements the count formula described in the module docs: the
/// feasible count whose uniform gap is closest to the density target,
/// ties toward fewer dividers, zero when nothing is feasible.
pub fn divider_count(def: &StyleDefinition, width: f64, density: Density) -> usize {
    if width <= 0.0 || !width.is_finite() {
        return 0;
    }

    let target = def.target_gap(density);
    // gap(n) = width / (n + 1) >= min_gap  =>  n <= width / min_gap - 1
    let highest = (width / def.min_gap).floor() as isize - 1;
    if highest < 0 {
        return 0;
    }

    let mut best: Option<(usize, f64)> = None;
    for n in 0..=highest as usize {
        let g = width / (n + 1) as f64;
        if g < def.min_gap || g > def.max_gap {
            continue;
        }
        let distance = (g - target).abs();
        let better = match best {
            None => true,
            Some((_, best_distance)) => distance < best_distance - 1e-12,
        };
        if better {
            best = Some((n, distance));
        }
    }

    best.map(|(n, _)| n).unwrap_or(0)
}

/// Uniform grid divider positions for a span
fn grid_positions(width: f64, count: usize) -> Vec<f64> {
    let gap = width / (count + 1) as f64;
    (1..=count).map(|i| i as f64 * gap).collect()
}

/// Alternating wide/narrow divider positions.
///
/// Gap weights alternate golden-ratio wide and unit narrow, scaled so the
/// sequence fills the span exactly.
fn asymmetric_positions(width: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let weights: Vec<f64> = (0..=count)
        .map(|i| if i % 2 == 0 { WIDE_GAP_WEIGHT } else { 1.0 })
        .collect();
    let total: f64 = weights.iter().sum();
    let scale = width / total;

    let mut xs = Vec::with_capacity(count);
    let mut x = 0.0;
    for w in weights.iter().take(count) {
        x += w * scale;
        xs.push(x);
    }
    xs
}

/// Gap widths growing geometrically from left to right
fn gradient_positions(width: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let weights: Vec<f64> = (0..=count).map(|i| GRADIENT_RATIO.powi(i as i32)).collect();
    let total: f64 = weights.iter().sum();
    let scale = width / total;

    let mut xs = Vec::with_capacity(count);
    let mut x = 0.0;
    for w in weights.iter().take(count) {
        x += w * scale;
        xs.push(x);
    }
    xs
}

/// Grid positions shifted by half a gap, dividers crossing the right
/// margin dropped
fn slant_positions(width: f64, count: usize, min_gap: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let gap = width / (count + 1) as f64;
    grid_positions(width, count)
        .into_iter()
        .map(|x| x + gap / 2.0)
        .filter(|x| *x <= width - min_gap / 2.0)
        .collect()
}

/// Compute per-row divider positions for a style.
///
/// The returned layout has one entry per structural row. Uniform styles
/// repeat the same positions on every row; mosaic, pattern, staggered,
/// and slant vary rows deterministically by row index.
pub fn layout_rows(
    def: &StyleDefinition,
    width: f64,
    density: Density,
    row_heights: &[RowHeight],
) -> DividerLayout {
    let base = base_count(def, width, density);

    let rows = row_heights
        .iter()
        .enumerate()
        .map(|(i, rh)| row_layout(def, width, base, i, rh.value_cm()))
        .collect();

    DividerLayout { width, rows }
}

/// The base divider count for a style at a density
fn base_count(def: &StyleDefinition, width: f64, density: Density) -> usize {
    let count = divider_count(def, width, density);
    match def.name {
        // Minimal keeps the grid algorithm but drops one divider.
        StyleName::Minimal => count.saturating_sub(1),
        _ => count,
    }
}

/// Divider positions for one row of a style
fn row_layout(
    def: &StyleDefinition,
    width: f64,
    base: usize,
    row_index: usize,
    row_height: f64,
) -> RowLayout {
    let alternate = row_index % 2 == 1;

    let (divider_xs, y_offset) = match def.name {
        StyleName::Grid | StyleName::Minimal => (grid_positions(width, base), 0.0),
        StyleName::Asymmetric => (asymmetric_positions(width, base), 0.0),
        StyleName::Gradient => (gradient_positions(width, base), 0.0),
        StyleName::Staggered => {
            let offset = if alternate {
                def.stagger_fraction * row_height
            } else {
                0.0
            };
            (grid_positions(width, base), offset)
        }
        StyleName::Slant => {
            if alternate {
                (slant_positions(width, base, def.min_gap), 0.0)
            } else {
                (grid_positions(width, base), 0.0)
            }
        }
        StyleName::Mosaic => {
            let count = if alternate { base.saturating_sub(1) } else { base };
            (grid_positions(width, count), 0.0)
        }
        StyleName::Pattern => {
            // Cycle base, base-1, base+1 while the extra divider still
            // respects the minimum gap.
            let count = match row_index % 3 {
                0 => base,
                1 => base.saturating_sub(1),
                _ => {
                    if width / (base + 2) as f64 >= def.min_gap {
                        base + 1
                    } else {
                        base
                    }
                }
            };
            (grid_positions(width, count), 0.0)
        }
    };

    RowLayout {
        divider_xs,
        y_offset,
    }
}

/// Compute the base divider positions for a style as 3D positions.
///
/// This is the column-oriented contract: the divider count depends on
/// width and density, not height. Positions anchor each divider column at
/// mid-height of the span; the assembler derives the per-row geometry via
/// [`layout_rows`].
pub fn compute_divider_positions(
    def: &StyleDefinition,
    width: f64,
    height: f64,
    density: Density,
) -> Vec<Position> {
    let base = base_count(def, width, density);
    let xs = match def.name {
        StyleName::Asymmetric => asymmetric_positions(width, base),
        StyleName::Gradient => gradient_positions(width, base),
        _ => grid_positions(width, base),
    };
    xs.into_iter()
        .map(|x| Position::new(x, height / 2.0, 0.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn def(name: StyleName) -> StyleDefinition {
        StyleRegistry::standard().get(name).unwrap().clone()
    }

    #[test]
    fn test_count_respects_gap_band() {
        let grid = def(StyleName::Grid);
        for width in [40.0, 96.2, 150.0, 222.0, 296.0] {
            for density in [Density::Low, Density::Medium, Density::High] {
                let n = divider_count(&grid, width, density);
                let gap = width / (n + 1) as f64;
                if n > 0 {
                    assert!(gap >= grid.min_gap, "width {} density {:?}", width, density);
                    assert!(gap <= grid.max_gap, "width {} density {:?}", width, density);
                }
            }
        }
    }

    #[test]
    fn test_density_ordering() {
        let grid = def(StyleName::Grid);
        let low = divider_count(&grid, 200.0, Density::Low);
        let medium = divider_count(&grid, 200.0, Density::Medium);
        let high = divider_count(&grid, 200.0, Density::High);
        assert!(low <= medium);
        assert!(medium <= high);
        assert!(high > low);
    }

    #[test]
    fn test_narrow_span_gives_open_row() {
        let grid = def(StyleName::Grid);
        assert_eq!(divider_count(&grid, 17.0, Density::High), 0);
        assert_eq!(divider_count(&grid, 30.0, Density::High), 0);
        assert!(grid_positions(30.0, 0).is_empty());
    }

    #[test]
    fn test_grid_gaps_equal() {
        let xs = grid_positions(120.0, 3);
        assert_eq!(xs, vec![30.0, 60.0, 90.0]);
    }

    #[test]
    fn test_asymmetric_alternates_and_fills_span() {
        let xs = asymmetric_positions(100.0, 2);
        assert_eq!(xs.len(), 2);
        // Gaps: wide, narrow, wide with golden weights
        let gaps = [xs[0], xs[1] - xs[0], 100.0 - xs[1]];
        assert!(gaps[0] > gaps[1]);
        assert!(gaps[2] > gaps[1]);
        assert!((gaps.iter().sum::<f64>() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_gradient_gaps_increase() {
        let xs = gradient_positions(100.0, 3);
        let mut edges = vec![0.0];
        edges.extend(&xs);
        edges.push(100.0);
        for pair in edges.windows(3) {
            let left = pair[1] - pair[0];
            let right = pair[2] - pair[1];
            assert!(right > left);
        }
    }

    #[test]
    fn test_staggered_offsets_alternate_rows() {
        let staggered = def(StyleName::Staggered);
        let rows = [RowHeight::Medium; 4];
        let layout = layout_rows(&staggered, 120.0, Density::Medium, &rows);
        assert_eq!(layout.rows.len(), 4);
        assert_eq!(layout.rows[0].y_offset, 0.0);
        assert_eq!(layout.rows[1].y_offset, 0.25 * 35.0);
        assert_eq!(layout.rows[2].y_offset, 0.0);
        assert!(!layout.is_uniform());
    }

    #[test]
    fn test_grid_layout_is_uniform() {
        let grid = def(StyleName::Grid);
        let rows = [RowHeight::Small; 3];
        let layout = layout_rows(&grid, 150.0, Density::Medium, &rows);
        assert!(layout.is_uniform());
    }

    #[test]
    fn test_minimal_has_fewer_dividers_than_grid() {
        let grid = def(StyleName::Grid);
        let minimal = def(StyleName::Minimal);
        let rows = [RowHeight::Medium; 2];
        let g = layout_rows(&grid, 200.0, Density::Medium, &rows);
        let m = layout_rows(&minimal, 200.0, Density::Medium, &rows);
        assert!(m.rows[0].divider_xs.len() < g.rows[0].divider_xs.len());
    }

    #[test]
    fn test_mosaic_alternates_column_counts() {
        let mosaic = def(StyleName::Mosaic);
        let rows = [RowHeight::Medium; 3];
        let layout = layout_rows(&mosaic, 200.0, Density::Medium, &rows);
        let n0 = layout.rows[0].divider_xs.len();
        let n1 = layout.rows[1].divider_xs.len();
        assert_eq!(n1, n0.saturating_sub(1));
        assert_eq!(layout.rows[2].divider_xs.len(), n0);
    }

    #[test]
    fn test_determinism() {
        let styles = StyleRegistry::standard();
        for name in [
            StyleName::Grid,
            StyleName::Asymmetric,
            StyleName::Staggered,
            StyleName::Minimal,
            StyleName::Mosaic,
            StyleName::Pattern,
            StyleName::Slant,
            StyleName::Gradient,
        ] {
            let d = styles.get(name).unwrap();
            let a = compute_divider_positions(d, 137.0, 200.0, Density::Medium);
            let b = compute_divider_positions(d, 137.0, 200.0, Density::Medium);
            assert_eq!(a, b, "style {} not deterministic", name);
        }
    }

    #[test]
    fn test_contract_positions_anchor_mid_height() {
        let grid = def(StyleName::Grid);
        let positions = compute_divider_positions(&grid, 120.0, 210.0, Density::Medium);
        assert!(!positions.is_empty());
        for p in &positions {
            assert_eq!(p.y, 105.0);
            assert!(p.x > 0.0 && p.x < 120.0);
        }
    }
}
