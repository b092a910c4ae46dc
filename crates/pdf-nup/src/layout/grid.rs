//! Grid selection
//!
//! Picks how many columns and rows of cells to put on each output sheet
//! for a requested number of pages per sheet.

use crate::constants::{LANDSCAPE_TARGET_RATIO, PORTRAIT_TARGET_RATIO};
use crate::types::{Orientation, PageSize};

use super::Grid;

// =============================================================================
// Grid Selection
// =============================================================================

/// Choose the grid for `pages_per_sheet` pages on a sheet of the given orientation.
///
/// Every column count from 1 to `pages_per_sheet` is tried. The grid with the
/// fewest empty cells wins; among equally full grids, the one whose
/// columns/rows ratio is closest to the sheet's own shape wins. Remaining ties
/// keep the grid found first.
///
/// Zero is treated like one; callers reject it through option validation.
pub fn select_grid(pages_per_sheet: usize, orientation: Orientation) -> Grid {
    if pages_per_sheet <= 1 {
        return Grid::new(1, 1);
    }

    let target = target_ratio(orientation);

    let mut best = Grid::new(1, pages_per_sheet);
    let mut best_empty = pages_per_sheet - 1;

    for cols in 1..=pages_per_sheet {
        let candidate = Grid::new(cols, pages_per_sheet.div_ceil(cols));
        let empty = candidate.empty_cells(pages_per_sheet);

        if empty < best_empty {
            best_empty = empty;
            best = candidate;
        } else if empty == best_empty
            && (candidate.aspect_ratio() - target).abs() < (best.aspect_ratio() - target).abs()
        {
            best = candidate;
        }
    }

    best
}

/// Columns/rows ratio the grid should approximate for an orientation
pub fn target_ratio(orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Landscape => LANDSCAPE_TARGET_RATIO,
        Orientation::Portrait => PORTRAIT_TARGET_RATIO,
    }
}

// =============================================================================
// Cell Dimensions
// =============================================================================

/// Width and height of every cell when `grid` divides a sheet of `page` size
pub fn cell_size(page: PageSize, grid: Grid) -> (f32, f32) {
    (
        page.width / grid.cols as f32,
        page.height / grid.rows as f32,
    )
}

// =============================================================================
// Tests
// =============================================================================
