//! Content placement within cells
//!
//! This module handles mapping a page's slot on the sheet to a grid cell,
//! and fitting the source page into that cell:
//! - Reading order to bottom-origin cell coordinates
//! - Uniform scaling inside the cell minus the margin
//! - Centering

use crate::types::PageSize;

use super::{CellPosition, Grid, PagePlacement, PlacementTransform, Rect, cell_size};

/// Map a page's index within its sheet to the cell it occupies.
///
/// Pages fill the sheet left-to-right, top-to-bottom, but cell rows are
/// counted from the bottom of the sheet. `local_index` must be less than
/// `grid.cell_count()`.
pub fn cell_position(grid: Grid, local_index: usize) -> CellPosition {
    debug_assert!(
        local_index < grid.cell_count(),
        "page slot {} outside a {}x{} grid",
        local_index,
        grid.cols,
        grid.rows
    );
    let col = local_index % grid.cols;
    let row = grid.rows - 1 - local_index / grid.cols;
    CellPosition::new(col, row)
}

/// Bounds of a cell on a sheet of the given size
pub fn cell_bounds(page: PageSize, grid: Grid, pos: CellPosition) -> Rect {
    let (cell_width, cell_height) = cell_size(page, grid);
    Rect::new(
        pos.col as f32 * cell_width,
        pos.row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

/// Scale that fits a `source_width` x `source_height` page inside the
/// available area while preserving its aspect ratio.
pub fn calculate_scale(
    source_width: f32,
    source_height: f32,
    available_width: f32,
    available_height: f32,
) -> f32 {
    (available_width / source_width).min(available_height / source_height)
}

/// Fit a source page into a cell and center it.
///
/// `margin` is subtracted once from each full cell dimension; centering then
/// leaves half of it on every side of a page that fills the interior.
///
/// # Arguments
/// * `source_page` - Index of the source page in document order
/// * `cell` - Cell the page occupies
/// * `bounds` - Bounds of that cell in sheet coordinates
/// * `source` - Intrinsic size of the source page
/// * `margin` - Total margin per dimension in points
pub fn place_page(
    source_page: usize,
    cell: CellPosition,
    bounds: &Rect,
    source: PageSize,
    margin: f32,
) -> PagePlacement {
    let scale = calculate_scale(
        source.width,
        source.height,
        bounds.width - margin,
        bounds.height - margin,
    );

    let scaled_width = source.width * scale;
    let scaled_height = source.height * scale;

    let x = bounds.x + (bounds.width - scaled_width) / 2.0;
    let y = bounds.y + (bounds.height - scaled_height) / 2.0;

    PagePlacement {
        source_page,
        cell,
        transform: PlacementTransform::uniform(scale, x, y),
        content_rect: Rect::new(x, y, scaled_width, scaled_height),
    }
}

// =============================================================================
// Tests
// =============================================================================
