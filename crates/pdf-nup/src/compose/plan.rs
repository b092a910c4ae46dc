//! Sheet planning
//!
//! Works purely on page sizes: splits the document into sheets and
//! computes where each page lands.

use crate::layout::{SheetPlan, cell_bounds, cell_position, cell_size, place_page, select_grid};
use crate::options::NupOptions;
use crate::types::*;

/// Lay out every source page onto output sheets.
///
/// Pages are taken in document order in groups of `pages_per_sheet`; the
/// last sheet may be partially filled. The grid is chosen once for the
/// whole run.
pub fn plan_sheets(source_sizes: &[PageSize], options: &NupOptions) -> Result<Vec<SheetPlan>> {
    options.validate()?;

    if source_sizes.is_empty() {
        return Err(NupError::EmptyDocument);
    }

    let per_sheet = options.pages_per_sheet;
    let grid = select_grid(per_sheet, options.orientation);
    let sheet_size = options.sheet_size();
    let margin = options.cell_margin_pt;

    let (cell_width, cell_height) = cell_size(sheet_size, grid);
    if cell_width <= margin || cell_height <= margin {
        return Err(NupError::InvalidConfiguration(format!(
            "{} pages per sheet leaves {:.1} x {:.1} pt cells, too small for a {} pt margin",
            per_sheet, cell_width, cell_height, margin
        )));
    }

    log::info!(
        "Laying out {} pages as {}x{} on {:.0} x {:.0} pt sheets",
        source_sizes.len(),
        grid.cols,
        grid.rows,
        sheet_size.width,
        sheet_size.height
    );

    source_sizes
        .chunks(per_sheet)
        .enumerate()
        .map(|(sheet_idx, chunk)| -> Result<SheetPlan> {
            let placements = chunk
                .iter()
                .enumerate()
                .map(|(local_idx, &size)| {
                    let page_idx = sheet_idx * per_sheet + local_idx;
                    if !size.is_usable() {
                        return Err(NupError::InvalidPageGeometry {
                            page: page_idx,
                            width: size.width,
                            height: size.height,
                        });
                    }

                    let cell = cell_position(grid, local_idx);
                    let bounds = cell_bounds(sheet_size, grid, cell);
                    let placement = place_page(page_idx, cell, &bounds, size, margin);

                    log::debug!(
                        "sheet {} page {} -> cell ({}, {}) scale {:.4} at ({:.2}, {:.2})",
                        sheet_idx,
                        page_idx,
                        cell.col,
                        cell.row,
                        placement.transform.scale_x,
                        placement.transform.translate_x,
                        placement.transform.translate_y
                    );
                    Ok(placement)
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(SheetPlan {
                index: sheet_idx,
                placements,
            })
        })
        .collect()
}
