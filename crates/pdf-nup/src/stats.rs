use crate::layout::select_grid;
use crate::options::NupOptions;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for composing `document` with `options`
pub fn calculate_statistics(document: &Document, options: &NupOptions) -> Result<NupStatistics> {
    statistics_for_page_count(document.get_pages().len(), options)
}

/// Calculate statistics for a document with `source_pages` pages
pub fn statistics_for_page_count(
    source_pages: usize,
    options: &NupOptions,
) -> Result<NupStatistics> {
    options.validate()?;

    if source_pages == 0 {
        return Err(NupError::EmptyDocument);
    }

    let pages_per_sheet = options.pages_per_sheet;
    let grid = select_grid(pages_per_sheet, options.orientation);
    let output_sheets = source_pages.div_ceil(pages_per_sheet);
    let blank_cells = output_sheets * grid.cell_count() - source_pages;

    Ok(NupStatistics {
        source_pages,
        output_sheets,
        grid,
        pages_per_sheet,
        blank_cells,
    })
}
