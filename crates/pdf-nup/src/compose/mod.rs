//! Sheet composition
//!
//! This module drives the n-up process:
//! 1. Read each source page's size
//! 2. Plan sheets (grid selection and placement)
//! 3. Ask the canvas for blank sheets and draw pages onto them

mod canvas;
mod plan;

pub use canvas::{SheetCanvas, SourcePage};
pub use plan::plan_sheets;

use crate::constants::PROGRESS_SHEET_THRESHOLD;
use crate::options::NupOptions;
use crate::types::*;

/// Compose source pages onto n-up sheets.
///
/// Returns one sheet per group of `pages_per_sheet` pages, in document
/// order. Any failure from the canvas aborts the whole run.
pub fn compose_nup<C: SheetCanvas>(
    canvas: &mut C,
    source_pages: &[C::Page],
    options: &NupOptions,
) -> Result<Vec<C::Sheet>> {
    let sizes = source_pages
        .iter()
        .map(|page| page.size())
        .collect::<Result<Vec<_>>>()?;

    let plans = plan_sheets(&sizes, options)?;
    let sheet_size = options.sheet_size();
    let total = plans.len();
    let report_every = (total / 10).max(1);

    let mut sheets = Vec::with_capacity(total);
    for plan in &plans {
        if total > PROGRESS_SHEET_THRESHOLD && plan.index % report_every == 0 {
            log::info!("Processing sheet {}/{}", plan.index + 1, total);
        }

        let mut sheet = canvas.new_blank_page(sheet_size)?;
        for placement in &plan.placements {
            let page = &source_pages[placement.source_page];
            canvas.draw_transformed(&mut sheet, page, &placement.transform)?;
        }
        sheets.push(sheet);
    }

    log::info!("Composed {} pages onto {} sheets", source_pages.len(), total);
    Ok(sheets)
}
