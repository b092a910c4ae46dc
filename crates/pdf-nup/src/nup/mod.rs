//! N-up composition of lopdf documents
//!
//! This module ties the pieces together:
//! 1. Validate options
//! 2. Read source pages and their sizes
//! 3. Compose sheets on a lopdf canvas
//! 4. Assemble the output document

mod io;

pub use io::{load_pdf, save_pdf};

use crate::compose::compose_nup;
use crate::options::NupOptions;
use crate::render::LopdfCanvas;
use crate::types::*;
use lopdf::Document;

/// Main n-up function
pub async fn nup(document: &Document, options: &NupOptions) -> Result<Document> {
    options.validate()?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || nup_sync(&document, &options)).await?
}

/// Blocking variant of [`nup`]
pub fn nup_sync(document: &Document, options: &NupOptions) -> Result<Document> {
    compose_document(document, options, None)
}

/// Compose `source` into a new document, stopping after `max_sheets` sheets if given
pub(crate) fn compose_document(
    source: &Document,
    options: &NupOptions,
    max_sheets: Option<usize>,
) -> Result<Document> {
    options.validate()?;

    let mut canvas = LopdfCanvas::new(source);
    let mut pages = canvas.source_pages()?;
    if let Some(max_sheets) = max_sheets {
        pages.truncate(max_sheets.saturating_mul(options.pages_per_sheet));
    }

    let sheets = compose_nup(&mut canvas, &pages, options)?;
    canvas.finish(sheets)
}
