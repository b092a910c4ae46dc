//! Drawing surface used by the compositor
//!
//! The compositor never touches PDF objects directly. A backend provides
//! source pages that know their size, blank sheets, and a way to draw a
//! page onto a sheet under a transform.

use crate::layout::PlacementTransform;
use crate::types::{PageSize, Result};

/// A page of the input document
pub trait SourcePage {
    /// Intrinsic width and height of the page in points
    fn size(&self) -> Result<PageSize>;
}

/// Backend that produces output sheets
pub trait SheetCanvas {
    type Page: SourcePage;
    type Sheet;

    /// Create an empty output sheet of the given size
    fn new_blank_page(&mut self, size: PageSize) -> Result<Self::Sheet>;

    /// Draw `page` onto `sheet`, mapping page space through `transform`
    fn draw_transformed(
        &mut self,
        sheet: &mut Self::Sheet,
        page: &Self::Page,
        transform: &PlacementTransform,
    ) -> Result<()>;
}
