//! Layout data types for n-up composition
//!
//! These types represent the intermediate layout calculations between
//! grid selection and PDF rendering.

/// Page grid used on every output sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns (always >= 1)
    pub cols: usize,
    /// Number of rows (always >= 1)
    pub rows: usize,
}

impl Grid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Cells left over when `pages` pages are placed on one sheet
    pub fn empty_cells(&self, pages: usize) -> usize {
        self.cell_count().saturating_sub(pages)
    }

    /// Shape of the grid as columns over rows
    pub fn aspect_ratio(&self) -> f64 {
        self.cols as f64 / self.rows as f64
    }
}

/// Position of a cell on the sheet
///
/// Row 0 is the *bottom* row, matching PDF user space where y grows
/// upward. Reading order (top to bottom) is therefore reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPosition {
    /// Column index (0 = leftmost column)
    pub col: usize,
    /// Row index (0 = bottom row)
    pub row: usize,
}

impl CellPosition {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

/// A rectangular area in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    /// Center x coordinate
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Center y coordinate
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }
}

/// Affine scale-and-translate applied when drawing a source page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementTransform {
    pub scale_x: f32,
    pub scale_y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
}

impl PlacementTransform {
    /// Uniform scale followed by a translation
    pub fn uniform(scale: f32, translate_x: f32, translate_y: f32) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            translate_x,
            translate_y,
        }
    }

    /// PDF matrix operands `a b c d e f` for the `cm` operator
    pub fn matrix(&self) -> [f32; 6] {
        [
            self.scale_x,
            0.0,
            0.0,
            self.scale_y,
            self.translate_x,
            self.translate_y,
        ]
    }
}

/// Final placement of a source page on an output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlacement {
    /// Index of the source page in document order
    pub source_page: usize,
    /// Cell the page occupies
    pub cell: CellPosition,
    /// Transform mapping source page space onto the sheet
    pub transform: PlacementTransform,
    /// Area covered by the scaled page, in sheet coordinates
    pub content_rect: Rect,
}

/// Layout of one output sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    /// Sheet index in output order
    pub index: usize,
    /// Placements in reading order (left-to-right, top-to-bottom)
    pub placements: Vec<PagePlacement>,
}

impl SheetPlan {
    /// Source page indices on this sheet, in reading order
    pub fn source_pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().map(|p| p.source_page)
    }
}
