use crate::constants::mm_to_pt;
use crate::layout::Grid;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NupError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Input PDF has no pages")]
    EmptyDocument,
    #[error("Page {page} has unusable dimensions {width} x {height}")]
    InvalidPageGeometry { page: usize, width: f32, height: f32 },
}

pub type Result<T> = std::result::Result<T, NupError>;

/// Paper orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Portrait: height > width
    #[default]
    Portrait,
    /// Landscape: width > height
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        self == Orientation::Landscape
    }
}

/// Standard paper sizes for the output sheet
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaperSize {
    A3,
    A4,
    A5,
    #[default]
    Letter,
    Legal,
    Tabloid,
    Custom { width_mm: f32, height_mm: f32 },
}

impl PaperSize {
    /// Base dimensions in points, as (width, height) of the portrait sheet.
    ///
    /// The North American sizes are exact multiples of 72 so they are given
    /// directly rather than going through a millimetre conversion.
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::A3 => (841.89, 1190.55),
            PaperSize::A4 => (595.28, 841.89),
            PaperSize::A5 => (419.53, 595.28),
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::Custom {
                width_mm,
                height_mm,
            } => (mm_to_pt(width_mm), mm_to_pt(height_mm)),
        }
    }
}

/// Width and height of a page in points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Output sheet size for a paper size in the given orientation.
    ///
    /// Landscape puts the longer side horizontally, portrait vertically,
    /// regardless of how the paper's base dimensions are written down.
    pub fn for_orientation(paper: PaperSize, orientation: Orientation) -> Self {
        let (w, h) = paper.dimensions_pt();
        let (long, short) = if w >= h { (w, h) } else { (h, w) };
        match orientation {
            Orientation::Landscape => Self::new(long, short),
            Orientation::Portrait => Self::new(short, long),
        }
    }

    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Statistics about an n-up run
#[derive(Debug, Clone, PartialEq)]
pub struct NupStatistics {
    /// Total number of source pages
    pub source_pages: usize,
    /// Number of output sheets
    pub output_sheets: usize,
    /// Grid chosen for every sheet
    pub grid: Grid,
    /// Source pages placed on each full sheet
    pub pages_per_sheet: usize,
    /// Cells left blank across the whole output
    pub blank_cells: usize,
}
