//! Shared constants for n-up composition
//!
//! This module centralizes magic numbers used by grid selection,
//! placement and the lopdf backend.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4; // ≈ 2.83465

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Default Page Dimensions
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Default page dimensions as tuple (width, height)
pub const DEFAULT_PAGE_DIMENSIONS: (f32, f32) = (DEFAULT_PAGE_WIDTH_PT, DEFAULT_PAGE_HEIGHT_PT);

// =============================================================================
// Grid Selection
// =============================================================================

/// Target columns/rows ratio for landscape sheets (≈ 11 / 8.5)
pub const LANDSCAPE_TARGET_RATIO: f64 = 1.29;

/// Target columns/rows ratio for portrait sheets (≈ 8.5 / 11)
pub const PORTRAIT_TARGET_RATIO: f64 = 0.77;

// =============================================================================
// Placement
// =============================================================================

/// Total margin subtracted from each cell dimension before scaling (points).
/// Centering splits it evenly, so each side gets half.
pub const CELL_MARGIN_PT: f32 = 10.0;

// =============================================================================
// Progress Reporting
// =============================================================================

/// Runs with more sheets than this log progress while composing
pub const PROGRESS_SHEET_THRESHOLD: usize = 10;
