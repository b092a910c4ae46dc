//! Layout calculation modules for n-up composition
//!
//! This module handles all the geometric calculations:
//! - Grid selection (how many columns and rows per sheet)
//! - Cell geometry (bottom-origin cell bounds)
//! - Content placement (scaling and centering inside a cell)

mod grid;
mod placement;
mod types;

pub use grid::*;
pub use placement::*;
pub use types::*;
