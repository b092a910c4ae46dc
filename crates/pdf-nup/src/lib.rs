pub mod compose;
mod constants;
pub mod layout;
pub mod nup;
mod options;
mod preview;
pub mod render;
mod stats;
mod types;

pub use compose::{SheetCanvas, SourcePage, compose_nup, plan_sheets};
pub use constants::{CELL_MARGIN_PT, LANDSCAPE_TARGET_RATIO, PORTRAIT_TARGET_RATIO};
pub use layout::{Grid, PlacementTransform, select_grid};
pub use nup::{load_pdf, nup, nup_sync, save_pdf};
pub use options::*;
pub use preview::generate_preview;
pub use stats::{calculate_statistics, statistics_for_page_count};
pub use types::*;
